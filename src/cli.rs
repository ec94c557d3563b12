//! Command-line options shared by the drivers.

use clap::Args;

use crate::engine::{EngineConfig, DEFAULT_DEPTH};
use crate::DEFAULT_BOARD_SIZE;

/// Game and engine settings
#[derive(Args, Debug, Clone)]
pub struct GameArgs {
    /// Cells per side of the square board
    #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE)]
    pub size: usize,

    /// Plies the AI searches ahead (its own move counts as one)
    #[arg(short, long, default_value_t = DEFAULT_DEPTH, allow_negative_numbers = true)]
    pub depth: i32,

    /// Threads used to split the AI's candidate moves
    #[arg(short, long, default_value_t = 1)]
    pub threads: usize,
}

impl GameArgs {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            depth: self.depth,
            threads: self.threads,
        }
    }
}

/// Install the `tracing` subscriber used by the binaries.
///
/// Reads `RUST_LOG`, falling back to `default_filter`. Logs go to stderr so
/// they never mix with the board printed on stdout.
pub fn init_tracing(default_filter: &str) {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        game: GameArgs,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::parse_from(["mystic"]);
        assert_eq!(cli.game.size, 3);
        assert_eq!(cli.game.engine_config(), EngineConfig::default());
    }

    #[test]
    fn test_overrides() {
        let cli = TestCli::parse_from(["mystic", "--size", "4", "-d", "1", "--threads", "2"]);
        assert_eq!(cli.game.size, 4);
        assert_eq!(
            cli.game.engine_config(),
            EngineConfig { depth: 1, threads: 2 }
        );
    }

    #[test]
    fn test_negative_depth_accepted() {
        let cli = TestCli::parse_from(["mystic", "--depth", "-1"]);
        assert_eq!(cli.game.depth, -1);
    }
}
