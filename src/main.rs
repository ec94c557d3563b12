//! Mystic Battle GUI
//!
//! A graphical interface for playing Mystic Battle against the AI.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use mystic::cli::{init_tracing, GameArgs};
use mystic::ui::{GameState, MysticApp};
use mystic::GameSession;

#[derive(Parser)]
#[command(name = "mystic")]
#[command(version, about = "Place elements, score adjacencies, beat the minimax AI", long_about = None)]
struct Cli {
    #[command(flatten)]
    game: GameArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing("info");

    let session = GameSession::new(cli.game.size, cli.game.engine_config())?;
    info!("starting GUI");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 620.0])
            .with_min_inner_size([640.0, 420.0])
            .with_title("Mystic Battle"),
        ..Default::default()
    };

    eframe::run_native(
        "Mystic Battle",
        options,
        Box::new(move |cc| Ok(Box::new(MysticApp::new(cc, GameState::new(session))))),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {e}"))
}
