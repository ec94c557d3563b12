//! Mystic Battle terminal driver
//!
//! Plays one game on stdin/stdout: the human enters a cell and an element,
//! the AI replies, until the board is full.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use mystic::cli::{init_tracing, GameArgs};
use mystic::{Element, GameSession, Move};

#[derive(Parser)]
#[command(name = "mystic_cli")]
#[command(version, about = "Play Mystic Battle against the minimax AI in the terminal", long_about = None)]
struct Cli {
    #[command(flatten)]
    game: GameArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing("warn");

    let session = GameSession::new(cli.game.size, cli.game.engine_config())?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(session, stdin.lock(), stdout.lock())
}

/// Parse "row col". Coordinates that are numbers but negative map to `None`
/// and are later rejected as an invalid move.
fn parse_coords(line: &str) -> Option<(Option<usize>, Option<usize>)> {
    let mut parts = line.split_whitespace();
    let row: i64 = parts.next()?.parse().ok()?;
    let col: i64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((usize::try_from(row).ok(), usize::try_from(col).ok()))
}

/// Read one line; `None` at end of input
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    Ok((read > 0).then_some(line))
}

fn show_board(output: &mut impl Write, session: &GameSession) -> Result<()> {
    writeln!(output, "{}\n", session.board())?;
    Ok(())
}

/// Game loop
fn run(mut session: GameSession, mut input: impl BufRead, mut output: impl Write) -> Result<()> {
    let element_names = Element::ALL.map(Element::name).join(", ");

    loop {
        show_board(&mut output, &session)?;

        write!(output, "Enter move (row col): ")?;
        output.flush()?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };
        let Some((row, col)) = parse_coords(&line) else {
            writeln!(output, "Invalid input! Please enter valid numbers.")?;
            continue;
        };

        write!(output, "Choose element [{element_names}]: ")?;
        output.flush()?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };

        let element = line.parse::<Element>();
        let placed = match (row, col, element) {
            (Some(row), Some(col), Ok(element)) => session.play_human(Move::new(row, col, element)),
            (_, _, element) => {
                debug!(?row, ?col, ?element, "unusable human input");
                false
            }
        };
        if !placed {
            writeln!(output, "Invalid move! Try again.")?;
            continue;
        }

        show_board(&mut output, &session)?;
        writeln!(output, "AI thinking...")?;
        if let Some(mv) = session.play_ai() {
            writeln!(output, "AI plays {} at ({}, {})", mv.element, mv.row(), mv.col())?;
        }

        if session.is_over() {
            show_board(&mut output, &session)?;
            writeln!(output, "Game over! Final score: {}", session.score())?;
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mystic::EngineConfig;

    fn play(size: usize, script: &str) -> String {
        let session = GameSession::new(size, EngineConfig::default()).unwrap();
        let mut output = Vec::new();
        run(session, script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_coords() {
        assert_eq!(parse_coords("1 2\n"), Some((Some(1), Some(2))));
        assert_eq!(parse_coords("  0   0 "), Some((Some(0), Some(0))));
        assert_eq!(parse_coords("-1 2"), Some((None, Some(2))));
        assert_eq!(parse_coords("a b"), None);
        assert_eq!(parse_coords("1"), None);
        assert_eq!(parse_coords("1 2 3"), None);
    }

    #[test]
    fn test_single_cell_game() {
        let out = play(1, "0 0\nFire\n");
        assert!(out.contains("Fire\n"));
        assert!(out.contains("Game over! Final score: 0"));
        assert!(!out.contains("AI plays"));
    }

    #[test]
    fn test_invalid_inputs_reprompt() {
        let out = play(2, "x y\n5 5\nFire\n0 0\nLava\n");
        assert!(out.contains("Invalid input! Please enter valid numbers."));
        assert_eq!(out.matches("Invalid move! Try again.").count(), 2);
        assert!(!out.contains("Game over!"));
    }

    #[test]
    fn test_ai_replies_and_game_ends() {
        // Human moves cover every cell in order; rejected ones fall through
        // to the next free cell.
        let session = GameSession::new(2, EngineConfig::default()).unwrap();
        let mut output = Vec::new();
        run(session, "0 0\nFire\n0 1\nWater\n1 0\nEarth\n1 1\nAir\n".as_bytes(), &mut output).unwrap();
        let out = String::from_utf8(output).unwrap();

        assert!(out.contains("AI thinking..."));
        assert!(out.contains("AI plays"));
        assert!(out.contains("Game over! Final score:"));
    }

    #[test]
    fn test_eof_ends_cleanly() {
        let out = play(3, "");
        assert!(out.starts_with("- - -\n- - -\n- - -\n\n"));
    }
}
