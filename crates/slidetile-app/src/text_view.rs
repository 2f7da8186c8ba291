//! Plain-text rendering of a game.

use std::{fmt::Write as _, time::Duration};

use slidetile_core::PieceId;
use slidetile_game::Game;

/// Renders the board, one row per line, tiles labelled from 1 and the blank as `.`.
#[must_use]
pub fn render_grid(game: &Game) -> String {
    let arrangement = game.arrangement();
    let side = usize::from(game.size().side());
    let width = game.size().tile_count().to_string().len();
    let mut out = String::new();
    for (i, (_, id)) in arrangement.iter().enumerate() {
        if i % side != 0 {
            out.push(' ');
        }
        match id {
            PieceId::Tile(goal) => {
                let _ = write!(out, "{:>width$}", goal + 1);
            }
            PieceId::Blank => {
                let _ = write!(out, "{:>width$}", ".");
            }
        }
        if i % side == side - 1 {
            out.push('\n');
        }
    }
    out
}

/// Formats a duration as `m:ss`.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// One-line status: moves, elapsed time and whether the puzzle is solved.
#[must_use]
pub fn render_status(game: &Game, elapsed: Duration) -> String {
    let state = if game.is_solved() { "solved" } else { "in progress" };
    format!(
        "{} | moves: {} | time: {} | {state}",
        game.size(),
        game.move_count(),
        format_duration(elapsed)
    )
}
