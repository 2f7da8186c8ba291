//! Commands typed at the prompt.

use std::str::FromStr;

use slidetile_core::PieceId;

/// One line of player input.
///
/// Tiles are numbered from 1 on screen, so label `n` is tile `n - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(PieceId),
    Undo,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseCommandError {
    #[display("empty command")]
    Empty,
    #[display("there is no tile 0; tiles are numbered from 1")]
    TileZero,
    #[display("unknown command {input:?} (type h for help)")]
    Unknown { input: String },
}

pub const HELP: &str = "\
commands:
  <n>        slide tile n into the blank
  u, undo    take back the last move
  r, reset   start over with a new shuffle
  h, help    show this help
  q, quit    save and exit";

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ParseCommandError::Empty);
        }
        if let Ok(label) = input.parse::<u16>() {
            let goal = label.checked_sub(1).ok_or(ParseCommandError::TileZero)?;
            return Ok(Self::Move(PieceId::Tile(goal)));
        }
        match input.to_ascii_lowercase().as_str() {
            "u" | "undo" => Ok(Self::Undo),
            "r" | "reset" => Ok(Self::Reset),
            "h" | "help" | "?" => Ok(Self::Help),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            _ => Err(ParseCommandError::Unknown {
                input: input.to_owned(),
            }),
        }
    }
}
