//! Sliding-tile puzzle game state.
//!
//! This crate turns a shuffled [`Arrangement`] into a playable [`Game`]:
//!
//! - [`create_pieces`] builds the piece records, each carrying the fixed image
//!   region it samples from.
//! - [`Game`] holds the session state and implements moves, undo, reset and
//!   solved detection. Illegal but well-formed requests (a tile not next to the
//!   blank, undo with no history, anything after solving) leave the state
//!   untouched and report why through [`MoveOutcome`] / [`UndoOutcome`].
//! - [`Session`] wraps a game and notifies a [`GameObserver`] after every state
//!   change and once on completion.
//! - [`SavedGame`] is the plain, serialisable form of a game.
//!
//! # Example
//!
//! ```
//! use slidetile_core::{Arrangement, PieceId};
//! use slidetile_game::{Game, IgnoredMove, MoveOutcome, Timestamp};
//!
//! let arrangement: Arrangement = "1 -1 2 3 4 5 6 7 0".parse().unwrap();
//! let mut game = Game::from_arrangement(&arrangement, "photo.jpg", Timestamp::from_millis(0));
//!
//! // Tile 0 is not next to the blank.
//! assert_eq!(
//!     game.apply_move(PieceId::Tile(0)).unwrap(),
//!     MoveOutcome::Ignored(IgnoredMove::NotAdjacent)
//! );
//!
//! // Tile 3 sits diagonally from it, which is not a legal slide either.
//! assert_eq!(
//!     game.apply_move(PieceId::Tile(3)).unwrap(),
//!     MoveOutcome::Ignored(IgnoredMove::NotAdjacent)
//! );
//!
//! // Tile 4 is directly below it.
//! assert!(game.apply_move(PieceId::Tile(4)).unwrap().is_moved());
//! assert_eq!(game.arrangement().to_string(), "1 4 2 3 -1 5 6 7 0");
//! assert_eq!(game.move_count(), 1);
//! ```
//!
//! [`Arrangement`]: slidetile_core::Arrangement

pub use self::{
    difficulty::{Difficulty, ParseDifficultyError, Shape},
    error::{GameError, SavedStateError},
    game::{Game, GameStatus, IgnoredMove, IgnoredUndo, MoveOutcome, UndoOutcome},
    history::{Snapshot, UndoHistory},
    piece::{ImageSample, Piece, create_pieces},
    saved::SavedGame,
    session::{GameObserver, Session},
    timestamp::Timestamp,
};

mod difficulty;
mod error;
mod game;
mod history;
mod piece;
mod saved;
mod session;
mod timestamp;
