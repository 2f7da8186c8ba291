//! Core data structures for sliding-tile puzzles.
//!
//! This crate provides the pure, stateless building blocks shared by shuffle
//! generation and game management:
//!
//! 1. **Grid geometry** - [`grid`]: the [`GridSize`] of an N×N board, row-major
//!    [`Slot`] indices, and orthogonal adjacency.
//! 2. **Piece identity** - [`piece_id`]: [`PieceId`], either the goal slot of a
//!    tile or the blank.
//! 3. **Arrangements** - [`arrangement`]: a validated permutation mapping every
//!    slot to the piece occupying it.
//! 4. **Solvability** - [`solvability`]: the inversion-parity test deciding
//!    whether an arrangement can be reached from the solved one by legal slides.
//!
//! # Examples
//!
//! ```
//! use slidetile_core::{Arrangement, GridSize, Slot};
//!
//! let solved = Arrangement::solved(GridSize::EASY);
//! assert!(solved.is_solved());
//! assert!(solved.is_solvable());
//! assert_eq!(solved.blank_slot(), Slot::new(8));
//!
//! // Swapping two adjacent tiles flips the inversion parity.
//! let swapped: Arrangement = "1 0 2 3 4 5 6 7 -1".parse().unwrap();
//! assert!(!swapped.is_solvable());
//! ```

pub mod arrangement;
pub mod grid;
pub mod piece_id;
pub mod solvability;

pub use self::{
    arrangement::{Arrangement, ArrangementError, ParseArrangementError},
    grid::{GridSize, GridSizeError, Slot, are_adjacent, to_row_col},
    piece_id::{BLANK_SENTINEL, InvalidPieceId, PieceId},
    solvability::{inversion_count, is_solvable},
};
