use slidetile_core::{GridSize, PieceId, Slot};

/// Errors returned by [`Game`](crate::Game) operations.
///
/// Well-formed but illegal requests are not errors; they are reported as
/// ignored outcomes instead. Errors signal input that does not belong to the
/// game at all.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// The piece id is out of range for the grid.
    #[display("piece {id} does not exist on a {size} grid")]
    UnknownPiece {
        /// Requested id.
        id: PieceId,
        /// Grid of the game.
        size: GridSize,
    },
    /// A replacement arrangement has a different grid size than the game.
    #[display("expected a {expected} arrangement, got {actual}")]
    GridSizeMismatch {
        /// Grid of the game.
        expected: GridSize,
        /// Grid of the arrangement.
        actual: GridSize,
    },
    /// A saved game failed validation.
    #[display("invalid saved game: {_0}")]
    #[from]
    InvalidSavedState(SavedStateError),
}

/// Reasons a [`SavedGame`](crate::SavedGame) cannot be restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SavedStateError {
    /// The piece sequence does not hold exactly N² pieces.
    #[display("expected {expected} pieces, got {actual}")]
    PieceCount {
        /// Required count.
        expected: usize,
        /// Count found.
        actual: usize,
    },
    /// A piece id is out of range for the grid.
    #[display("piece {id} is out of range")]
    PieceOutOfRange {
        /// Offending id.
        id: PieceId,
    },
    /// The same piece id appears twice.
    #[display("piece {id} appears more than once")]
    DuplicatePiece {
        /// Repeated id.
        id: PieceId,
    },
    /// A slot is off the grid.
    #[display("slot {slot} is off the grid")]
    SlotOutOfRange {
        /// Offending slot.
        slot: Slot,
    },
    /// Two pieces occupy the same slot.
    #[display("slot {slot} is occupied twice")]
    SlotCollision {
        /// Shared slot.
        slot: Slot,
    },
    /// A piece's blank flag disagrees with its id.
    #[display("piece {id} has an inconsistent blank flag")]
    BlankFlagMismatch {
        /// Offending id.
        id: PieceId,
    },
    /// A history snapshot failed validation.
    #[display("history snapshot {index} is invalid")]
    InvalidSnapshot {
        /// Position of the snapshot, oldest first.
        index: usize,
    },
}
