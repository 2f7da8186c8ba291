//! Piece identity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{GridSize, Slot};

/// Integer used for the blank in textual and serialised forms.
pub const BLANK_SENTINEL: i32 = -1;

/// Identity of a piece: the slot a tile belongs to when solved, or the blank.
///
/// Ordering places every tile before the blank, matching the stable identity
/// order of a piece sequence.
///
/// Serialises as a plain integer, with [`BLANK_SENTINEL`] for the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum PieceId {
    /// A tile whose goal is the contained slot index.
    Tile(u16),
    /// The empty slot.
    Blank,
}

impl PieceId {
    /// Returns `true` for the blank.
    #[must_use]
    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }

    /// Returns the goal slot of a tile, or `None` for the blank.
    #[must_use]
    pub const fn goal(self) -> Option<Slot> {
        match self {
            Self::Tile(goal) => Some(Slot::new(goal)),
            Self::Blank => None,
        }
    }

    /// Returns the slot this piece samples its image region from.
    ///
    /// Tiles sample their goal slot; the blank samples the last slot.
    #[must_use]
    pub const fn sample_slot(self, size: GridSize) -> Slot {
        match self {
            Self::Tile(goal) => Slot::new(goal),
            Self::Blank => size.last_slot(),
        }
    }

    /// Returns the position of this piece in the identity order used by piece
    /// sequences: tiles by goal, then the blank at `N² − 1`.
    #[must_use]
    pub const fn ordinal(self, size: GridSize) -> usize {
        self.sample_slot(size).as_usize()
    }

    /// Returns `true` if this id can appear on a grid of the given size.
    #[must_use]
    pub const fn fits(self, size: GridSize) -> bool {
        match self {
            Self::Tile(goal) => goal < size.tile_count(),
            Self::Blank => true,
        }
    }
}

impl From<PieceId> for i32 {
    fn from(id: PieceId) -> Self {
        match id {
            PieceId::Tile(goal) => i32::from(goal),
            PieceId::Blank => BLANK_SENTINEL,
        }
    }
}

/// Error returned when an integer is neither a tile id nor the blank sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid piece id: {value}")]
pub struct InvalidPieceId {
    value: i32,
}

impl TryFrom<i32> for PieceId {
    type Error = InvalidPieceId;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if value == BLANK_SENTINEL {
            return Ok(Self::Blank);
        }
        u16::try_from(value)
            .map(Self::Tile)
            .map_err(|_| InvalidPieceId { value })
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&i32::from(*self), f)
    }
}
