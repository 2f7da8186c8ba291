use std::{collections::HashSet, num::NonZero};

use serde::{Deserialize, Serialize};
use slidetile_core::{GridSize, PieceId};

use crate::{
    Game, GameError, Piece, SavedStateError, Shape, Snapshot, Timestamp, UndoHistory,
    game::GameParts,
};

/// Serialisable form of a [`Game`].
///
/// Field names are camelCase on the wire. Restoring goes through
/// [`Game::from_saved`], which rejects anything that does not describe a
/// consistent board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    /// Pieces in any order.
    pub pieces: Vec<Piece>,
    /// Grid size.
    pub grid_size: GridSize,
    /// Moves made, net of undos.
    pub move_count: u32,
    /// When the game started.
    pub started_at: Timestamp,
    /// When the game was solved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solved_at: Option<Timestamp>,
    /// Whether the game was solved.
    #[serde(default)]
    pub is_solved: bool,
    /// Opaque image reference.
    #[serde(default)]
    pub image: String,
    /// Board outline.
    #[serde(default)]
    pub shape: Shape,
    /// Undo snapshots, oldest first.
    #[serde(default)]
    pub history: Vec<Snapshot>,
    /// Undo history bound, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_capacity: Option<NonZero<usize>>,
}

impl From<&Game> for SavedGame {
    fn from(game: &Game) -> Self {
        Self {
            pieces: game.pieces().to_vec(),
            grid_size: game.size(),
            move_count: game.move_count(),
            started_at: game.started_at(),
            solved_at: game.solved_at(),
            is_solved: game.is_solved(),
            image: game.image().to_owned(),
            shape: game.shape(),
            history: game.history().iter().cloned().collect(),
            history_capacity: game.history().capacity(),
        }
    }
}

impl From<Game> for SavedGame {
    fn from(game: Game) -> Self {
        Self::from(&game)
    }
}

impl TryFrom<SavedGame> for Game {
    type Error = SavedStateError;

    fn try_from(saved: SavedGame) -> Result<Self, Self::Error> {
        let size = saved.grid_size;
        let pieces = validate_pieces(&saved.pieces, size)?;
        let snapshots = saved
            .history
            .iter()
            .enumerate()
            .map(|(index, snapshot)| {
                validate_pieces(snapshot.pieces(), size)
                    .map(Snapshot::new)
                    .map_err(|_| SavedStateError::InvalidSnapshot { index })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let solved = pieces.iter().all(|p| p.is_blank() || p.is_home());
        if solved != saved.is_solved {
            log::debug!(
                "saved solved flag {} disagrees with the board, using {solved}",
                saved.is_solved
            );
        }
        let solved_at = if solved {
            Some(saved.solved_at.unwrap_or(saved.started_at))
        } else {
            None
        };

        Ok(Self::from_parts(GameParts {
            size,
            pieces,
            move_count: saved.move_count,
            started_at: saved.started_at,
            solved_at,
            solved,
            image: saved.image,
            shape: saved.shape,
            history: UndoHistory::from_snapshots(snapshots, saved.history_capacity),
        }))
    }
}

impl Game {
    /// Returns the serialisable form of this game.
    #[must_use]
    pub fn to_saved(&self) -> SavedGame {
        SavedGame::from(self)
    }

    /// Restores a game from its serialisable form.
    ///
    /// The solved status is recomputed from the pieces.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSavedState`] if the pieces or any history
    /// snapshot do not form a permutation of the grid.
    pub fn from_saved(saved: SavedGame) -> Result<Self, GameError> {
        Self::try_from(saved).map_err(|err| {
            log::warn!("rejected saved game: {err}");
            GameError::from(err)
        })
    }
}

/// Checks that `pieces` hold every id and every slot of `size` exactly once, and
/// returns them in identity order with image samples recomputed.
fn validate_pieces(pieces: &[Piece], size: GridSize) -> Result<Vec<Piece>, SavedStateError> {
    let expected = usize::from(size.slot_count());
    if pieces.len() != expected {
        return Err(SavedStateError::PieceCount {
            expected,
            actual: pieces.len(),
        });
    }

    let mut ids = HashSet::with_capacity(expected);
    let mut slots = HashSet::with_capacity(expected);
    for piece in pieces {
        let (id, slot) = (piece.id(), piece.slot());
        if !id.fits(size) {
            return Err(SavedStateError::PieceOutOfRange { id });
        }
        if !size.contains(slot) {
            return Err(SavedStateError::SlotOutOfRange { slot });
        }
        if !ids.insert(id) {
            return Err(SavedStateError::DuplicatePiece { id });
        }
        if !slots.insert(slot) {
            return Err(SavedStateError::SlotCollision { slot });
        }
    }

    let mut restored: Vec<Piece> = pieces
        .iter()
        .map(|piece| Piece::new(piece.id(), piece.slot(), size))
        .collect();
    restored.sort_by_key(|piece| piece.id().ordinal(size));
    debug_assert_eq!(restored.last().map(Piece::id), Some(PieceId::Blank));
    Ok(restored)
}
