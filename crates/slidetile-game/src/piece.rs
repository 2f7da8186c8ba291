use serde::{Deserialize, Serialize};
use slidetile_core::{Arrangement, GridSize, PieceId, Slot};

use crate::SavedStateError;

/// Normalised image coordinates of a piece's top-left corner, each in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageSample {
    /// Horizontal offset, `goal column / N`.
    pub u: f64,
    /// Vertical offset, `goal row / N`.
    pub v: f64,
}

impl ImageSample {
    /// Returns the sample for a piece, derived from its goal slot.
    ///
    /// The blank samples the region of the last slot.
    #[must_use]
    pub fn for_piece(id: PieceId, size: GridSize) -> Self {
        let (row, col) = id.sample_slot(size).row_col(size);
        let side = f64::from(size.side());
        Self {
            u: f64::from(col) / side,
            v: f64::from(row) / side,
        }
    }
}

/// One tile, or the blank, and where it currently sits.
///
/// The image sample is fixed at creation from the piece's goal, so the picture
/// only reassembles when every tile is home.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "PieceRecord", try_from = "PieceRecord")]
pub struct Piece {
    id: PieceId,
    slot: Slot,
    image_sample: ImageSample,
}

impl Piece {
    /// Creates a piece at `slot`, computing its image sample.
    #[must_use]
    pub fn new(id: PieceId, slot: Slot, size: GridSize) -> Self {
        Self {
            id,
            slot,
            image_sample: ImageSample::for_piece(id, size),
        }
    }

    /// Returns the piece identity.
    #[must_use]
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// Returns the slot the piece currently occupies.
    #[must_use]
    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// Returns the image region this piece shows.
    #[must_use]
    pub fn image_sample(&self) -> ImageSample {
        self.image_sample
    }

    /// Returns `true` for the blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.id.is_blank()
    }

    /// Returns `true` if this is a tile sitting in its goal slot.
    ///
    /// The blank is never "home"; its slot does not take part in solved checks.
    #[must_use]
    pub fn is_home(&self) -> bool {
        self.id.goal() == Some(self.slot)
    }

    pub(crate) fn set_slot(&mut self, slot: Slot) {
        self.slot = slot;
    }
}

/// Builds the piece records for an arrangement.
///
/// The result holds one piece per slot, ordered by identity: tiles by goal,
/// then the blank. The function is pure.
///
/// # Examples
///
/// ```
/// use slidetile_core::{Arrangement, PieceId, Slot};
/// use slidetile_game::create_pieces;
///
/// let arrangement: Arrangement = "1 -1 2 3 4 5 6 7 0".parse().unwrap();
/// let pieces = create_pieces(&arrangement);
/// assert_eq!(pieces[0].id(), PieceId::Tile(0));
/// assert_eq!(pieces[0].slot(), Slot::new(8));
/// assert!(pieces[8].is_blank());
/// assert_eq!(pieces[8].slot(), Slot::new(1));
/// ```
#[must_use]
pub fn create_pieces(arrangement: &Arrangement) -> Vec<Piece> {
    let size = arrangement.size();
    let mut pieces: Vec<Piece> = arrangement
        .iter()
        .map(|(slot, id)| Piece::new(id, slot, size))
        .collect();
    pieces.sort_by_key(|piece| piece.id);
    pieces
}

/// Serialised form of a [`Piece`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PieceRecord {
    goal_id: PieceId,
    current_slot: Slot,
    image_sample: ImageSample,
    is_blank: bool,
}

impl From<Piece> for PieceRecord {
    fn from(piece: Piece) -> Self {
        Self {
            goal_id: piece.id,
            current_slot: piece.slot,
            image_sample: piece.image_sample,
            is_blank: piece.is_blank(),
        }
    }
}

impl TryFrom<PieceRecord> for Piece {
    type Error = SavedStateError;

    fn try_from(record: PieceRecord) -> Result<Self, Self::Error> {
        if record.is_blank != record.goal_id.is_blank() {
            return Err(SavedStateError::BlankFlagMismatch {
                id: record.goal_id,
            });
        }
        Ok(Self {
            id: record.goal_id,
            slot: record.current_slot,
            image_sample: record.image_sample,
        })
    }
}
