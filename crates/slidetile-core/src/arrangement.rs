//! Slot-to-piece permutations.

use std::{fmt, ops::Index, str::FromStr};

use crate::{GridSize, PieceId, Slot, piece_id::InvalidPieceId, solvability};

/// A complete placement of pieces on a grid: entry `i` is the piece in slot `i`.
///
/// An arrangement always holds exactly N² entries containing every tile id
/// `0..N²−1` once and exactly one [`PieceId::Blank`].
///
/// # Examples
///
/// ```
/// use slidetile_core::{Arrangement, GridSize, PieceId, Slot};
///
/// let arrangement: Arrangement = "1 -1 2 3 4 5 6 7 0".parse().unwrap();
/// assert_eq!(arrangement.size(), GridSize::EASY);
/// assert_eq!(arrangement.blank_slot(), Slot::new(1));
/// assert_eq!(arrangement[Slot::new(8)], PieceId::Tile(0));
/// assert_eq!(arrangement.to_string(), "1 -1 2 3 4 5 6 7 0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Arrangement {
    size: GridSize,
    ids: Vec<PieceId>,
    blank: Slot,
}

/// Errors returned when building an [`Arrangement`] from raw ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ArrangementError {
    /// The number of ids is not N².
    #[display("expected {expected} pieces, got {actual}")]
    WrongLength {
        /// Required number of ids.
        expected: usize,
        /// Number of ids supplied.
        actual: usize,
    },
    /// A tile id does not belong on this grid.
    #[display("piece {id} is out of range for a {size} grid")]
    OutOfRange {
        /// Offending id.
        id: PieceId,
        /// Grid the id was checked against.
        size: GridSize,
    },
    /// The same piece appears more than once.
    #[display("piece {id} appears more than once")]
    Duplicate {
        /// Repeated id.
        id: PieceId,
    },
}

/// Errors returned when parsing an [`Arrangement`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ParseArrangementError {
    /// A token is not an integer.
    #[display("invalid token {token:?}")]
    InvalidToken {
        /// Unparsable token.
        token: String,
    },
    /// A token is an integer but not a piece id.
    #[display("{_0}")]
    #[from]
    InvalidPieceId(InvalidPieceId),
    /// The token count is not a square of a supported side.
    #[display("{count} pieces do not form a supported square grid")]
    NotSquare {
        /// Number of tokens.
        count: usize,
    },
    /// The ids do not form a valid permutation.
    #[display("{_0}")]
    #[from]
    Arrangement(ArrangementError),
}

impl Arrangement {
    /// Creates an arrangement from the piece in each slot, in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`ArrangementError`] if `ids` is not a permutation of the tiles
    /// and the blank for `size`. A second blank is reported as
    /// [`ArrangementError::Duplicate`].
    pub fn new(ids: Vec<PieceId>, size: GridSize) -> Result<Self, ArrangementError> {
        let expected = usize::from(size.slot_count());
        if ids.len() != expected {
            return Err(ArrangementError::WrongLength {
                expected,
                actual: ids.len(),
            });
        }

        let mut seen = vec![false; expected];
        let mut blank = None;
        for (slot, &id) in size.slots().zip(&ids) {
            if !id.fits(size) {
                return Err(ArrangementError::OutOfRange { id, size });
            }
            let ordinal = id.ordinal(size);
            if seen[ordinal] {
                return Err(ArrangementError::Duplicate { id });
            }
            seen[ordinal] = true;
            if id.is_blank() {
                blank = Some(slot);
            }
        }

        // Length and uniqueness together leave exactly one blank.
        let blank = blank.unwrap_or(size.last_slot());
        Ok(Self { size, ids, blank })
    }

    /// Returns the solved arrangement: tile `i` in slot `i`, blank last.
    #[must_use]
    pub fn solved(size: GridSize) -> Self {
        let ids = (0..size.tile_count())
            .map(PieceId::Tile)
            .chain([PieceId::Blank])
            .collect();
        Self {
            size,
            ids,
            blank: size.last_slot(),
        }
    }

    /// Returns the grid size.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the slot holding the blank.
    #[must_use]
    pub fn blank_slot(&self) -> Slot {
        self.blank
    }

    /// Returns the piece in `slot`, or `None` if the slot is off the grid.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<PieceId> {
        self.ids.get(slot.as_usize()).copied()
    }

    /// Returns the slot currently holding `id`.
    #[must_use]
    pub fn slot_of(&self, id: PieceId) -> Option<Slot> {
        self.size
            .slots()
            .zip(&self.ids)
            .find_map(|(slot, &other)| (other == id).then_some(slot))
    }

    /// Returns the ids in slot order.
    #[must_use]
    pub fn as_slice(&self) -> &[PieceId] {
        &self.ids
    }

    /// Iterates over `(slot, piece)` pairs in slot order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Slot, PieceId)> + '_ {
        self.size.slots().zip(self.ids.iter().copied())
    }

    /// Returns `true` if every tile sits in its goal slot.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.iter()
            .all(|(slot, id)| id.goal().is_none_or(|goal| goal == slot))
    }

    /// Returns `true` if this arrangement can be solved by legal slides.
    ///
    /// See [`solvability::is_solvable`].
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        solvability::is_solvable(self)
    }

    /// Consumes the arrangement, returning the ids in slot order.
    #[must_use]
    pub fn into_inner(self) -> Vec<PieceId> {
        self.ids
    }
}

impl Index<Slot> for Arrangement {
    type Output = PieceId;

    fn index(&self, slot: Slot) -> &Self::Output {
        &self.ids[slot.as_usize()]
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.ids.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{id}")?;
        }
        Ok(())
    }
}

impl FromStr for Arrangement {
    type Err = ParseArrangementError;

    /// Parses whitespace-separated ids in slot order, `-1` marking the blank.
    ///
    /// The grid size is inferred from the number of ids.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ids = s
            .split_whitespace()
            .map(|token| {
                let value = token
                    .parse::<i32>()
                    .map_err(|_| ParseArrangementError::InvalidToken {
                        token: token.to_owned(),
                    })?;
                Ok(PieceId::try_from(value)?)
            })
            .collect::<Result<Vec<_>, ParseArrangementError>>()?;

        let count = ids.len();
        let size = side_for_count(count)
            .and_then(|side| GridSize::new(side).ok())
            .ok_or(ParseArrangementError::NotSquare { count })?;
        Ok(Self::new(ids, size)?)
    }
}

fn side_for_count(count: usize) -> Option<u8> {
    (GridSize::MIN_SIDE..=GridSize::MAX_SIDE).find(|&side| usize::from(side).pow(2) == count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_layout() {
        let solved = Arrangement::solved(GridSize::EASY);
        assert_eq!(solved.to_string(), "0 1 2 3 4 5 6 7 -1");
        assert!(solved.is_solved());
        assert_eq!(solved.blank_slot(), Slot::new(8));
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        let ids = vec![PieceId::Tile(0), PieceId::Tile(1), PieceId::Blank];
        assert_eq!(
            Arrangement::new(ids, GridSize::new(2).unwrap()),
            Err(ArrangementError::WrongLength {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_new_rejects_duplicates_and_missing_blank() {
        let size = GridSize::new(2).unwrap();
        let dup_tile = vec![
            PieceId::Tile(0),
            PieceId::Tile(0),
            PieceId::Tile(1),
            PieceId::Blank,
        ];
        assert_eq!(
            Arrangement::new(dup_tile, size),
            Err(ArrangementError::Duplicate {
                id: PieceId::Tile(0)
            })
        );

        let two_blanks = vec![
            PieceId::Tile(0),
            PieceId::Blank,
            PieceId::Tile(1),
            PieceId::Blank,
        ];
        assert_eq!(
            Arrangement::new(two_blanks, size),
            Err(ArrangementError::Duplicate { id: PieceId::Blank })
        );

        let out_of_range = vec![
            PieceId::Tile(0),
            PieceId::Tile(1),
            PieceId::Tile(3),
            PieceId::Blank,
        ];
        assert!(matches!(
            Arrangement::new(out_of_range, size),
            Err(ArrangementError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse() {
        let arrangement: Arrangement = "1 -1 2 3 4 5 6 7 0".parse().unwrap();
        assert_eq!(arrangement.blank_slot(), Slot::new(1));
        assert_eq!(arrangement.slot_of(PieceId::Tile(0)), Some(Slot::new(8)));
        assert!(!arrangement.is_solved());

        assert!(matches!(
            "0 1 2".parse::<Arrangement>(),
            Err(ParseArrangementError::NotSquare { count: 3 })
        ));
        assert!(matches!(
            "0 x 2 -1".parse::<Arrangement>(),
            Err(ParseArrangementError::InvalidToken { .. })
        ));
        assert!(matches!(
            "0 -5 2 -1".parse::<Arrangement>(),
            Err(ParseArrangementError::InvalidPieceId(_))
        ));
        assert!(matches!(
            "0 0 2 -1".parse::<Arrangement>(),
            Err(ParseArrangementError::Arrangement(_))
        ));
    }

    #[test]
    fn test_is_solved_requires_every_tile_home() {
        let arrangement: Arrangement = "0 1 -1 2".parse().unwrap();
        assert!(!arrangement.is_solved());
        let arrangement: Arrangement = "0 1 2 -1".parse().unwrap();
        assert!(arrangement.is_solved());
    }
}
