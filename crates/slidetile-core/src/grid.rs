//! Grid geometry for N×N boards.
//!
//! Slots are numbered in row-major order: slot `i` lies at row `i / N` and
//! column `i % N`. Two slots are adjacent when they share a row and differ by one
//! column, or share a column and differ by one row. There are no diagonals and
//! no wraparound.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side length of a square puzzle grid.
///
/// A grid of side N has N² slots and N² − 1 tiles plus one blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GridSize(u8);

/// Error returned when constructing a [`GridSize`] out of the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("grid side must be between {} and {}, got {side}", GridSize::MIN_SIDE, GridSize::MAX_SIDE)]
pub struct GridSizeError {
    side: u8,
}

impl GridSizeError {
    /// Returns the rejected side length.
    #[must_use]
    pub fn side(self) -> u8 {
        self.side
    }
}

impl GridSize {
    /// Smallest supported side length.
    pub const MIN_SIDE: u8 = 2;
    /// Largest supported side length.
    pub const MAX_SIDE: u8 = 16;

    /// 3×3 grid.
    pub const EASY: Self = Self(3);
    /// 4×4 grid.
    pub const MEDIUM: Self = Self(4);
    /// 5×5 grid.
    pub const HARD: Self = Self(5);

    /// Creates a grid size from its side length.
    ///
    /// # Errors
    ///
    /// Returns [`GridSizeError`] if `side` is outside
    /// [`MIN_SIDE`](Self::MIN_SIDE)..=[`MAX_SIDE`](Self::MAX_SIDE).
    pub const fn new(side: u8) -> Result<Self, GridSizeError> {
        if side < Self::MIN_SIDE || side > Self::MAX_SIDE {
            return Err(GridSizeError { side });
        }
        Ok(Self(side))
    }

    /// Returns the side length N.
    #[must_use]
    pub const fn side(self) -> u16 {
        self.0 as u16
    }

    /// Returns the number of slots, N².
    #[must_use]
    pub const fn slot_count(self) -> u16 {
        self.side() * self.side()
    }

    /// Returns the number of non-blank tiles, N² − 1.
    #[must_use]
    pub const fn tile_count(self) -> u16 {
        self.slot_count() - 1
    }

    /// Returns the last slot, where the blank sits when solved.
    #[must_use]
    pub const fn last_slot(self) -> Slot {
        Slot(self.slot_count() - 1)
    }

    /// Returns `true` if `slot` lies on this grid.
    #[must_use]
    pub const fn contains(self, slot: Slot) -> bool {
        slot.0 < self.slot_count()
    }

    /// Iterates over all slots in row-major order.
    pub fn slots(self) -> impl DoubleEndedIterator<Item = Slot> + ExactSizeIterator {
        (0..self.slot_count()).map(Slot)
    }
}

impl TryFrom<u8> for GridSize {
    type Error = GridSizeError;

    fn try_from(side: u8) -> Result<Self, Self::Error> {
        Self::new(side)
    }
}

impl From<GridSize> for u8 {
    fn from(size: GridSize) -> Self {
        size.0
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.0)
    }
}

/// A row-major slot index on a grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
pub struct Slot(u16);

impl Slot {
    /// Creates a slot from its row-major index.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Creates a slot from row and column coordinates.
    ///
    /// The coordinates must lie on the grid; this is debug-asserted only.
    #[must_use]
    pub fn from_row_col(row: u16, col: u16, size: GridSize) -> Self {
        debug_assert!(row < size.side() && col < size.side());
        Self(row * size.side() + col)
    }

    /// Returns the row-major index.
    #[must_use]
    pub const fn index(self) -> u16 {
        self.0
    }

    /// Returns the row-major index as `usize`, for indexing into slices.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Returns `(row, col)` of this slot.
    #[must_use]
    pub fn row_col(self, size: GridSize) -> (u16, u16) {
        to_row_col(self, size)
    }

    /// Returns `true` if `other` is orthogonally adjacent to this slot.
    #[must_use]
    pub fn is_adjacent(self, other: Slot, size: GridSize) -> bool {
        are_adjacent(self, other, size)
    }

    /// Iterates over the orthogonal neighbours of this slot (up, left, right, down).
    pub fn neighbors(self, size: GridSize) -> impl Iterator<Item = Slot> {
        let (row, col) = self.row_col(size);
        let last = size.side() - 1;
        [
            (row > 0).then(|| (row - 1, col)),
            (col > 0).then(|| (row, col - 1)),
            (col < last).then(|| (row, col + 1)),
            (row < last).then(|| (row + 1, col)),
        ]
        .into_iter()
        .flatten()
        .map(move |(r, c)| Slot::from_row_col(r, c, size))
    }
}

impl From<Slot> for usize {
    fn from(slot: Slot) -> Self {
        slot.as_usize()
    }
}

/// Converts a slot into `(row, col)` coordinates.
///
/// `slot` must lie on the grid; this is debug-asserted only.
///
/// # Examples
///
/// ```
/// use slidetile_core::{GridSize, Slot, to_row_col};
///
/// assert_eq!(to_row_col(Slot::new(5), GridSize::EASY), (1, 2));
/// assert_eq!(to_row_col(Slot::new(5), GridSize::MEDIUM), (1, 1));
/// ```
#[must_use]
pub fn to_row_col(slot: Slot, size: GridSize) -> (u16, u16) {
    debug_assert!(size.contains(slot), "slot {slot} is outside a {size} grid");
    (slot.0 / size.side(), slot.0 % size.side())
}

/// Returns `true` if two slots are orthogonal neighbours.
///
/// Both slots must lie on the grid; this is debug-asserted only.
///
/// # Examples
///
/// ```
/// use slidetile_core::{GridSize, Slot, are_adjacent};
///
/// let size = GridSize::EASY;
/// assert!(are_adjacent(Slot::new(1), Slot::new(4), size));
/// assert!(!are_adjacent(Slot::new(2), Slot::new(3), size)); // no wraparound
/// assert!(!are_adjacent(Slot::new(0), Slot::new(4), size)); // no diagonals
/// ```
#[must_use]
pub fn are_adjacent(a: Slot, b: Slot, size: GridSize) -> bool {
    let (r1, c1) = to_row_col(a, size);
    let (r2, c2) = to_row_col(b, size);
    (r1.abs_diff(r2) == 1 && c1 == c2) || (c1.abs_diff(c2) == 1 && r1 == r2)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_grid_size_bounds() {
        assert!(GridSize::new(1).is_err());
        assert_eq!(GridSize::new(2).map(GridSize::side), Ok(2));
        assert_eq!(GridSize::new(16).map(GridSize::slot_count), Ok(256));
        assert_eq!(GridSize::new(17).unwrap_err().side(), 17);
    }

    #[test]
    fn test_tiers() {
        assert_eq!(GridSize::EASY.slot_count(), 9);
        assert_eq!(GridSize::MEDIUM.tile_count(), 15);
        assert_eq!(GridSize::HARD.last_slot(), Slot::new(24));
    }

    #[test]
    fn test_row_col_round_trip() {
        let size = GridSize::MEDIUM;
        for slot in size.slots() {
            let (row, col) = slot.row_col(size);
            assert_eq!(Slot::from_row_col(row, col, size), slot);
        }
    }

    #[test]
    fn test_adjacency_rejects_wraparound_and_self() {
        let size = GridSize::MEDIUM;
        assert!(!are_adjacent(Slot::new(3), Slot::new(4), size));
        assert!(!are_adjacent(Slot::new(5), Slot::new(5), size));
        assert!(are_adjacent(Slot::new(5), Slot::new(9), size));
        assert!(!are_adjacent(Slot::new(1), Slot::new(9), size));
    }

    #[test]
    fn test_neighbors() {
        let size = GridSize::EASY;
        let corner: Vec<_> = Slot::new(0).neighbors(size).collect();
        assert_eq!(corner, vec![Slot::new(1), Slot::new(3)]);
        let center: Vec<_> = Slot::new(4).neighbors(size).collect();
        assert_eq!(
            center,
            vec![Slot::new(1), Slot::new(3), Slot::new(5), Slot::new(7)]
        );
    }

    #[test]
    fn test_grid_size_serde_rejects_out_of_range() {
        assert_eq!(serde_json::to_string(&GridSize::HARD).unwrap(), "5");
        assert!(serde_json::from_str::<GridSize>("1").is_err());
    }

    fn slot_pair() -> impl Strategy<Value = (GridSize, Slot, Slot)> {
        (GridSize::MIN_SIDE..=8).prop_flat_map(|side| {
            let size = GridSize::new(side).unwrap();
            let n = size.slot_count();
            (Just(size), (0..n).prop_map(Slot::new), (0..n).prop_map(Slot::new))
        })
    }

    proptest! {
        #[test]
        fn prop_adjacency_is_symmetric((size, a, b) in slot_pair()) {
            prop_assert_eq!(are_adjacent(a, b, size), are_adjacent(b, a, size));
        }

        #[test]
        fn prop_neighbors_match_adjacency((size, a, b) in slot_pair()) {
            let is_neighbor = a.neighbors(size).any(|n| n == b);
            prop_assert_eq!(is_neighbor, are_adjacent(a, b, size));
        }
    }
}
