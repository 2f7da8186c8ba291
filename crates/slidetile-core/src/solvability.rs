//! Inversion-parity solvability test.
//!
//! An inversion is a pair of tiles appearing out of increasing goal order when
//! the slots are read row-major; the blank never takes part. Every legal slide
//! either keeps the inversion count (horizontal) or changes it by N − 1
//! (vertical), which yields the classic criterion:
//!
//! - odd N: solvable iff the inversion count is even;
//! - even N: solvable iff the blank's row counted from the bottom (1-based)
//!   plus the inversion count is odd.

use crate::{Arrangement, PieceId};

/// Counts inversions among the non-blank ids of `ids`.
///
/// # Examples
///
/// ```
/// use slidetile_core::{PieceId, inversion_count};
///
/// let ids = [PieceId::Tile(2), PieceId::Blank, PieceId::Tile(0), PieceId::Tile(1)];
/// assert_eq!(inversion_count(&ids), 2);
/// ```
#[must_use]
pub fn inversion_count(ids: &[PieceId]) -> usize {
    let goals: Vec<u16> = ids.iter().filter_map(|id| id.goal()).map(|g| g.index()).collect();
    goals
        .iter()
        .enumerate()
        .map(|(i, &a)| goals[i + 1..].iter().filter(|&&b| a > b).count())
        .sum()
}

/// Returns `true` if `arrangement` is reachable from the solved arrangement by
/// legal slides.
///
/// # Examples
///
/// ```
/// use slidetile_core::{Arrangement, GridSize, is_solvable};
///
/// assert!(is_solvable(&Arrangement::solved(GridSize::MEDIUM)));
/// let swapped: Arrangement = "1 0 2 3 4 5 6 7 -1".parse().unwrap();
/// assert!(!is_solvable(&swapped));
/// ```
#[must_use]
pub fn is_solvable(arrangement: &Arrangement) -> bool {
    let size = arrangement.size();
    let inversions = inversion_count(arrangement.as_slice());
    if size.side() % 2 == 1 {
        return inversions % 2 == 0;
    }
    let (blank_row, _) = arrangement.blank_slot().row_col(size);
    let blank_row_from_bottom = usize::from(size.side() - blank_row);
    (blank_row_from_bottom + inversions) % 2 == 1
}
