use std::{
    collections::{VecDeque, vec_deque},
    num::NonZero,
};

use serde::{Deserialize, Serialize};

use crate::Piece;

/// A full copy of a game's piece sequence at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(Vec<Piece>);

impl Snapshot {
    pub(crate) fn new(pieces: Vec<Piece>) -> Self {
        Self(pieces)
    }

    /// Returns the pieces captured by this snapshot, in identity order.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.0
    }

    pub(crate) fn into_pieces(self) -> Vec<Piece> {
        self.0
    }
}

/// Stack of snapshots for stepping back one move at a time.
///
/// Unbounded by default. With a capacity, pushing onto a full history evicts the
/// oldest snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UndoHistory {
    stack: VecDeque<Snapshot>,
    capacity: Option<NonZero<usize>>,
}

impl UndoHistory {
    /// Creates an empty, unbounded history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty history holding at most `capacity` snapshots.
    #[must_use]
    pub fn with_capacity(capacity: NonZero<usize>) -> Self {
        Self {
            stack: VecDeque::with_capacity(capacity.get()),
            capacity: Some(capacity),
        }
    }

    /// Rebuilds a history from snapshots, oldest first.
    ///
    /// When `capacity` is smaller than the number of snapshots, the oldest
    /// ones are dropped.
    #[must_use]
    pub fn from_snapshots(snapshots: Vec<Snapshot>, capacity: Option<NonZero<usize>>) -> Self {
        let mut stack = VecDeque::from(snapshots);
        if let Some(capacity) = capacity {
            let overflow = stack.len().saturating_sub(capacity.get());
            for _ in 0..overflow {
                stack.pop_front();
            }
        }
        Self { stack, capacity }
    }

    /// Returns the capacity, or `None` if unbounded.
    #[must_use]
    pub fn capacity(&self) -> Option<NonZero<usize>> {
        self.capacity
    }

    /// Changes the capacity, evicting the oldest snapshots if needed.
    pub fn set_capacity(&mut self, capacity: Option<NonZero<usize>>) {
        let stack = std::mem::take(&mut self.stack);
        *self = Self::from_snapshots(stack.into(), capacity);
    }

    /// Returns the number of snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns `true` if there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Iterates over snapshots, oldest first.
    #[must_use]
    pub fn iter(&self) -> vec_deque::Iter<'_, Snapshot> {
        self.stack.iter()
    }

    pub(crate) fn push(&mut self, snapshot: Snapshot) {
        if let Some(capacity) = self.capacity
            && self.stack.len() == capacity.get()
        {
            self.stack.pop_front();
        }
        self.stack.push_back(snapshot);
    }

    pub(crate) fn pop(&mut self) -> Option<Snapshot> {
        self.stack.pop_back()
    }

    pub(crate) fn clear(&mut self) {
        self.stack.clear();
    }
}

impl<'a> IntoIterator for &'a UndoHistory {
    type Item = &'a Snapshot;
    type IntoIter = vec_deque::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use slidetile_core::{GridSize, PieceId, Slot};

    use super::*;

    fn snapshot(tag: u16) -> Snapshot {
        let size = GridSize::new(2).unwrap();
        Snapshot::new(vec![Piece::new(PieceId::Tile(0), Slot::new(tag), size)])
    }

    fn tag(snapshot: &Snapshot) -> u16 {
        snapshot.pieces()[0].slot().index()
    }

    #[test]
    fn push_pop_is_last_in_first_out() {
        let mut history = UndoHistory::new();
        history.push(snapshot(1));
        history.push(snapshot(2));
        history.push(snapshot(3));

        assert_eq!(history.len(), 3);
        assert_eq!(history.pop().as_ref().map(tag), Some(3));
        assert_eq!(history.pop().as_ref().map(tag), Some(2));
        assert_eq!(history.pop().as_ref().map(tag), Some(1));
        assert_eq!(history.pop(), None);
        assert!(history.is_empty());
    }

    #[test]
    fn capacity_drops_oldest() {
        let mut history = UndoHistory::with_capacity(NonZero::new(2).unwrap());
        history.push(snapshot(1));
        history.push(snapshot(2));
        history.push(snapshot(3));

        assert_eq!(history.iter().map(tag).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(history.pop().as_ref().map(tag), Some(3));
        assert_eq!(history.pop().as_ref().map(tag), Some(2));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn unbounded_keeps_everything() {
        let mut history = UndoHistory::new();
        for i in 0..1_000 {
            history.push(snapshot(i));
        }
        assert_eq!(history.len(), 1_000);
        assert_eq!(history.capacity(), None);
    }

    #[test]
    fn from_snapshots_trims_to_capacity() {
        let snapshots = (1..=5).map(snapshot).collect();
        let history = UndoHistory::from_snapshots(snapshots, NonZero::new(3));
        assert_eq!(history.iter().map(tag).collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn set_capacity_evicts_oldest() {
        let mut history = UndoHistory::new();
        for i in 1..=4 {
            history.push(snapshot(i));
        }
        history.set_capacity(NonZero::new(1));
        assert_eq!(history.iter().map(tag).collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn clear_empties_history() {
        let mut history = UndoHistory::new();
        history.push(snapshot(1));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.pop(), None);
    }
}
