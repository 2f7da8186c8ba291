use std::{num::NonZero, time::Duration};

use slidetile_core::{Arrangement, GridSize, PieceId, Slot};
use slidetile_generator::{GeneratedShuffle, ShuffleGenerator, ShuffleSeed};

use crate::{
    Difficulty, GameError, Piece, Shape, Snapshot, Timestamp, UndoHistory, create_pieces,
};

/// Whether a game still accepts moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum GameStatus {
    /// Moves and undo are accepted.
    InProgress,
    /// Every tile is home. Terminal until the game is reset.
    Solved,
}

/// Result of [`Game::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveOutcome {
    /// The tile slid into the blank.
    Moved {
        /// `true` if this move solved the puzzle.
        solved: bool,
    },
    /// Nothing changed.
    Ignored(IgnoredMove),
}

/// Why a move request had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoredMove {
    /// The puzzle is already solved.
    #[display("the puzzle is already solved")]
    AlreadySolved,
    /// The blank itself cannot be moved.
    #[display("the blank cannot be moved")]
    BlankPiece,
    /// The tile is not next to the blank.
    #[display("that tile is not next to the blank")]
    NotAdjacent,
}

/// Result of [`Game::undo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum UndoOutcome {
    /// The last move was reverted.
    Undone,
    /// Nothing changed.
    Ignored(IgnoredUndo),
}

/// Why an undo request had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoredUndo {
    /// Undo is not available once the puzzle is solved.
    #[display("the puzzle is already solved")]
    AlreadySolved,
    /// There is no move to revert.
    #[display("there is nothing to undo")]
    NothingToUndo,
}

/// A sliding-tile puzzle session.
///
/// Holds the pieces, move count, timing and undo history of one game. Pieces are
/// kept in identity order (tiles by goal, blank last), so a piece is found by its
/// id rather than by where it sits.
///
/// # Example
///
/// ```
/// use slidetile_game::{Difficulty, Game};
///
/// let mut game = Game::new(Difficulty::Easy.grid_size(), "photo.jpg");
/// assert_eq!(game.move_count(), 0);
/// assert!(game.arrangement().is_solvable());
///
/// // Any tile next to the blank can slide.
/// let first = game.movable_pieces().next();
/// if let Some(id) = first {
///     assert!(game.apply_move(id).unwrap().is_moved());
///     assert_eq!(game.move_count(), 1);
///     assert!(game.undo().is_undone());
///     assert_eq!(game.move_count(), 0);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    size: GridSize,
    pieces: Vec<Piece>,
    move_count: u32,
    started_at: Timestamp,
    solved_at: Option<Timestamp>,
    status: GameStatus,
    image: String,
    shape: Shape,
    history: UndoHistory,
}

impl Game {
    /// Starts a new game on a freshly shuffled board of `size`.
    #[must_use]
    pub fn new(size: GridSize, image: impl Into<String>) -> Self {
        let shuffle = ShuffleGenerator::new().generate(size);
        Self::from_shuffle(&shuffle, image, Timestamp::now())
    }

    /// Starts a new game for a difficulty tier.
    #[must_use]
    pub fn with_difficulty(difficulty: Difficulty, image: impl Into<String>) -> Self {
        Self::new(difficulty.grid_size(), image)
    }

    /// Starts a game from a generated shuffle.
    ///
    /// The game starts in progress even if the shuffle happens to be solved; it
    /// is only checked for completion after a move.
    #[must_use]
    pub fn from_shuffle(
        shuffle: &GeneratedShuffle,
        image: impl Into<String>,
        started_at: Timestamp,
    ) -> Self {
        Self::in_progress(&shuffle.arrangement, image.into(), started_at)
    }

    /// Starts a game from any arrangement.
    ///
    /// The arrangement is not checked for solvability. An arrangement with every
    /// tile home starts out solved, with zero moves.
    #[must_use]
    pub fn from_arrangement(
        arrangement: &Arrangement,
        image: impl Into<String>,
        started_at: Timestamp,
    ) -> Self {
        let mut game = Self::in_progress(arrangement, image.into(), started_at);
        if arrangement.is_solved() {
            game.status = GameStatus::Solved;
            game.solved_at = Some(started_at);
        }
        game
    }

    fn in_progress(arrangement: &Arrangement, image: String, started_at: Timestamp) -> Self {
        Self {
            size: arrangement.size(),
            pieces: create_pieces(arrangement),
            move_count: 0,
            started_at,
            solved_at: None,
            status: GameStatus::InProgress,
            image,
            shape: Shape::Square,
            history: UndoHistory::new(),
        }
    }

    pub(crate) fn from_parts(parts: GameParts) -> Self {
        let GameParts {
            size,
            pieces,
            move_count,
            started_at,
            solved_at,
            solved,
            image,
            shape,
            history,
        } = parts;
        Self {
            size,
            pieces,
            move_count,
            started_at,
            solved_at,
            status: if solved {
                GameStatus::Solved
            } else {
                GameStatus::InProgress
            },
            image,
            shape,
            history,
        }
    }

    /// Returns the grid size.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the difficulty tier matching the grid size, if any.
    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        Difficulty::from_grid_size(self.size)
    }

    /// Returns all pieces in identity order: tiles by goal, then the blank.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Returns the piece with `id`, or `None` if the id is off the grid.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        if !id.fits(self.size) {
            return None;
        }
        self.pieces.get(id.ordinal(self.size))
    }

    /// Returns the blank piece.
    #[must_use]
    pub fn blank(&self) -> &Piece {
        &self.pieces[PieceId::Blank.ordinal(self.size)]
    }

    /// Returns the piece in `slot`, or `None` if the slot is off the grid.
    #[must_use]
    pub fn piece_at(&self, slot: Slot) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.slot() == slot)
    }

    /// Returns the current slot-to-piece arrangement.
    #[must_use]
    pub fn arrangement(&self) -> Arrangement {
        let mut ids = vec![PieceId::Blank; usize::from(self.size.slot_count())];
        for piece in &self.pieces {
            ids[piece.slot().as_usize()] = piece.id();
        }
        Arrangement::new(ids, self.size)
            .unwrap_or_else(|err| unreachable!("pieces always form a permutation: {err}"))
    }

    /// Iterates over the tiles that can slide into the blank.
    ///
    /// Yields nothing once the puzzle is solved.
    pub fn movable_pieces(&self) -> impl Iterator<Item = PieceId> + '_ {
        let blank = self.blank().slot();
        let active = self.status.is_in_progress();
        blank
            .neighbors(self.size)
            .filter(move |_| active)
            .filter_map(move |slot| self.piece_at(slot).map(Piece::id))
    }

    /// Returns the number of moves made, net of undos.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Returns the game status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns `true` once every tile is home.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.status.is_solved()
    }

    /// Returns when the game (or the last reset) started.
    #[must_use]
    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    /// Returns when the game was solved.
    #[must_use]
    pub fn solved_at(&self) -> Option<Timestamp> {
        self.solved_at
    }

    /// Returns the play time: up to the solve if solved, otherwise up to `now`.
    #[must_use]
    pub fn elapsed(&self, now: Timestamp) -> Duration {
        self.solved_at
            .unwrap_or(now)
            .saturating_duration_since(self.started_at)
    }

    /// Returns the opaque image reference the tiles are cut from.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Returns the board outline.
    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Returns the undo history.
    #[must_use]
    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// Returns `true` if [`undo`](Self::undo) would revert a move.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.status.is_in_progress() && !self.history.is_empty()
    }

    /// Bounds the undo history, evicting the oldest snapshots beyond `capacity`.
    /// `None` makes it unbounded.
    pub fn set_history_capacity(&mut self, capacity: Option<NonZero<usize>>) {
        self.history.set_capacity(capacity);
    }

    /// Slides the tile `id` into the blank, stamping a solve with the current time.
    ///
    /// See [`apply_move_at`](Self::apply_move_at).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownPiece`] if `id` is off the grid.
    pub fn apply_move(&mut self, id: PieceId) -> Result<MoveOutcome, GameError> {
        self.apply_move_at(id, Timestamp::now())
    }

    /// Slides the tile `id` into the blank.
    ///
    /// The move is ignored, leaving the game untouched, if the puzzle is solved,
    /// `id` is the blank, or the tile is not next to the blank. Otherwise the
    /// current pieces are pushed onto the history, the tile and blank swap slots,
    /// the move count goes up by one, and if every tile is now home the game
    /// becomes solved at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownPiece`] if `id` is off the grid.
    pub fn apply_move_at(&mut self, id: PieceId, now: Timestamp) -> Result<MoveOutcome, GameError> {
        if !id.fits(self.size) {
            return Err(GameError::UnknownPiece {
                id,
                size: self.size,
            });
        }
        if self.status.is_solved() {
            return Ok(MoveOutcome::Ignored(IgnoredMove::AlreadySolved));
        }
        if id.is_blank() {
            return Ok(MoveOutcome::Ignored(IgnoredMove::BlankPiece));
        }

        let tile_index = id.ordinal(self.size);
        let blank_index = PieceId::Blank.ordinal(self.size);
        let tile_slot = self.pieces[tile_index].slot();
        let blank_slot = self.pieces[blank_index].slot();
        if !tile_slot.is_adjacent(blank_slot, self.size) {
            return Ok(MoveOutcome::Ignored(IgnoredMove::NotAdjacent));
        }

        self.history.push(Snapshot::new(self.pieces.clone()));
        self.pieces[tile_index].set_slot(blank_slot);
        self.pieces[blank_index].set_slot(tile_slot);
        self.move_count += 1;
        log::debug!("moved {id} from {tile_slot} to {blank_slot} (move {})", self.move_count);

        let solved = self.pieces.iter().all(|p| p.is_blank() || p.is_home());
        if solved {
            self.solved_at = Some(now);
            self.status = GameStatus::Solved;
            log::debug!(
                "solved in {} moves after {:?}",
                self.move_count,
                self.elapsed(now)
            );
        }
        Ok(MoveOutcome::Moved { solved })
    }

    /// Reverts the most recent move.
    ///
    /// Ignored if the puzzle is solved or the history is empty. Timing is not
    /// affected.
    pub fn undo(&mut self) -> UndoOutcome {
        if self.status.is_solved() {
            return UndoOutcome::Ignored(IgnoredUndo::AlreadySolved);
        }
        let Some(snapshot) = self.history.pop() else {
            return UndoOutcome::Ignored(IgnoredUndo::NothingToUndo);
        };
        self.pieces = snapshot.into_pieces();
        self.move_count = self.move_count.saturating_sub(1);
        log::debug!("undid a move, {} remaining in history", self.history.len());
        UndoOutcome::Undone
    }

    /// Discards the board and history and starts over on a fresh shuffle of the
    /// same size.
    pub fn reset(&mut self) {
        let shuffle = ShuffleGenerator::new().generate(self.size);
        self.reset_to(&shuffle.arrangement, Timestamp::now());
    }

    /// Like [`reset`](Self::reset), with the shuffle determined by `seed`.
    pub fn reset_with_seed(&mut self, seed: ShuffleSeed) {
        let shuffle = ShuffleGenerator::new().generate_with_seed(self.size, seed);
        self.reset_to(&shuffle.arrangement, Timestamp::now());
    }

    /// Discards the board and history and starts over on `arrangement` at `now`.
    ///
    /// The game is always back in progress afterwards, even on a solved
    /// arrangement. The image, shape and history capacity are kept.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GridSizeMismatch`] if `arrangement` is for a
    /// different grid size.
    pub fn reset_with(&mut self, arrangement: &Arrangement, now: Timestamp) -> Result<(), GameError> {
        if arrangement.size() != self.size {
            return Err(GameError::GridSizeMismatch {
                expected: self.size,
                actual: arrangement.size(),
            });
        }
        self.reset_to(arrangement, now);
        Ok(())
    }

    fn reset_to(&mut self, arrangement: &Arrangement, now: Timestamp) {
        self.pieces = create_pieces(arrangement);
        self.history.clear();
        self.move_count = 0;
        self.started_at = now;
        self.solved_at = None;
        self.status = GameStatus::InProgress;
        log::debug!("started {} board {arrangement}", self.size);
    }
}

/// Raw fields for rebuilding a validated game.
pub(crate) struct GameParts {
    pub(crate) size: GridSize,
    pub(crate) pieces: Vec<Piece>,
    pub(crate) move_count: u32,
    pub(crate) started_at: Timestamp,
    pub(crate) solved_at: Option<Timestamp>,
    pub(crate) solved: bool,
    pub(crate) image: String,
    pub(crate) shape: Shape,
    pub(crate) history: UndoHistory,
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const T0: Timestamp = Timestamp::from_millis(1_000);

    fn game(arrangement: &str) -> Game {
        let arrangement: Arrangement = arrangement.parse().expect("valid arrangement");
        Game::from_arrangement(&arrangement, "image.png", T0)
    }

    #[test]
    fn test_scenario_from_blank_at_slot_one() {
        let mut game = game("1 -1 2 3 4 5 6 7 0");
        let before = game.clone();

        let outcome = game.apply_move(PieceId::Tile(0)).unwrap();
        assert_eq!(outcome, MoveOutcome::Ignored(IgnoredMove::NotAdjacent));
        assert_eq!(game, before);

        // Slot 3 is diagonal to slot 1.
        let outcome = game.apply_move(PieceId::Tile(3)).unwrap();
        assert_eq!(outcome, MoveOutcome::Ignored(IgnoredMove::NotAdjacent));
        assert_eq!(game, before);

        let outcome = game.apply_move(PieceId::Tile(4)).unwrap();
        assert_eq!(outcome, MoveOutcome::Moved { solved: false });
        assert_eq!(game.arrangement().to_string(), "1 4 2 3 -1 5 6 7 0");
        assert_eq!(game.move_count(), 1);
        assert!(!game.is_solved());
        assert_eq!(game.piece(PieceId::Tile(4)).unwrap().slot(), Slot::new(1));
        assert_eq!(game.blank().slot(), Slot::new(4));
    }

    #[test]
    fn test_identity_starts_solved() {
        let game = game("0 1 2 3 4 5 6 7 -1");
        assert!(game.is_solved());
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.solved_at(), Some(T0));
        assert_eq!(game.movable_pieces().count(), 0);
    }

    #[test]
    fn test_blank_move_is_ignored() {
        let mut game = game("1 -1 2 3 4 5 6 7 0");
        let before = game.clone();
        assert_eq!(
            game.apply_move(PieceId::Blank).unwrap(),
            MoveOutcome::Ignored(IgnoredMove::BlankPiece)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_unknown_piece_is_an_error() {
        let mut game = game("1 -1 2 3 4 5 6 7 0");
        assert_eq!(
            game.apply_move(PieceId::Tile(8)),
            Err(GameError::UnknownPiece {
                id: PieceId::Tile(8),
                size: GridSize::EASY
            })
        );
        assert!(game.piece(PieceId::Tile(8)).is_none());
    }

    #[test]
    fn test_solving_move_stamps_time_and_locks() {
        let mut game = game("0 1 2 3 4 5 6 -1 7");
        let solved_at = Timestamp::from_millis(61_000);
        let outcome = game.apply_move_at(PieceId::Tile(7), solved_at).unwrap();
        assert_eq!(outcome, MoveOutcome::Moved { solved: true });
        assert!(game.is_solved());
        assert_eq!(game.solved_at(), Some(solved_at));
        assert_eq!(game.elapsed(Timestamp::from_millis(999_999)), Duration::from_secs(60));

        let before = game.clone();
        assert_eq!(
            game.apply_move(PieceId::Tile(7)).unwrap(),
            MoveOutcome::Ignored(IgnoredMove::AlreadySolved)
        );
        assert_eq!(game.undo(), UndoOutcome::Ignored(IgnoredUndo::AlreadySolved));
        assert!(!game.can_undo());
        assert_eq!(game, before);
    }

    #[test]
    fn test_undo_with_empty_history() {
        let mut game = game("1 -1 2 3 4 5 6 7 0");
        assert_eq!(game.undo(), UndoOutcome::Ignored(IgnoredUndo::NothingToUndo));
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_undo_restores_previous_pieces_step_by_step() {
        let mut game = game("1 -1 2 3 4 5 6 7 0");
        let start = game.pieces().to_vec();
        assert!(game.apply_move(PieceId::Tile(4)).unwrap().is_moved());
        let after_one = game.pieces().to_vec();
        assert!(game.apply_move(PieceId::Tile(3)).unwrap().is_moved());
        assert_eq!(game.move_count(), 2);
        assert_eq!(game.history().len(), 2);

        assert!(game.undo().is_undone());
        assert_eq!(game.pieces(), after_one.as_slice());
        assert_eq!(game.move_count(), 1);
        assert!(game.undo().is_undone());
        assert_eq!(game.pieces(), start.as_slice());
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.started_at(), T0);
    }

    #[test]
    fn test_movable_pieces() {
        let game = game("1 -1 2 3 4 5 6 7 0");
        let mut movable: Vec<_> = game.movable_pieces().collect();
        movable.sort();
        assert_eq!(
            movable,
            vec![PieceId::Tile(1), PieceId::Tile(2), PieceId::Tile(4)]
        );
    }

    #[test]
    fn test_reset_with_starts_over() {
        let mut game = game("1 -1 2 3 4 5 6 7 0");
        assert!(game.apply_move(PieceId::Tile(4)).unwrap().is_moved());
        let later = Timestamp::from_millis(5_000);
        let fresh: Arrangement = "3 1 2 0 4 5 6 7 -1".parse().unwrap();
        game.reset_with(&fresh, later).unwrap();

        assert_eq!(game.arrangement(), fresh);
        assert_eq!(game.move_count(), 0);
        assert!(game.history().is_empty());
        assert_eq!(game.started_at(), later);
        assert_eq!(game.solved_at(), None);
        assert!(game.status().is_in_progress());
        assert_eq!(game.image(), "image.png");
    }

    #[test]
    fn test_reset_leaves_solved_state() {
        let mut game = game("0 1 2 3 4 5 6 -1 7");
        game.apply_move(PieceId::Tile(7)).unwrap();
        assert!(game.is_solved());
        game.reset();
        assert_eq!(game.size(), GridSize::EASY);
        assert_eq!(game.move_count(), 0);
        assert!(game.arrangement().is_solvable());
        assert_eq!(game.blank().slot(), Slot::new(8));
    }

    #[test]
    fn test_reset_onto_solved_board_stays_in_progress() {
        let mut game = game("0 1 2 3 4 5 6 -1 7");
        game.apply_move(PieceId::Tile(7)).unwrap();
        assert!(game.is_solved());

        let later = Timestamp::from_millis(9_000);
        game.reset_with(&Arrangement::solved(GridSize::EASY), later)
            .unwrap();
        assert!(game.status().is_in_progress());
        assert_eq!(game.solved_at(), None);
        assert_eq!(game.movable_pieces().count(), 2);

        // The next move unsolves it; sliding back solves it again.
        assert_eq!(
            game.apply_move_at(PieceId::Tile(7), later).unwrap(),
            MoveOutcome::Moved { solved: false }
        );
        assert_eq!(
            game.apply_move_at(PieceId::Tile(7), later).unwrap(),
            MoveOutcome::Moved { solved: true }
        );
    }

    #[test]
    fn test_tiny_grid_resets_never_start_solved() {
        let mut game = game("0 1 -1 2");
        for _ in 0..100 {
            game.reset();
            assert!(game.status().is_in_progress());
            assert!(game.movable_pieces().count() > 0);
        }
    }

    #[test]
    fn test_solved_shuffle_starts_in_progress() {
        let size = GridSize::new(2).unwrap();
        let shuffle = GeneratedShuffle {
            arrangement: Arrangement::solved(size),
            seed: ShuffleSeed::from_bytes([0; 32]),
            attempts: NonZero::<u32>::MIN,
        };
        let game = Game::from_shuffle(&shuffle, "", T0);
        assert!(game.status().is_in_progress());
        assert_eq!(game.solved_at(), None);
    }

    #[test]
    fn test_reset_with_rejects_other_size() {
        let mut game = game("1 -1 2 3 4 5 6 7 0");
        let other = Arrangement::solved(GridSize::MEDIUM);
        assert!(matches!(
            game.reset_with(&other, T0),
            Err(GameError::GridSizeMismatch { .. })
        ));
    }

    #[test]
    fn test_reset_with_seed_is_reproducible() {
        let seed = ShuffleSeed::from_bytes([3; 32]);
        let mut a = Game::new(GridSize::HARD, "a");
        let mut b = Game::new(GridSize::HARD, "b");
        a.reset_with_seed(seed);
        b.reset_with_seed(seed);
        assert_eq!(a.arrangement(), b.arrangement());
    }

    #[test]
    fn test_bounded_history_still_undoes_recent_moves() {
        let mut game = game("1 -1 2 3 4 5 6 7 0");
        game.set_history_capacity(NonZero::new(1));
        assert!(game.apply_move(PieceId::Tile(4)).unwrap().is_moved());
        assert!(game.apply_move(PieceId::Tile(3)).unwrap().is_moved());
        assert_eq!(game.history().len(), 1);
        assert!(game.undo().is_undone());
        assert_eq!(game.undo(), UndoOutcome::Ignored(IgnoredUndo::NothingToUndo));
        assert_eq!(game.arrangement().to_string(), "1 4 2 3 -1 5 6 7 0");
    }

    #[test]
    fn test_difficulty() {
        assert_eq!(game("1 -1 2 3 4 5 6 7 0").difficulty(), Some(Difficulty::Easy));
        assert_eq!(game("0 1 -1 2").difficulty(), None);
    }

    proptest! {
        #[test]
        fn prop_move_then_undo_restores_state(
            bytes in any::<[u8; 32]>(),
            picks in prop::collection::vec(0usize..4, 1..40),
        ) {
            let seed = ShuffleSeed::from_bytes(bytes);
            let shuffle = ShuffleGenerator::new().generate_with_seed(GridSize::MEDIUM, seed);
            let mut game = Game::from_shuffle(&shuffle, "image.png", T0);
            for pick in picks {
                let movable: Vec<_> = game.movable_pieces().collect();
                if movable.is_empty() {
                    break;
                }
                let pieces = game.pieces().to_vec();
                let moves = game.move_count();
                let id = movable[pick % movable.len()];
                let outcome = game.apply_move_at(id, T0).unwrap();
                prop_assert!(outcome.is_moved());
                if game.is_solved() {
                    break;
                }
                prop_assert!(game.undo().is_undone());
                prop_assert_eq!(game.pieces(), pieces.as_slice());
                prop_assert_eq!(game.move_count(), moves);
                game.apply_move_at(id, T0).unwrap();
            }
        }

        #[test]
        fn prop_non_adjacent_moves_change_nothing(
            bytes in any::<[u8; 32]>(),
            goal in 0u16..24,
        ) {
            let seed = ShuffleSeed::from_bytes(bytes);
            let shuffle = ShuffleGenerator::new().generate_with_seed(GridSize::HARD, seed);
            let mut game = Game::from_shuffle(&shuffle, "image.png", T0);
            let id = PieceId::Tile(goal);
            let slot = game.piece(id).unwrap().slot();
            prop_assume!(!slot.is_adjacent(game.blank().slot(), game.size()));
            let before = game.clone();
            prop_assert_eq!(
                game.apply_move(id).unwrap(),
                MoveOutcome::Ignored(IgnoredMove::NotAdjacent)
            );
            prop_assert_eq!(game, before);
        }
    }
}
