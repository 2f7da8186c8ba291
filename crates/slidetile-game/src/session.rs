use std::time::Duration;

use slidetile_core::{Arrangement, PieceId};

use crate::{Game, GameError, MoveOutcome, Timestamp, UndoOutcome};

/// Receives notifications from a [`Session`].
///
/// Both methods default to doing nothing.
pub trait GameObserver {
    /// Called after every change to the game: a move, an undo, or a reset.
    fn on_state_changed(&mut self, game: &Game) {
        let _ = game;
    }

    /// Called once when a move solves the puzzle, after
    /// [`on_state_changed`](Self::on_state_changed), with the play time.
    fn on_completed(&mut self, game: &Game, elapsed: Duration) {
        let _ = (game, elapsed);
    }
}

impl GameObserver for () {}

impl<O> GameObserver for &mut O
where
    O: GameObserver + ?Sized,
{
    fn on_state_changed(&mut self, game: &Game) {
        (**self).on_state_changed(game);
    }

    fn on_completed(&mut self, game: &Game, elapsed: Duration) {
        (**self).on_completed(game, elapsed);
    }
}

/// A [`Game`] paired with an observer.
///
/// Ignored requests do not notify the observer.
#[derive(Debug)]
pub struct Session<O> {
    game: Game,
    observer: O,
}

impl<O> Session<O>
where
    O: GameObserver,
{
    /// Wraps `game`.
    pub fn new(game: Game, observer: O) -> Self {
        Self { game, observer }
    }

    /// Returns the game.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Splits the session back into its game and observer.
    pub fn into_parts(self) -> (Game, O) {
        (self.game, self.observer)
    }

    /// See [`Game::apply_move`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownPiece`] if `id` is off the grid.
    pub fn apply_move(&mut self, id: PieceId) -> Result<MoveOutcome, GameError> {
        self.apply_move_at(id, Timestamp::now())
    }

    /// See [`Game::apply_move_at`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownPiece`] if `id` is off the grid.
    pub fn apply_move_at(&mut self, id: PieceId, now: Timestamp) -> Result<MoveOutcome, GameError> {
        let outcome = self.game.apply_move_at(id, now)?;
        if let MoveOutcome::Moved { solved } = outcome {
            self.observer.on_state_changed(&self.game);
            if solved {
                self.observer
                    .on_completed(&self.game, self.game.elapsed(now));
            }
        }
        Ok(outcome)
    }

    /// See [`Game::undo`].
    pub fn undo(&mut self) -> UndoOutcome {
        let outcome = self.game.undo();
        if outcome.is_undone() {
            self.observer.on_state_changed(&self.game);
        }
        outcome
    }

    /// See [`Game::reset`].
    pub fn reset(&mut self) {
        self.game.reset();
        self.observer.on_state_changed(&self.game);
    }

    /// See [`Game::reset_with`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GridSizeMismatch`] if `arrangement` is for a
    /// different grid size.
    pub fn reset_with(&mut self, arrangement: &Arrangement, now: Timestamp) -> Result<(), GameError> {
        self.game.reset_with(arrangement, now)?;
        self.observer.on_state_changed(&self.game);
        Ok(())
    }

    /// Replaces the game outright, for example when switching difficulty.
    pub fn replace_game(&mut self, game: Game) {
        self.game = game;
        self.observer.on_state_changed(&self.game);
    }
}

#[cfg(test)]
mod tests {
    use slidetile_core::GridSize;

    use super::*;

    #[derive(Debug, Default)]
    struct Recorder {
        changes: Vec<u32>,
        completions: Vec<Duration>,
    }

    impl GameObserver for Recorder {
        fn on_state_changed(&mut self, game: &Game) {
            self.changes.push(game.move_count());
        }

        fn on_completed(&mut self, game: &Game, elapsed: Duration) {
            assert!(game.is_solved());
            self.completions.push(elapsed);
        }
    }

    fn session(arrangement: &str) -> Session<Recorder> {
        let arrangement: Arrangement = arrangement.parse().unwrap();
        let game = Game::from_arrangement(&arrangement, "", Timestamp::from_millis(0));
        Session::new(game, Recorder::default())
    }

    #[test]
    fn test_hooks_fire_on_changes_only() {
        let mut session = session("1 -1 2 3 4 5 6 7 0");
        session.apply_move(PieceId::Tile(0)).unwrap();
        session.apply_move(PieceId::Blank).unwrap();
        session.undo();
        assert!(session.observer().changes.is_empty());

        session.apply_move(PieceId::Tile(3)).unwrap();
        assert!(session.observer().changes.is_empty());

        assert!(session.apply_move(PieceId::Tile(4)).unwrap().is_moved());
        assert!(session.undo().is_undone());
        assert_eq!(session.observer().changes, vec![1, 0]);
        assert!(session.observer().completions.is_empty());
    }

    #[test]
    fn test_completion_fires_once() {
        let mut session = session("0 1 2 3 4 5 6 -1 7");
        let outcome = session
            .apply_move_at(PieceId::Tile(7), Timestamp::from_millis(42_000))
            .unwrap();
        assert_eq!(outcome, MoveOutcome::Moved { solved: true });
        session.apply_move(PieceId::Tile(7)).unwrap();
        session.undo();

        let (game, recorder) = session.into_parts();
        assert!(game.is_solved());
        assert_eq!(recorder.changes, vec![1]);
        assert_eq!(recorder.completions, vec![Duration::from_secs(42)]);
    }

    #[test]
    fn test_reset_notifies() {
        let mut session = session("1 -1 2 3 4 5 6 7 0");
        session.reset();
        session
            .reset_with(&Arrangement::solved(GridSize::EASY), Timestamp::from_millis(1))
            .unwrap();
        assert!(!session.game().is_solved());
        assert!(session.observer().completions.is_empty());
        assert!(
            session
                .reset_with(&Arrangement::solved(GridSize::HARD), Timestamp::from_millis(1))
                .is_err()
        );
        assert_eq!(session.observer().changes, vec![0, 0]);
    }

    #[test]
    fn test_unit_observer() {
        let mut session = Session::new(
            Game::from_arrangement(
                &"1 -1 2 3 4 5 6 7 0".parse().unwrap(),
                "",
                Timestamp::from_millis(0),
            ),
            (),
        );
        assert!(session.apply_move(PieceId::Tile(1)).unwrap().is_moved());
        assert_eq!(session.game().move_count(), 1);
    }
}
