use std::time::Duration;

use slidetile_game::{Difficulty, Game, GameObserver};

use crate::{settings::Settings, store::Store};

/// Details of the most recent completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub difficulty: Option<Difficulty>,
    pub elapsed: Duration,
    pub moves: u32,
    pub new_record: bool,
}

/// Keeps the store in sync with a running game.
///
/// Every state change saves the game. On completion the best time is recorded,
/// the settings are saved and the saved game is cleared. Store failures are
/// logged and otherwise ignored so play can continue.
#[derive(Debug)]
pub struct PersistingObserver<S> {
    store: S,
    settings: Settings,
    completion: Option<Completion>,
}

impl<S> PersistingObserver<S>
where
    S: Store,
{
    pub fn new(store: S, settings: Settings) -> Self {
        Self {
            store,
            settings,
            completion: None,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the last completion, clearing it.
    pub fn take_completion(&mut self) -> Option<Completion> {
        self.completion.take()
    }

    pub fn save_game(&mut self, game: &Game) {
        if let Err(err) = self.store.save_game(&game.to_saved()) {
            log::warn!("failed to save game: {err}");
        }
    }

    pub fn update_settings(&mut self, update: impl FnOnce(&mut Settings)) {
        update(&mut self.settings);
        self.save_settings();
    }

    fn save_settings(&mut self) {
        if let Err(err) = self.store.save_settings(&self.settings) {
            log::warn!("failed to save settings: {err}");
        }
    }

    pub fn into_parts(self) -> (S, Settings) {
        (self.store, self.settings)
    }
}

impl<S> GameObserver for PersistingObserver<S>
where
    S: Store,
{
    fn on_state_changed(&mut self, game: &Game) {
        self.save_game(game);
    }

    fn on_completed(&mut self, game: &Game, elapsed: Duration) {
        let difficulty = game.difficulty();
        let new_record = difficulty
            .is_some_and(|difficulty| self.settings.best_times.record(difficulty, elapsed));
        if new_record {
            log::info!("new best time {elapsed:?} for {}", game.size());
            self.save_settings();
        }
        if let Err(err) = self.store.clear_game() {
            log::warn!("failed to clear finished game: {err}");
        }
        self.completion = Some(Completion {
            difficulty,
            elapsed,
            moves: game.move_count(),
            new_record,
        });
    }
}
