//! Persistence of settings and the in-progress game.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};
use slidetile_game::SavedGame;

use crate::settings::Settings;

const SETTINGS_FILE: &str = "settings.json";
const GAME_FILE: &str = "game.json";

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum StoreError {
    #[display("failed to access {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[display("malformed data in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Storage for settings and at most one saved game.
///
/// Missing entries load as `None`.
pub trait Store {
    fn load_settings(&self) -> Result<Option<Settings>, StoreError>;
    fn save_settings(&mut self, settings: &Settings) -> Result<(), StoreError>;
    fn load_game(&self) -> Result<Option<SavedGame>, StoreError>;
    fn save_game(&mut self, game: &SavedGame) -> Result<(), StoreError>;
    fn clear_game(&mut self) -> Result<(), StoreError>;
}

/// A [`Store`] keeping one JSON file per entry in a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T>(&self, file: &str) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        let path = self.dir.join(file);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Json { path, source })
    }

    fn write<T>(&self, file: &str, value: &T) -> Result<(), StoreError>
    where
        T: Serialize,
    {
        let path = self.dir.join(file);
        let raw = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
        fs::create_dir_all(&self.dir)
            .and_then(|()| fs::write(&path, raw))
            .map_err(|source| StoreError::Io { path, source })
    }
}

impl Store for JsonFileStore {
    fn load_settings(&self) -> Result<Option<Settings>, StoreError> {
        self.read(SETTINGS_FILE)
    }

    fn save_settings(&mut self, settings: &Settings) -> Result<(), StoreError> {
        self.write(SETTINGS_FILE, settings)
    }

    fn load_game(&self) -> Result<Option<SavedGame>, StoreError> {
        self.read(GAME_FILE)
    }

    fn save_game(&mut self, game: &SavedGame) -> Result<(), StoreError> {
        self.write(GAME_FILE, game)
    }

    fn clear_game(&mut self) -> Result<(), StoreError> {
        let path = self.dir.join(GAME_FILE);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }
}

/// A [`Store`] that keeps everything in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub settings: Option<Settings>,
    pub game: Option<SavedGame>,
    pub game_saves: usize,
}

impl Store for MemoryStore {
    fn load_settings(&self) -> Result<Option<Settings>, StoreError> {
        Ok(self.settings.clone())
    }

    fn save_settings(&mut self, settings: &Settings) -> Result<(), StoreError> {
        self.settings = Some(settings.clone());
        Ok(())
    }

    fn load_game(&self) -> Result<Option<SavedGame>, StoreError> {
        Ok(self.game.clone())
    }

    fn save_game(&mut self, game: &SavedGame) -> Result<(), StoreError> {
        self.game = Some(game.clone());
        self.game_saves += 1;
        Ok(())
    }

    fn clear_game(&mut self) -> Result<(), StoreError> {
        self.game = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{
        process,
        sync::atomic::{AtomicUsize, Ordering},
    };

    use slidetile_core::{Arrangement, PieceId};
    use slidetile_game::{Difficulty, Game, Timestamp};

    use super::*;

    fn scratch_dir() -> PathBuf {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!("slidetile-store-{}-{n}", process::id()))
    }

    #[test]
    fn test_json_store_round_trip() {
        let dir = scratch_dir();
        let mut store = JsonFileStore::new(&dir);
        assert!(store.load_settings().unwrap().is_none());
        assert!(store.load_game().unwrap().is_none());

        let settings = Settings {
            user_name: "Ada".to_owned(),
            default_difficulty: Difficulty::Hard,
            ..Settings::default()
        };
        store.save_settings(&settings).unwrap();
        assert_eq!(store.load_settings().unwrap(), Some(settings));

        let arrangement: Arrangement = "1 -1 2 3 4 5 6 7 0".parse().unwrap();
        let mut game = Game::from_arrangement(&arrangement, "img", Timestamp::from_millis(1));
        assert!(game.apply_move(PieceId::Tile(4)).unwrap().is_moved());
        assert_eq!(game.move_count(), 1);
        store.save_game(&game.to_saved()).unwrap();
        let loaded = store.load_game().unwrap().unwrap();
        assert_eq!(Game::from_saved(loaded).unwrap(), game);

        store.clear_game().unwrap();
        assert!(store.load_game().unwrap().is_none());
        store.clear_game().unwrap();

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = scratch_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(SETTINGS_FILE), "{not json").unwrap();
        let store = JsonFileStore::new(&dir);
        assert!(matches!(
            store.load_settings(),
            Err(StoreError::Json { .. })
        ));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::default();
        store.save_settings(&Settings::default()).unwrap();
        assert_eq!(store.load_settings().unwrap(), Some(Settings::default()));
        assert!(store.load_game().unwrap().is_none());
    }
}
