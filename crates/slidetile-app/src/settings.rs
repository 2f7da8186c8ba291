use std::{collections::BTreeMap, time::Duration};

use serde::{Deserialize, Serialize};
use slidetile_game::Difficulty;

/// Player preferences and records, persisted between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub user_name: String,
    pub theme: Theme,
    pub default_difficulty: Difficulty,
    pub best_times: BestTimes,
}

/// Colour theme. Only affects presentation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    #[display("ice-blue")]
    IceBlue,
    #[display("ice-green")]
    IceGreen,
    #[display("ice-pink")]
    IcePink,
    #[display("ice-purple")]
    IcePurple,
    #[display("classic")]
    Classic,
}

/// Named colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub background: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub button: &'static str,
}

impl Theme {
    pub const ALL: [Self; 5] = [
        Self::IceBlue,
        Self::IceGreen,
        Self::IcePink,
        Self::IcePurple,
        Self::Classic,
    ];

    #[must_use]
    pub const fn palette(self) -> ThemePalette {
        match self {
            Self::IceBlue => ThemePalette {
                background: "sky-50",
                accent: "sky-200",
                text: "sky-900",
                button: "sky-600",
            },
            Self::IceGreen => ThemePalette {
                background: "emerald-50",
                accent: "emerald-200",
                text: "emerald-900",
                button: "emerald-600",
            },
            Self::IcePink => ThemePalette {
                background: "rose-50",
                accent: "rose-200",
                text: "rose-900",
                button: "rose-600",
            },
            Self::IcePurple => ThemePalette {
                background: "violet-50",
                accent: "violet-200",
                text: "violet-900",
                button: "violet-600",
            },
            Self::Classic => ThemePalette {
                background: "gray-50",
                accent: "gray-200",
                text: "gray-900",
                button: "indigo-600",
            },
        }
    }
}

/// Fastest completion per difficulty, in milliseconds on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BestTimes(BTreeMap<Difficulty, u64>);

impl BestTimes {
    #[must_use]
    pub fn get(&self, difficulty: Difficulty) -> Option<Duration> {
        self.0.get(&difficulty).copied().map(Duration::from_millis)
    }

    /// Records a completion time, returning `true` if it beats the stored one.
    pub fn record(&mut self, difficulty: Difficulty, elapsed: Duration) -> bool {
        let millis = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        match self.0.get(&difficulty) {
            Some(&best) if best <= millis => false,
            _ => {
                self.0.insert(difficulty, millis);
                true
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Difficulty, Duration)> + '_ {
        self.0
            .iter()
            .map(|(&difficulty, &millis)| (difficulty, Duration::from_millis(millis)))
    }
}
