use std::str::FromStr;

use serde::{Deserialize, Serialize};
use slidetile_core::GridSize;

/// Difficulty tier, selecting the grid size.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    /// 3×3.
    #[default]
    #[display("easy")]
    Easy,
    /// 4×4.
    #[display("medium")]
    Medium,
    /// 5×5.
    #[display("hard")]
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the grid size for this tier.
    #[must_use]
    pub const fn grid_size(self) -> GridSize {
        match self {
            Self::Easy => GridSize::EASY,
            Self::Medium => GridSize::MEDIUM,
            Self::Hard => GridSize::HARD,
        }
    }

    /// Returns the tier using `size`, if any.
    #[must_use]
    pub fn from_grid_size(size: GridSize) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.grid_size() == size)
    }
}

/// Error returned when parsing an unknown difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty {name:?} (expected easy, medium or hard)")]
pub struct ParseDifficultyError {
    name: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDifficultyError { name: s.to_owned() })
    }
}

/// Board outline. Only square boards are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Shape {
    /// Plain square board.
    #[default]
    Square,
}
