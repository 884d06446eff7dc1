use std::{fmt, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};

/// Countdown length of one step in ticks (20.0 seconds).
pub const MAX_TICKS: u32 = 200;

/// Lives at the start of a session.
pub const INITIAL_LIVES: u32 = 3;

/// Number of ticks per nominal second. One tick is 0.1 seconds.
pub const TICKS_PER_SECOND: u32 = 10;

/// Fixed game rules used by a [`GameEngine`](super::GameEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_ticks: u32,
    pub initial_lives: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl GameConfig {
    pub const DEFAULT: Self = Self {
        max_ticks: MAX_TICKS,
        initial_lives: INITIAL_LIVES,
    };

    /// Wall-clock interval a clock driver should wait between ticks.
    #[must_use]
    pub const fn tick_interval() -> Duration {
        Duration::from_millis(1000 / TICKS_PER_SECOND as u64)
    }

    /// Converts a tick count into nominal seconds.
    #[must_use]
    pub fn ticks_to_secs(ticks: u32) -> f64 {
        f64::from(ticks) / f64::from(TICKS_PER_SECOND)
    }
}

/// Difficulty selected for a route.
///
/// Difficulty does not change the rules of the engine. It only decides how
/// many bonus points each remaining life is worth on the result screen.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Normal, Self::Hard];

    /// Bonus points awarded per remaining life.
    #[must_use]
    pub const fn life_bonus(self) -> u32 {
        match self {
            Self::Easy => 100,
            Self::Normal => 200,
            Self::Hard => 300,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty '{input}', expected one of: easy, normal, hard")]
pub struct ParseDifficultyError {
    input: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDifficultyError {
                input: s.to_owned(),
            })
    }
}
