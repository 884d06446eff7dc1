use serde::{Deserialize, Serialize};

/// Display name used when the player gives none.
pub const DEFAULT_PLAYER_NAME: &str = "GUEST";

/// Player display name attached to submitted results.
///
/// Surrounding whitespace is trimmed. An empty or blank name falls back to
/// [`DEFAULT_PLAYER_NAME`]. The name lives outside the game session, so
/// resetting the engine leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(from = "String", into = "String")]
pub struct PlayerName(String);

impl Default for PlayerName {
    fn default() -> Self {
        Self(DEFAULT_PLAYER_NAME.to_owned())
    }
}

impl PlayerName {
    #[must_use]
    pub fn new(name: &str) -> Self {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            Self::default()
        } else {
            Self(trimmed.to_owned())
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_PLAYER_NAME
    }
}

impl From<String> for PlayerName {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl From<&str> for PlayerName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}
