use anyhow::Context;
use chronolink_engine::{Difficulty, Route, SessionId};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Route bundled with the binary, used when no route file is given.
const BUNDLED_ROUTE: &str = include_str!("../../data/sample_route.json");

/// Game start payload as delivered by the route provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteFile {
    /// Identifier issued for this game, if any
    #[serde(default)]
    pub game_id: Option<String>,
    /// Difficulty the route was generated for
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Ordered steps, the last one terminal
    pub steps: Route,
}

impl RouteFile {
    pub fn bundled() -> anyhow::Result<Self> {
        serde_json::from_str(BUNDLED_ROUTE).context("Failed to parse bundled route")
    }

    /// Session id for the `attempt`-th play of this route (0-based).
    ///
    /// Local files usually carry no game id, so one is derived from the clock.
    pub fn session_id(&self, attempt: usize) -> SessionId {
        let base = self
            .game_id
            .clone()
            .unwrap_or_else(|| format!("local-{}", Utc::now().format("%Y%m%d_%H%M%S")));
        if attempt == 0 {
            SessionId::from(base)
        } else {
            SessionId::from(format!("{base}#{attempt}"))
        }
    }
}
