use std::{
    fs::{self, File},
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::{DateTime, Utc};
use chronolink_engine::{
    Difficulty, GameSession, PlayerName, ResultSubmission, SessionId, final_score,
};
use serde::{Deserialize, Serialize};

/// Result of a finished session, written when `--save-result` is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Timestamp when the record was created (ISO 8601 format)
    pub recorded_at: DateTime<Utc>,
    pub session_id: SessionId,
    pub player_name: PlayerName,
    pub difficulty: Difficulty,
    /// `true` if the route was cleared, `false` on game over
    pub is_completed: bool,
    /// Base score plus the life bonus of the difficulty
    pub final_score: u32,
    /// Payload for the ranking service
    pub submission: ResultSubmission,
}

impl ResultRecord {
    /// Builds a record from a finished session; `None` while still playing.
    pub fn from_session(
        session: &GameSession,
        player_name: PlayerName,
        difficulty: Difficulty,
    ) -> Option<Self> {
        let submission = session.result_submission()?;
        let session_id = session.session_id()?.clone();
        Some(Self {
            recorded_at: Utc::now(),
            session_id,
            player_name,
            difficulty,
            is_completed: session.is_completed(),
            final_score: final_score(
                submission.base_score,
                submission.final_lives,
                difficulty,
            ),
            submission,
        })
    }

    pub fn save(&self, record_dir: &Path) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(record_dir)
            .with_context(|| format!("Failed to create directory {}", record_dir.display()))?;

        let outcome = if self.is_completed { "clear" } else { "over" };
        let filename = format!(
            "{outcome}_{}.json",
            self.recorded_at.format("%Y%m%d_%H%M%S%3f")
        );
        let filepath = record_dir.join(filename);

        let file = File::create(&filepath)
            .with_context(|| format!("Failed to create file: {}", filepath.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("Failed to write JSON to {}", filepath.display()))?;
        writeln!(writer)?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush {}", filepath.display()))?;

        Ok(filepath)
    }
}
