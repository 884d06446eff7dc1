use serde::{Deserialize, Serialize};

/// Payload handed to the ranking service once a session has ended.
///
/// Produced by [`GameSession::result_submission`](super::GameSession::result_submission).
/// The engine never sends it; the caller does, and can resend the same
/// payload if the submission fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSubmission {
    /// Sum of points earned by correct answers.
    pub base_score: u32,
    pub final_lives: u32,
    /// Stage index reached at game over, or the stage count on completion.
    pub cleared_steps: usize,
    /// Stages answered wrongly or timed out, in the order they happened.
    pub mistaken_stage_indices: Vec<usize>,
}
