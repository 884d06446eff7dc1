use serde::{Deserialize, Serialize};

use crate::core::{Route, Step, TermId};

use super::{config::GameConfig, result::ResultSubmission};

/// Opaque identifier issued by the route provider for one game.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct SessionId(String);

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl SessionId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// How the pending answer came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum AnswerKind {
    /// The player picked a choice.
    Selected,
    /// The countdown reached zero.
    TimedOut,
}

/// Answer waiting to be committed at the end of the feedback phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAnswer {
    /// Choice to highlight as selected.
    ///
    /// On a timeout this is the correct successor, so the right answer is
    /// highlighted even though the answer counts as wrong.
    pub selected_term_id: Option<TermId>,
    pub is_correct: bool,
    pub kind: AnswerKind,
}

/// Relation text shown after the player answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub keyword: String,
    pub explanation: String,
}

impl Explanation {
    pub(super) fn of(step: &Step) -> Self {
        Self {
            keyword: step.keyword.clone(),
            explanation: step.explanation.clone(),
        }
    }
}

/// Lifecycle phase of a session.
///
/// ```text
/// Idle ──start──▶ Playing ⇄ Feedback ──▶ Completed | GameOver
/// ```
///
/// `Completed` and `GameOver` are absorbing. Only `reset` (back to `Idle`)
/// or a new `start` leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Phase {
    Idle,
    Playing,
    Feedback(PendingAnswer),
    Completed,
    GameOver,
}

/// State of one game, owned by a [`GameEngine`](super::GameEngine).
///
/// Consumers only get shared references to it; every change goes through
/// the engine's commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(super) session_id: Option<SessionId>,
    pub(super) route: Route,
    pub(super) lives: u32,
    pub(super) score: u32,
    pub(super) current_stage: usize,
    pub(super) total_stages: usize,
    pub(super) remaining_ticks: u32,
    pub(super) phase: Phase,
    pub(super) explanation: Option<Explanation>,
    pub(super) mistaken_stage_indices: Vec<usize>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::idle(&GameConfig::DEFAULT)
    }
}

impl GameSession {
    /// Baseline shape of an engine with no session.
    #[must_use]
    pub fn idle(config: &GameConfig) -> Self {
        Self {
            session_id: None,
            route: Route::empty(),
            lives: config.initial_lives,
            score: 0,
            current_stage: 0,
            total_stages: 0,
            remaining_ticks: 0,
            phase: Phase::Idle,
            explanation: None,
            mistaken_stage_indices: Vec::new(),
        }
    }

    #[must_use]
    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    #[must_use]
    pub fn route(&self) -> &Route {
        &self.route
    }

    #[must_use]
    pub fn lives(&self) -> u32 {
        self.lives
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Zero-based index of the step being played.
    #[must_use]
    pub fn current_stage(&self) -> usize {
        self.current_stage
    }

    /// Number of answerable steps, as given to `start`.
    #[must_use]
    pub fn total_stages(&self) -> usize {
        self.total_stages
    }

    #[must_use]
    pub fn remaining_ticks(&self) -> u32 {
        self.remaining_ticks
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// `true` while playing or in feedback.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        matches!(self.phase, Phase::Playing | Phase::Feedback(_))
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.phase.is_completed()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase.is_game_over()
    }

    /// `true` once the session reached `Completed` or `GameOver`.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.is_completed() || self.is_game_over()
    }

    #[must_use]
    pub fn is_feedback_phase(&self) -> bool {
        self.phase.is_feedback()
    }

    #[must_use]
    pub fn pending_answer(&self) -> Option<&PendingAnswer> {
        match &self.phase {
            Phase::Feedback(pending) => Some(pending),
            _ => None,
        }
    }

    #[must_use]
    pub fn selected_term_id(&self) -> Option<TermId> {
        self.pending_answer().and_then(|p| p.selected_term_id)
    }

    /// Correctness of the answer in feedback, `None` outside feedback.
    #[must_use]
    pub fn last_answer_correct(&self) -> Option<bool> {
        self.pending_answer().map(|p| p.is_correct)
    }

    /// Explanation to display, `None` when it should be hidden.
    #[must_use]
    pub fn explanation(&self) -> Option<&Explanation> {
        self.explanation.as_ref()
    }

    #[must_use]
    pub fn show_explanation(&self) -> bool {
        self.explanation.is_some()
    }

    #[must_use]
    pub fn mistaken_stage_indices(&self) -> &[usize] {
        &self.mistaken_stage_indices
    }

    #[must_use]
    pub fn current_step(&self) -> Option<&Step> {
        self.route.get(self.current_stage)
    }

    /// Payload for the ranking service, available once the session ended.
    #[must_use]
    pub fn result_submission(&self) -> Option<ResultSubmission> {
        let cleared_steps = match self.phase {
            Phase::Completed => self.total_stages,
            Phase::GameOver => self.current_stage,
            Phase::Idle | Phase::Playing | Phase::Feedback(_) => return None,
        };
        Some(ResultSubmission {
            base_score: self.score,
            final_lives: self.lives,
            cleared_steps,
            mistaken_stage_indices: self.mistaken_stage_indices.clone(),
        })
    }
}
