use crate::core::{Route, TermId};

use super::{
    config::GameConfig,
    game_session::{AnswerKind, Explanation, GameSession, PendingAnswer, Phase, SessionId},
    scoring::score_for_answer,
};

/// What a command did to the session.
///
/// Commands whose preconditions do not hold return [`Transition::Ignored`]
/// and leave the session untouched. Stale timer events and double clicks
/// end up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Transition {
    Ignored,
    Started,
    /// The countdown moved by one tick.
    Ticked { remaining_ticks: u32 },
    /// The player answered; the session is now in feedback.
    EnteredFeedback { is_correct: bool },
    /// The countdown reached zero; the session is now in feedback.
    TimedOut,
    /// The next stage is ready to be played.
    Advanced { stage: usize },
    Completed,
    GameOver,
    Reset,
}

impl Transition {
    /// Returns whether the transition put the session into feedback.
    ///
    /// Drivers use this to arm the delay that ends with `commit_feedback`.
    #[must_use]
    pub fn entered_feedback(&self) -> bool {
        matches!(self, Self::EnteredFeedback { .. } | Self::TimedOut)
    }

    /// Returns whether the transition ended the session.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::GameOver)
    }
}

/// The game state machine.
///
/// The engine owns one [`GameSession`] and changes it only through its five
/// commands. It performs no I/O and never schedules anything: a clock driver
/// calls [`tick`](Self::tick) at a fixed cadence, an input driver calls
/// [`answer`](Self::answer), and the driver that shows feedback calls
/// [`commit_feedback`](Self::commit_feedback) after its own delay.
///
/// Calls must be serialized by the caller; the engine holds no lock.
///
/// # Example
///
/// ```
/// use chronolink_engine::{Choice, GameEngine, Route, Step, TermId, TermRef};
///
/// let route = Route::new(vec![
///     Step::question(
///         0,
///         TermRef::new(1, "Yamatai"),
///         2,
///         [
///             Choice::new(2, "Himiko"),
///             Choice::new(3, "Prince Shotoku"),
///             Choice::new(4, "Taika Reform"),
///             Choice::new(5, "Heian-kyo"),
///         ],
///         "Queen Himiko",
///         "Himiko ruled Yamatai",
///     ),
///     Step::terminal(1, TermRef::new(2, "Himiko")),
/// ]);
///
/// let mut engine = GameEngine::new();
/// let total_stages = route.total_answerable_steps();
/// engine.start("game-1".into(), route, total_stages);
///
/// for _ in 0..50 {
///     engine.tick();
/// }
/// engine.answer(TermId(2));
/// engine.commit_feedback();
///
/// let session = engine.session();
/// assert!(session.is_completed());
/// assert_eq!(session.score(), 150);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    config: GameConfig,
    session: GameSession,
}

impl GameEngine {
    /// Creates an idle engine with the default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::DEFAULT)
    }

    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            config,
            session: GameSession::idle(&config),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Starts a session over `route`.
    ///
    /// `total_stages` is the number of answerable steps, normally
    /// `route.total_answerable_steps()`; the engine takes it as given. Any
    /// session in progress is discarded.
    pub fn start(&mut self, session_id: SessionId, route: Route, total_stages: usize) -> Transition {
        self.session = GameSession {
            session_id: Some(session_id),
            route,
            lives: self.config.initial_lives,
            score: 0,
            current_stage: 0,
            total_stages,
            remaining_ticks: self.config.max_ticks,
            phase: Phase::Playing,
            explanation: None,
            mistaken_stage_indices: Vec::new(),
        };
        Transition::Started
    }

    /// Answers the current step with `selected_term_id`.
    ///
    /// Enters feedback and reveals the explanation of the step whether the
    /// answer is right or wrong. Lives and score change on commit.
    pub fn answer(&mut self, selected_term_id: TermId) -> Transition {
        if !self.session.phase.is_playing() {
            return Transition::Ignored;
        }
        let Some(step) = self.session.current_step() else {
            return Transition::Ignored;
        };

        let is_correct = step.is_correct(selected_term_id);
        let explanation = Explanation::of(step);
        self.session.explanation = Some(explanation);
        self.session.phase = Phase::Feedback(PendingAnswer {
            selected_term_id: Some(selected_term_id),
            is_correct,
            kind: AnswerKind::Selected,
        });
        Transition::EnteredFeedback { is_correct }
    }

    /// Applies the pending answer and leaves feedback.
    ///
    /// 1. a correct answer adds [`score_for_answer`] of the frozen countdown
    /// 2. a wrong answer or timeout costs a life and records the stage
    /// 3. no lives left ends the game and hides the explanation
    /// 4. any answer on the last stage completes the route, so a wrong final
    ///    answer with lives left never moves onto the terminal step
    /// 5. otherwise the next stage starts with a full countdown
    pub fn commit_feedback(&mut self) -> Transition {
        let Phase::Feedback(pending) = self.session.phase else {
            return Transition::Ignored;
        };
        let session = &mut self.session;

        if pending.is_correct {
            session.score += score_for_answer(session.remaining_ticks);
        } else {
            session.lives = session.lives.saturating_sub(1);
            if !session.mistaken_stage_indices.contains(&session.current_stage) {
                session.mistaken_stage_indices.push(session.current_stage);
            }
        }

        if session.lives == 0 {
            session.phase = Phase::GameOver;
            session.explanation = None;
            return Transition::GameOver;
        }

        if session.current_stage + 1 >= session.total_stages {
            // Pinned so that "stage + 1 of total" reads as the final stage.
            session.current_stage = session.total_stages.saturating_sub(1);
            session.phase = Phase::Completed;
            return Transition::Completed;
        }

        session.current_stage += 1;
        session.remaining_ticks = self.config.max_ticks;
        session.phase = Phase::Playing;
        Transition::Advanced {
            stage: session.current_stage,
        }
    }

    /// Advances the countdown by one tick.
    ///
    /// Frozen outside `Playing`, which is how feedback pauses the clock
    /// without the clock driver knowing about it. Reaching zero synthesizes a
    /// timed-out answer: the correct choice is marked as selected, the answer
    /// counts as wrong, and the explanation stays hidden.
    pub fn tick(&mut self) -> Transition {
        if !self.session.phase.is_playing() {
            return Transition::Ignored;
        }

        let session = &mut self.session;
        session.remaining_ticks = session.remaining_ticks.saturating_sub(1);
        if session.remaining_ticks > 0 {
            return Transition::Ticked {
                remaining_ticks: session.remaining_ticks,
            };
        }

        let selected_term_id = session.current_step().and_then(|step| step.correct_next_id);
        session.explanation = None;
        session.phase = Phase::Feedback(PendingAnswer {
            selected_term_id,
            is_correct: false,
            kind: AnswerKind::TimedOut,
        });
        Transition::TimedOut
    }

    /// Returns to the idle baseline. Safe to call at any time.
    pub fn reset(&mut self) -> Transition {
        self.session = GameSession::idle(&self.config);
        Transition::Reset
    }
}
