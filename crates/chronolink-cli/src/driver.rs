use std::time::Duration;

use chronolink_engine::{
    Difficulty, GameConfig, GameEngine, GameSession, PlayerName, Route, Transition,
};
use tracing::{debug, info};

use crate::schema::{record::ResultRecord, route_file::RouteFile};

/// Clock and input driver for one engine.
///
/// The terminal loop forwards every clock tick and every choice key here.
/// While the engine is in feedback the driver counts its own delay in clock
/// ticks and calls `commit_feedback` once the delay is over; the engine
/// ignores the ticks it receives meanwhile.
#[derive(Debug)]
pub struct SessionDriver {
    engine: GameEngine,
    route_file: RouteFile,
    player_name: PlayerName,
    difficulty: Difficulty,
    feedback_delay_ticks: u32,
    feedback_left: Option<u32>,
    attempts: usize,
}

impl SessionDriver {
    pub fn new(
        route_file: RouteFile,
        player_name: PlayerName,
        difficulty: Option<Difficulty>,
        feedback_delay: Duration,
    ) -> Self {
        let difficulty = difficulty.unwrap_or(route_file.difficulty);
        Self {
            engine: GameEngine::new(),
            route_file,
            player_name,
            difficulty,
            feedback_delay_ticks: delay_to_ticks(feedback_delay),
            feedback_left: None,
            attempts: 0,
        }
    }

    pub fn session(&self) -> &GameSession {
        self.engine.session()
    }

    /// Rules of the engine being driven.
    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn player_name(&self) -> &PlayerName {
        &self.player_name
    }

    /// Starts a new session over the loaded route, discarding the current one.
    pub fn start(&mut self) -> Transition {
        let route: Route = self.route_file.steps.clone();
        let total_stages = route.total_answerable_steps();
        let session_id = self.route_file.session_id(self.attempts);
        self.attempts += 1;
        self.feedback_left = None;

        info!(%session_id, total_stages, difficulty = %self.difficulty, "session started");
        self.engine.start(session_id, route, total_stages)
    }

    /// Abandons the current session.
    pub fn reset(&mut self) -> Transition {
        self.feedback_left = None;
        self.engine.reset()
    }

    /// Handles one clock tick.
    pub fn on_clock_tick(&mut self) -> Transition {
        if let Some(left) = self.feedback_left {
            if left > 1 {
                self.feedback_left = Some(left - 1);
                // Forwarded anyway; the engine keeps the clock frozen.
                return self.engine.tick();
            }
            self.feedback_left = None;
            let transition = self.engine.commit_feedback();
            self.log(transition);
            return transition;
        }

        let transition = self.engine.tick();
        self.after_command(transition)
    }

    /// Handles a choice key; `index` is the 0-based position on screen.
    pub fn on_choice(&mut self, index: usize) -> Transition {
        let Some(choice) = self
            .session()
            .current_step()
            .and_then(|step| step.choices.get(index))
        else {
            return Transition::Ignored;
        };
        let term_id = choice.term_id;
        let transition = self.engine.answer(term_id);
        self.after_command(transition)
    }

    /// Record of the finished session, `None` while still playing.
    pub fn result_record(&self) -> Option<ResultRecord> {
        ResultRecord::from_session(self.session(), self.player_name.clone(), self.difficulty)
    }

    fn after_command(&mut self, transition: Transition) -> Transition {
        if transition.entered_feedback() {
            self.feedback_left = Some(self.feedback_delay_ticks);
            if self.feedback_delay_ticks == 0 {
                let committed = self.engine.commit_feedback();
                self.feedback_left = None;
                self.log(transition);
                self.log(committed);
                return committed;
            }
        }
        self.log(transition);
        transition
    }

    fn log(&self, transition: Transition) {
        let session = self.session();
        match transition {
            Transition::Ignored | Transition::Ticked { .. } => {}
            Transition::Completed | Transition::GameOver => {
                info!(
                    ?transition,
                    score = session.score(),
                    lives = session.lives(),
                    mistakes = ?session.mistaken_stage_indices(),
                    "session finished"
                );
            }
            _ => debug!(
                ?transition,
                stage = session.current_stage(),
                score = session.score(),
                lives = session.lives(),
                remaining_ticks = session.remaining_ticks(),
                "transition"
            ),
        }
    }
}

fn delay_to_ticks(delay: Duration) -> u32 {
    let tick = GameConfig::tick_interval().as_millis();
    u32::try_from(delay.as_millis().div_ceil(tick)).unwrap_or(u32::MAX)
}
