use std::path::PathBuf;

use anyhow::{Context, ensure};
use chronolink_engine::{Difficulty, GameEngine, GameSession, Route, SessionId, final_score};
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use rand_pcg::Pcg32;
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    schema::route_file::RouteFile,
    util::{self, Output},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Route file to play (JSON format); the bundled route when omitted
    route_path: Option<PathBuf>,
    /// Number of sessions to play
    #[arg(long, default_value_t = 1000)]
    sessions: usize,
    /// Probability that the player picks the correct choice
    #[arg(long, default_value_t = 0.8)]
    accuracy: f64,
    /// Mean answer latency in ticks
    #[arg(long, default_value_t = 60.0)]
    latency_mean: f64,
    /// Standard deviation of the answer latency in ticks
    #[arg(long, default_value_t = 40.0)]
    latency_stddev: f64,
    /// Difficulty used for the life bonus; defaults to the route's difficulty
    #[arg(long)]
    difficulty: Option<Difficulty>,
    /// Random seed; a random one is drawn when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let SimulateArg {
        route_path,
        sessions,
        accuracy,
        latency_mean,
        latency_stddev,
        difficulty,
        seed,
        output,
    } = arg;

    let route_file = util::load_route(route_path.as_deref())?;
    let difficulty = difficulty.unwrap_or(route_file.difficulty);
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut player = SimulatedPlayer::new(seed, *accuracy, *latency_mean, *latency_stddev)?;

    info!(seed, sessions, accuracy, %difficulty, "simulation started");
    let summary = simulate(&route_file, &mut player, *sessions, difficulty, seed);
    info!(
        completed = summary.completed,
        game_over = summary.game_over,
        mean_base_score = summary.mean_base_score,
        "simulation finished"
    );

    Output::save_json(&summary, output.clone())?;
    Ok(())
}

/// Player answering with a fixed accuracy after a normally distributed delay.
#[derive(Debug, Clone)]
struct SimulatedPlayer {
    rng: Pcg32,
    accuracy: f64,
    latency: Normal<f64>,
}

impl SimulatedPlayer {
    fn new(seed: u64, accuracy: f64, latency_mean: f64, latency_stddev: f64) -> anyhow::Result<Self> {
        ensure!(
            (0.0..=1.0).contains(&accuracy),
            "accuracy must be between 0 and 1, got {accuracy}"
        );
        let latency = Normal::new(latency_mean, latency_stddev).with_context(|| {
            format!("Invalid latency distribution: mean {latency_mean}, stddev {latency_stddev}")
        })?;
        Ok(Self {
            rng: Pcg32::seed_from_u64(seed),
            accuracy,
            latency,
        })
    }

    /// Ticks the player needs before answering, clamped at zero.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn latency_ticks(&mut self) -> u32 {
        let ticks = self.latency.sample(&mut self.rng).round().max(0.0);
        ticks.min(f64::from(u32::MAX)) as u32
    }

    fn answers_correctly(&mut self) -> bool {
        self.rng.random_bool(self.accuracy)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct SimulationSummary {
    seed: u64,
    difficulty: Difficulty,
    sessions: usize,
    completed: usize,
    game_over: usize,
    mean_base_score: f64,
    min_base_score: u32,
    max_base_score: u32,
    mean_final_score: f64,
    /// Number of sessions that missed each stage, indexed by stage
    stage_mistakes: Vec<usize>,
}

fn simulate(
    route_file: &RouteFile,
    player: &mut SimulatedPlayer,
    sessions: usize,
    difficulty: Difficulty,
    seed: u64,
) -> SimulationSummary {
    let mut engine = GameEngine::new();
    let mut summary = SimulationSummary {
        seed,
        difficulty,
        sessions,
        completed: 0,
        game_over: 0,
        mean_base_score: 0.0,
        min_base_score: 0,
        max_base_score: 0,
        mean_final_score: 0.0,
        stage_mistakes: vec![0; route_file.steps.len()],
    };
    let mut base_total = 0u64;
    let mut final_total = 0u64;
    let mut min_base = None;

    for attempt in 0..sessions {
        let session_id = route_file.session_id(attempt);
        let session = play_session(&mut engine, session_id, &route_file.steps, player);
        let Some(submission) = session.result_submission() else {
            continue;
        };
        debug!(
            attempt,
            completed = session.is_completed(),
            base_score = submission.base_score,
            lives = submission.final_lives,
            "session finished"
        );

        if session.is_completed() {
            summary.completed += 1;
        } else {
            summary.game_over += 1;
        }
        for &stage in &submission.mistaken_stage_indices {
            if let Some(count) = summary.stage_mistakes.get_mut(stage) {
                *count += 1;
            }
        }

        let base = submission.base_score;
        base_total += u64::from(base);
        final_total += u64::from(final_score(base, submission.final_lives, difficulty));
        min_base = Some(min_base.map_or(base, |min: u32| min.min(base)));
        summary.max_base_score = summary.max_base_score.max(base);
    }

    summary.min_base_score = min_base.unwrap_or(0);
    if sessions > 0 {
        summary.mean_base_score = mean(base_total, sessions);
        summary.mean_final_score = mean(final_total, sessions);
    }
    summary
}

#[expect(clippy::cast_precision_loss)]
fn mean(total: u64, count: usize) -> f64 {
    total as f64 / count as f64
}

/// Plays one session to its end, committing every feedback immediately.
fn play_session(
    engine: &mut GameEngine,
    session_id: SessionId,
    route: &Route,
    player: &mut SimulatedPlayer,
) -> GameSession {
    engine.start(session_id, route.clone(), route.total_answerable_steps());

    while engine.session().is_playing() {
        let latency = player.latency_ticks();
        let correct = player.answers_correctly();
        let choice = engine.session().current_step().and_then(|step| {
            step.choices
                .iter()
                .find(|choice| step.is_correct(choice.term_id) == correct)
                .map(|choice| choice.term_id)
        });

        let remaining = engine.session().remaining_ticks();
        match choice {
            Some(term_id) if latency < remaining => {
                for _ in 0..latency {
                    engine.tick();
                }
                engine.answer(term_id);
            }
            _ => {
                for _ in 0..remaining {
                    engine.tick();
                }
            }
        }
        engine.commit_feedback();
    }
    engine.session().clone()
}
