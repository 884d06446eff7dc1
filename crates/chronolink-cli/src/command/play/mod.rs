use std::{path::PathBuf, time::Duration};

use chronolink_engine::{Difficulty, PlayerName};

use crate::{command::play::app::PlayApp, driver::SessionDriver, tui::Runtime, util};

mod app;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Route file to play (JSON format); the bundled route when omitted
    route_path: Option<PathBuf>,
    /// Difficulty used for the life bonus; defaults to the route's difficulty
    #[clap(long)]
    difficulty: Option<Difficulty>,
    /// Name shown on the result screen and stored in result records
    #[clap(long, default_value = "")]
    player_name: String,
    /// How long the answer feedback stays on screen, in milliseconds
    #[clap(long, default_value_t = 1500)]
    feedback_delay_ms: u64,
    /// Save a result record when a session ends
    #[clap(long)]
    save_result: bool,
    /// Directory to save result records
    #[clap(long, default_value = "./data/results/")]
    record_dir: PathBuf,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            route_path: None,
            difficulty: None,
            player_name: String::new(),
            feedback_delay_ms: 1500,
            save_result: false,
            record_dir: PathBuf::from("./data/results/"),
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        route_path,
        difficulty,
        player_name,
        feedback_delay_ms,
        save_result,
        record_dir,
    } = arg;

    let route_file = util::load_route(route_path.as_deref())?;
    let driver = SessionDriver::new(
        route_file,
        PlayerName::new(player_name),
        *difficulty,
        Duration::from_millis(*feedback_delay_ms),
    );
    let record_dir = save_result.then(|| record_dir.clone());

    let mut app = PlayApp::new(driver, record_dir);
    Runtime::new().run(&mut app)?;
    Ok(())
}
