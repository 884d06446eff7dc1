use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging;

use self::{check_route::CheckRouteArg, play::PlayArg, simulate::SimulateArg};

mod check_route;
mod play;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Write log events to this file (filtered by `RUST_LOG`, default `info`)
    #[clap(long, global = true)]
    log_file: Option<PathBuf>,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play a route in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Play a route many times with a simulated player and summarize the results
    Simulate(#[clap(flatten)] SimulateArg),
    /// Validate a route file
    CheckRoute(#[clap(flatten)] CheckRouteArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let mode = args.mode.unwrap_or(Mode::Play(PlayArg::default()));

    // The play screen owns the terminal; it only logs to a file.
    let stderr_enabled = !matches!(mode, Mode::Play(_));
    logging::init(args.log_file.as_deref(), stderr_enabled)?;

    match mode {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Simulate(arg) => simulate::run(&arg)?,
        Mode::CheckRoute(arg) => check_route::run(&arg)?,
    }
    Ok(())
}
