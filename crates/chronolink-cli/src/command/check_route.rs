use std::path::PathBuf;

use tracing::info;

use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CheckRouteArg {
    /// Route file to check (JSON format); the bundled route when omitted
    route_path: Option<PathBuf>,
}

pub(crate) fn run(arg: &CheckRouteArg) -> anyhow::Result<()> {
    let CheckRouteArg { route_path } = arg;

    let route_file = util::load_route(route_path.as_deref())?;
    let steps = &route_file.steps;
    info!(
        game_id = ?route_file.game_id,
        difficulty = %route_file.difficulty,
        steps = steps.len(),
        "route is valid"
    );

    println!(
        "OK: {} steps, {} stages, difficulty {}",
        steps.len(),
        steps.total_answerable_steps(),
        route_file.difficulty
    );
    for step in steps.iter() {
        let next = step
            .correct_choice()
            .map_or("(end)", |choice| choice.label.as_str());
        println!("  {:>2}. {} → {next}", step.sequence_index + 1, step.subject.name);
    }
    Ok(())
}
