mod command;
mod driver;
mod logging;
mod schema;
mod tui;
mod ui;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
