use crossterm::event::Event;
use ratatui::Frame;

use super::Runtime;

/// Application driven by [`Runtime::run`].
pub trait App {
    /// Called once before the loop starts. Configure the tick interval here.
    fn init(&mut self, runtime: &mut Runtime);

    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, resize, etc.).
    fn handle_event(&mut self, runtime: &mut Runtime, event: &Event);

    fn draw(&self, frame: &mut Frame);

    /// Called on each clock tick.
    fn update(&mut self, runtime: &mut Runtime);
}
