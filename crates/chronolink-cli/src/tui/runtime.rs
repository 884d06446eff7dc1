use std::{io, time::Duration};

use super::{
    App,
    event_loop::{EventLoop, LoopEvent},
};

/// Runs an [`App`] in the terminal until it asks to exit.
#[derive(Debug, Default)]
pub struct Runtime {
    events: EventLoop,
}

impl Runtime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.events.set_tick_interval(interval);
    }

    /// Sets the minimum time between two renders.
    pub fn set_render_interval(&mut self, interval: Duration) {
        self.events.set_render_interval(interval);
    }

    /// Runs the application.
    ///
    /// - tick: `app.update()`
    /// - render: `app.draw()`
    /// - terminal event: `app.handle_event()`
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    LoopEvent::Tick => app.update(&mut self),
                    LoopEvent::Render => {
                        terminal.draw(|frame| app.draw(frame))?;
                    }
                    LoopEvent::Terminal(event) => app.handle_event(&mut self, &event),
                }
            }
            Ok(())
        })
    }
}
