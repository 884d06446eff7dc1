use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event};

/// Events produced by [`EventLoop::next`].
#[derive(Debug, Clone)]
pub(super) enum LoopEvent {
    /// Clock tick, generated every `tick_interval`.
    Tick,
    /// The screen is dirty and the throttle interval has passed.
    Render,
    Terminal(Event),
}

/// Multiplexes the clock, rendering and terminal input.
///
/// Ticks are scheduled from the previous tick time rather than from the time
/// they were handled, so slow frames do not stretch the countdown.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Option<Duration>,
    render_interval: Duration,
    next_tick: Instant,
    last_render: Instant,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub(super) fn new() -> Self {
        let now = Instant::now();
        Self {
            tick_interval: None,
            render_interval: Duration::from_millis(16),
            next_tick: now,
            last_render: now.checked_sub(Duration::from_secs(1)).unwrap_or(now),
            dirty: true,
        }
    }

    /// Sets the tick interval. `None` stops the clock.
    pub(super) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.tick_interval = interval;
        if let Some(interval) = interval {
            self.next_tick = Instant::now() + interval;
        }
    }

    pub(super) fn set_render_interval(&mut self, interval: Duration) {
        self.render_interval = interval;
    }

    /// Blocks until the next tick, render or terminal event.
    pub(super) fn next(&mut self) -> io::Result<LoopEvent> {
        loop {
            let now = Instant::now();
            if let Some(interval) = self.tick_interval
                && now >= self.next_tick
            {
                self.next_tick += interval;
                if self.next_tick < now {
                    // Too far behind; drop the backlog instead of bursting.
                    self.next_tick = now + interval;
                }
                self.dirty = true;
                return Ok(LoopEvent::Tick);
            }

            if self.dirty && now.duration_since(self.last_render) >= self.render_interval {
                self.last_render = now;
                self.dirty = false;
                return Ok(LoopEvent::Render);
            }

            let timeout = self.timeout(now);
            if !event::poll(timeout)? {
                continue;
            }

            self.dirty = true;
            return Ok(LoopEvent::Terminal(event::read()?));
        }
    }

    fn timeout(&self, now: Instant) -> Duration {
        let next_render = self
            .dirty
            .then(|| self.last_render + self.render_interval);
        let next_tick = self.tick_interval.map(|_| self.next_tick);
        [next_render, next_tick]
            .into_iter()
            .flatten()
            .min()
            .map_or(Duration::from_millis(250), |at| {
                at.saturating_duration_since(now)
            })
    }
}
