use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event};

/// Events delivered to the application.
#[derive(Debug, derive_more::From)]
pub(super) enum TuiEvent {
    /// Fixed-rate simulation frame.
    Tick,
    /// Screen redraw timing.
    Render,
    /// Terminal events such as key input and resize.
    Crossterm(Event),
}

/// Fixed-tick event loop with coalesced rendering.
///
/// Ticks fire at the simulation frame rate; renders only happen after state
/// changed and at most at the render rate, so a 100 ticks/s simulation does
/// not redraw the terminal 100 times a second.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Duration,
    render_interval: Duration,
    last_tick: Instant,
    last_render: Instant,
    dirty: bool,
}

impl EventLoop {
    pub(super) fn new() -> Self {
        let now = Instant::now();
        let past_time = now.checked_sub(Duration::from_secs(86400)).unwrap_or(now);
        Self {
            tick_interval: Duration::from_millis(10),
            render_interval: Duration::from_millis(33),
            last_tick: past_time,
            last_render: past_time,
            // Initial render is required on startup
            dirty: true,
        }
    }

    pub(super) fn set_tick_rate(&mut self, rate: f64) {
        self.tick_interval = Duration::from_secs_f64(1.0 / rate);
    }

    pub(super) fn set_render_rate(&mut self, rate: f64) {
        self.render_interval = Duration::from_secs_f64(1.0 / rate);
    }

    /// Returns the next event, blocking until a tick or render is due or a
    /// terminal event arrives.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if now.duration_since(self.last_tick) >= self.tick_interval {
                self.last_tick = now;
                self.dirty = true;
                return Ok(TuiEvent::Tick);
            }

            if self.dirty && now.duration_since(self.last_render) >= self.render_interval {
                self.last_render = now;
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            if !event::poll(self.timeout(now))? {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    fn timeout(&self, now: Instant) -> Duration {
        let next_tick_at = self.last_tick + self.tick_interval;
        let next_render_at = self
            .dirty
            .then(|| self.last_render + self.render_interval);
        let next_at = next_render_at.map_or(next_tick_at, |at| at.min(next_tick_at));
        next_at.saturating_duration_since(now)
    }
}
