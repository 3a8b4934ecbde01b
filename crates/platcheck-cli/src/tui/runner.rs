use crate::tui::{
    App,
    event_loop::{EventLoop, TuiEvent},
};

/// TUI runtime: owns the event loop and drives an [`App`].
#[derive(Debug)]
pub struct Tui {
    events: EventLoop,
}

impl Tui {
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: EventLoop::new(),
        }
    }

    /// Sets the simulation tick rate (Hz).
    pub fn set_tick_rate(&mut self, rate: f64) {
        self.events.set_tick_rate(rate);
    }

    /// Sets the maximum screen refresh rate (Hz).
    pub fn set_render_rate(&mut self, rate: f64) {
        self.events.set_render_rate(rate);
    }

    /// Runs the application until [`App::should_exit`] returns true.
    pub fn run<A>(mut self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Tick => {
                        app.update(&mut self);
                    }
                    TuiEvent::Render => {
                        terminal.draw(|f| app.draw(f))?;
                    }
                    TuiEvent::Crossterm(event) => {
                        app.handle_event(&mut self, event);
                    }
                }
            }
            Ok(())
        })
    }
}

impl Default for Tui {
    fn default() -> Self {
        Self::new()
    }
}
