use crossterm::event::{Event, KeyCode};
use platcheck_engine::FrameInput;
use platcheck_evaluator::BatchSession;
use ratatui::Frame;

use crate::{
    command::{EvalArg, print_report},
    tui::{App, Tui},
    view::ChunkView,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct WatchArg {
    #[clap(flatten)]
    eval: EvalArg,
    /// Screen refresh rate; the simulation always ticks at its own rate
    #[arg(long, default_value_t = 30.0)]
    render_rate: f64,
}

pub(crate) fn run(arg: &WatchArg) -> anyhow::Result<()> {
    let session = arg.eval.session()?;
    let mut app = WatchApp::new(session, arg.render_rate);
    Tui::new().run(&mut app)?;

    // A quit mid-batch discards the in-flight episode; the report covers
    // whatever finished before it.
    print_report(arg.eval.group(), &app.session.report());
    Ok(())
}

/// Real-time view of the batch: white tiles, red agent.
///
/// Right and Up arrows are manual overrides ORed into the next frame's
/// input, mirroring the agent's own run/jump signals.
#[derive(Debug)]
struct WatchApp {
    session: BatchSession,
    render_rate: f64,
    manual: FrameInput,
    is_exiting: bool,
}

impl WatchApp {
    fn new(session: BatchSession, render_rate: f64) -> Self {
        Self {
            session,
            render_rate,
            manual: FrameInput::default(),
            is_exiting: false,
        }
    }
}

impl App for WatchApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_rate(self.session.config().fps);
        tui.set_render_rate(self.render_rate);
    }

    fn should_exit(&self) -> bool {
        self.is_exiting || self.session.is_finished()
    }

    fn handle_event(&mut self, _tui: &mut Tui, event: Event) {
        if let Some(key) = event.as_key_event() {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
                KeyCode::Right => self.manual.move_right = true,
                KeyCode::Up => self.manual.jump = true,
                _ => {}
            }
        }
    }

    fn update(&mut self, _tui: &mut Tui) {
        let manual = std::mem::take(&mut self.manual);
        self.session.step(FrameInput::autonomous().or(manual));
    }

    fn draw(&self, frame: &mut Frame) {
        if let Some(episode) = self.session.episode() {
            let view = ChunkView::new(
                episode,
                self.session.completed() + 1,
                self.session.total(),
            );
            frame.render_widget(&view, frame.area());
        }
    }
}
