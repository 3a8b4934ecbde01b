use platcheck_engine::{CANVAS_HEIGHT, CANVAS_WIDTH, Episode, Rect};
use ratatui::{
    buffer::Buffer,
    layout::Rect as Area,
    style::Color,
    symbols::Marker,
    widgets::{
        Block, Widget,
        canvas::{Canvas, Rectangle},
    },
};

/// Canvas view of one episode: solid tiles white, agent red.
#[derive(Debug)]
pub(crate) struct ChunkView<'a> {
    episode: &'a Episode,
    chunk_number: usize,
    total: usize,
}

impl<'a> ChunkView<'a> {
    pub(crate) fn new(episode: &'a Episode, chunk_number: usize, total: usize) -> Self {
        Self {
            episode,
            chunk_number,
            total,
        }
    }
}

impl Widget for &ChunkView<'_> {
    fn render(self, area: Area, buf: &mut Buffer) {
        let title = format!("Testing chunk {}/{}", self.chunk_number, self.total);
        Canvas::default()
            .block(Block::bordered().title(title))
            .marker(Marker::HalfBlock)
            .x_bounds([0.0, CANVAS_WIDTH])
            .y_bounds([0.0, CANVAS_HEIGHT])
            .paint(|ctx| {
                for solid in self.episode.solids() {
                    ctx.draw(&canvas_rect(solid, Color::White));
                }
                ctx.draw(&canvas_rect(&self.episode.agent().rect(), Color::Red));
            })
            .render(area, buf);
    }
}

/// The canvas y-axis grows upward; the simulation's grows downward.
fn canvas_rect(rect: &Rect, color: Color) -> Rectangle {
    Rectangle {
        x: rect.x,
        y: CANVAS_HEIGHT - rect.y - rect.height,
        width: rect.width,
        height: rect.height,
        color,
    }
}
