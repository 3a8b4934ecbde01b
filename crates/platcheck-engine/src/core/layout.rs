use crate::core::{
    chunk::{CHUNK_SIZE, Chunk},
    rect::Rect,
};

/// Canvas width in units.
pub const CANVAS_WIDTH: f64 = 640.0;
/// Canvas height in units.
pub const CANVAS_HEIGHT: f64 = 640.0;
/// One grid cell corresponds to this many canvas units.
pub const CELL_SIZE: f64 = 40.0;
/// Rendered tile side. One unit smaller than the cell so neighboring tiles
/// never share a closed-bound edge with the collision test.
pub const TILE_SIZE: f64 = 39.0;

/// Precomputed table of every tile rectangle on the 40-unit grid.
///
/// Indexed `[col][row]`: the horizontal grid index selects the outer
/// dimension. Built once and shared read-only across all episodes.
#[derive(Debug, Clone)]
pub struct TileLayout {
    cells: [[Rect; CHUNK_SIZE]; CHUNK_SIZE],
}

impl Default for TileLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl TileLayout {
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn new() -> Self {
        let cells = std::array::from_fn(|col| {
            std::array::from_fn(|row| {
                Rect::new(
                    col as f64 * CELL_SIZE,
                    row as f64 * CELL_SIZE,
                    TILE_SIZE,
                    TILE_SIZE,
                )
            })
        });
        Self { cells }
    }

    /// Tile rectangle for grid cell `(row, col)`.
    #[must_use]
    pub fn tile(&self, col: usize, row: usize) -> Rect {
        self.cells[col][row]
    }

    /// One rectangle per solid cell of the chunk.
    #[must_use]
    pub fn solid_rects(&self, chunk: &Chunk) -> Vec<Rect> {
        chunk
            .solid_cells()
            .map(|(row, col)| self.tile(col, row))
            .collect()
    }

    /// Starting rectangle for the agent: the leftmost column that has a
    /// lowest solid cell and, scanning from the bottom, an empty cell
    /// strictly above it.
    ///
    /// `None` means the chunk is degenerate (no column offers a resting
    /// spot); callers must treat that case explicitly instead of letting it
    /// reach rectangle arithmetic.
    #[must_use]
    pub fn agent_start(&self, chunk: &Chunk) -> Option<Rect> {
        for col in 0..CHUNK_SIZE {
            let Some(lowest_solid) = (0..CHUNK_SIZE).rev().find(|&row| chunk.is_solid(row, col))
            else {
                continue;
            };
            for row in (0..CHUNK_SIZE).rev() {
                if !chunk.is_solid(row, col) && row < lowest_solid {
                    return Some(self.tile(col, row));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_chunk() -> Chunk {
        let mut chunk = Chunk::empty();
        for col in 0..CHUNK_SIZE {
            chunk.set_solid(15, col, true);
        }
        chunk
    }

    #[test]
    fn test_solid_rects_count_and_shape() {
        let layout = TileLayout::new();
        let mut chunk = floor_chunk();
        chunk.set_solid(10, 4, true);

        let rects = layout.solid_rects(&chunk);
        assert_eq!(rects.len(), chunk.solid_cells().count());
        for rect in &rects {
            assert_eq!(rect.width, TILE_SIZE);
            assert_eq!(rect.height, TILE_SIZE);
            assert_eq!(rect.x % CELL_SIZE, 0.0, "x aligned to the grid");
            assert_eq!(rect.y % CELL_SIZE, 0.0, "y aligned to the grid");
        }
    }

    #[test]
    fn test_tile_indexing_is_column_major() {
        let layout = TileLayout::new();
        let mut chunk = Chunk::empty();
        chunk.set_solid(2, 7, true); // row 2, col 7

        let rects = layout.solid_rects(&chunk);
        assert_eq!(rects, vec![Rect::new(280.0, 80.0, 39.0, 39.0)]);
    }

    #[test]
    fn test_agent_start_rests_on_floor() {
        let layout = TileLayout::new();
        let start = layout.agent_start(&floor_chunk()).unwrap();
        // Leftmost column, one cell above the floor row.
        assert_eq!(start, Rect::new(0.0, 560.0, 39.0, 39.0));
    }

    #[test]
    fn test_agent_start_skips_groundless_columns() {
        let layout = TileLayout::new();
        let mut chunk = Chunk::empty();
        // Only column 3 has any ground.
        chunk.set_solid(12, 3, true);

        let start = layout.agent_start(&chunk).unwrap();
        assert_eq!(start, Rect::new(120.0, 440.0, 39.0, 39.0));
    }

    #[test]
    fn test_agent_start_climbs_stacked_solids() {
        let layout = TileLayout::new();
        let mut chunk = Chunk::empty();
        // Column 0 solid from row 13 down to 15: first empty cell above the
        // lowest solid is row 12.
        for row in 13..16 {
            chunk.set_solid(row, 0, true);
        }

        let start = layout.agent_start(&chunk).unwrap();
        assert_eq!(start, Rect::new(0.0, 480.0, 39.0, 39.0));
    }

    #[test]
    fn test_agent_start_degenerate_chunks() {
        let layout = TileLayout::new();
        assert!(layout.agent_start(&Chunk::empty()).is_none());

        // Full columns leave no empty cell above the lowest solid.
        let mut full = Chunk::empty();
        for row in 0..CHUNK_SIZE {
            for col in 0..CHUNK_SIZE {
                full.set_solid(row, col, true);
            }
        }
        assert!(layout.agent_start(&full).is_none());
    }
}
