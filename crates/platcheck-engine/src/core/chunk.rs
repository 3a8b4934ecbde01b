use serde::{Deserialize, Serialize};

/// Side length of a level chunk, in cells.
pub const CHUNK_SIZE: usize = 16;

/// One 16×16 level segment: 1 = solid, 0 = passable.
///
/// A chunk is the read-only source of truth for a single episode. Stored
/// row-major (`cells[row][col]`), matching the serialized form: the data
/// files are arrays of 16 rows of 16 binary entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chunk {
    cells: [[u8; CHUNK_SIZE]; CHUNK_SIZE],
}

impl Default for Chunk {
    fn default() -> Self {
        Self::empty()
    }
}

impl Chunk {
    /// An all-passable chunk.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[0; CHUNK_SIZE]; CHUNK_SIZE],
        }
    }

    #[must_use]
    pub const fn from_rows(cells: [[u8; CHUNK_SIZE]; CHUNK_SIZE]) -> Self {
        Self { cells }
    }

    /// Tests whether the cell at `(row, col)` is unpassable.
    #[must_use]
    pub fn is_solid(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == 1
    }

    pub fn set_solid(&mut self, row: usize, col: usize, solid: bool) {
        self.cells[row][col] = u8::from(solid);
    }

    /// Iterates `(row, col)` indices of all solid cells, row-major.
    pub fn solid_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, entries)| {
            entries
                .iter()
                .enumerate()
                .filter(|&(_, &entry)| entry == 1)
                .map(move |(col, _)| (row, col))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chunk_has_no_solid_cells() {
        let chunk = Chunk::empty();
        assert_eq!(chunk.solid_cells().count(), 0);
    }

    #[test]
    fn test_set_and_query() {
        let mut chunk = Chunk::empty();
        chunk.set_solid(15, 3, true);
        assert!(chunk.is_solid(15, 3));
        assert!(!chunk.is_solid(3, 15));
        assert_eq!(chunk.solid_cells().collect::<Vec<_>>(), vec![(15, 3)]);
    }

    #[test]
    fn test_solid_cells_scans_row_major() {
        let mut chunk = Chunk::empty();
        chunk.set_solid(0, 5, true);
        chunk.set_solid(7, 9, true);
        chunk.set_solid(7, 2, true);
        chunk.set_solid(15, 0, true);

        assert_eq!(
            chunk.solid_cells().collect::<Vec<_>>(),
            vec![(0, 5), (7, 2), (7, 9), (15, 0)]
        );
    }

    #[test]
    fn test_deserialize_from_nested_arrays() {
        let mut rows = vec![vec![0_u8; CHUNK_SIZE]; CHUNK_SIZE];
        rows[15] = vec![1; CHUNK_SIZE];
        let json = serde_json::to_string(&rows).unwrap();

        let chunk: Chunk = serde_json::from_str(&json).unwrap();
        assert_eq!(chunk.solid_cells().count(), CHUNK_SIZE);
        assert!(chunk.is_solid(15, 0));
        assert!(!chunk.is_solid(14, 0));
    }
}
