use platcheck_engine::Chunk;
use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg32;

/// Default number of chunks evaluated per group.
pub const DEFAULT_BATCH_SIZE: usize = 100;
/// Default shuffle seed.
pub const DEFAULT_SEED: u64 = 42;

/// The ordered set of chunks selected for one evaluation run.
///
/// Selection is a seeded shuffle followed by truncation, so the same input
/// array, seed, and cap always yield the same chunks in the same order.
/// Iteration is an explicit cursor; exhaustion is a checked boundary, not a
/// control-flow exception.
#[derive(Debug, Clone)]
pub struct ChunkBatch {
    chunks: Vec<Chunk>,
    cursor: usize,
}

impl ChunkBatch {
    #[must_use]
    pub fn new(mut chunks: Vec<Chunk>, how_many: usize, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        chunks.shuffle(&mut rng);
        chunks.truncate(how_many);
        Self { chunks, cursor: 0 }
    }

    /// Number of chunks selected for this batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Index of the next chunk the cursor will hand out.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.chunks.len()
    }

    /// Hands out the next chunk and advances the cursor.
    pub fn next_chunk(&mut self) -> Option<Chunk> {
        let chunk = self.chunks.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(chunk)
    }
}
