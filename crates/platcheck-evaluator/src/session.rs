use log::{debug, warn};
use platcheck_engine::{Chunk, Episode, FrameInput, SimConfig, TileLayout};

use crate::{batch::ChunkBatch, report::PlayabilityReport};

/// Owner of the batch frame loop.
///
/// Holds one live [`Episode`] at a time; when it terminates the outcome is
/// recorded and the episode is replaced wholesale by the next chunk's.
/// Degenerate chunks (no valid agent start) are recorded as unplayable with
/// a warning instead of being silently skipped.
#[derive(Debug)]
pub struct BatchSession {
    layout: TileLayout,
    config: SimConfig,
    batch: ChunkBatch,
    episode: Option<Episode>,
    outcomes: Vec<bool>,
}

impl BatchSession {
    #[must_use]
    pub fn new(chunks: Vec<Chunk>, how_many: usize, seed: u64, config: SimConfig) -> Self {
        let batch = ChunkBatch::new(chunks, how_many, seed);
        let mut session = Self {
            layout: TileLayout::new(),
            config,
            batch,
            episode: None,
            outcomes: Vec::new(),
        };
        session.advance();
        session
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The live episode, if the batch is not yet exhausted.
    #[must_use]
    pub fn episode(&self) -> Option<&Episode> {
        self.episode.as_ref()
    }

    /// Number of episodes with a recorded outcome.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.outcomes.len()
    }

    /// Total number of chunks selected for the batch.
    #[must_use]
    pub fn total(&self) -> usize {
        self.batch.len()
    }

    /// All chunks evaluated and no episode in flight.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.episode.is_none()
    }

    /// Advances the live episode by one frame.
    ///
    /// On a terminal state, records the outcome and resets to the next
    /// chunk. No-op once the batch is exhausted.
    pub fn step(&mut self, input: FrameInput) {
        let Some(episode) = &mut self.episode else {
            return;
        };
        let state = episode.step(&self.config, input);
        if let Some(playable) = state.playable() {
            debug!(
                "chunk {}/{}: {state:?} after {} frames",
                self.outcomes.len() + 1,
                self.batch.len(),
                episode.frames(),
            );
            self.outcomes.push(playable);
            self.advance();
        }
    }

    /// Runs the remaining episodes back to back with autonomous input.
    pub fn run_to_completion(&mut self) {
        while !self.is_finished() {
            self.step(FrameInput::autonomous());
        }
    }

    /// Summary over the outcomes recorded so far. An aborted run reports
    /// only completed episodes; the in-flight one is discarded.
    #[must_use]
    pub fn report(&self) -> PlayabilityReport {
        PlayabilityReport::from_outcomes(&self.outcomes)
    }

    fn advance(&mut self) {
        self.episode = None;
        while let Some(chunk) = self.batch.next_chunk() {
            match Episode::new(&self.layout, &chunk, &self.config) {
                Ok(episode) => {
                    self.episode = Some(episode);
                    return;
                }
                Err(err) => {
                    warn!(
                        "chunk {}/{}: {err}, recording as unplayable",
                        self.batch.position(),
                        self.batch.len(),
                    );
                    self.outcomes.push(false);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use platcheck_engine::CHUNK_SIZE;

    use super::*;

    fn flat_chunk() -> Chunk {
        let mut chunk = Chunk::empty();
        for col in 0..CHUNK_SIZE {
            chunk.set_solid(15, col, true);
        }
        chunk
    }

    fn walled_chunk() -> Chunk {
        // Full-height wall ahead of the start and a ceiling overhead: the
        // agent can neither pass nor jump, so the episode times out.
        let mut chunk = flat_chunk();
        chunk.set_solid(13, 0, true);
        for row in 0..15 {
            chunk.set_solid(row, 1, true);
        }
        chunk
    }

    #[test]
    fn test_mixed_batch_proportion() {
        let chunks = vec![flat_chunk(), walled_chunk(), flat_chunk(), flat_chunk()];
        let mut session = BatchSession::new(chunks, 4, 42, SimConfig::default());
        session.run_to_completion();

        let report = session.report();
        assert_eq!(report.total(), 4);
        assert_eq!(report.playable(), 3);
        assert_eq!(session.completed(), 4);
        assert!(session.is_finished());
    }

    #[test]
    fn test_degenerate_chunk_counts_as_unplayable() {
        let chunks = vec![flat_chunk(), Chunk::empty(), flat_chunk()];
        let mut session = BatchSession::new(chunks, 3, 42, SimConfig::default());
        session.run_to_completion();

        let report = session.report();
        assert_eq!(report.total(), 3);
        assert_eq!(report.playable(), 2);
    }

    #[test]
    fn test_all_degenerate_batch_finishes_immediately() {
        let chunks = vec![Chunk::empty(); 5];
        let session = BatchSession::new(chunks, 5, 42, SimConfig::default());

        assert!(session.is_finished());
        assert_eq!(session.report().total(), 5);
        assert_eq!(session.report().playable(), 0);
    }

    #[test]
    fn test_abort_discards_in_flight_episode() {
        let chunks = vec![flat_chunk(), flat_chunk()];
        let mut session = BatchSession::new(chunks, 2, 42, SimConfig::default());

        // A few frames into the first episode, nothing is recorded yet.
        for _ in 0..10 {
            session.step(FrameInput::autonomous());
        }
        assert_eq!(session.completed(), 0);
        assert_eq!(session.report().total(), 0);
    }
}
