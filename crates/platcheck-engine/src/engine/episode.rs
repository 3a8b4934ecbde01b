use crate::{
    DegenerateChunkError,
    core::{CANVAS_HEIGHT, Chunk, Rect, TileLayout},
    engine::{Agent, FrameInput, SimConfig},
};

/// Lifecycle of one chunk traversal attempt. Terminal states stay terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum EpisodeState {
    Running,
    /// Reached the far edge of the chunk.
    Succeeded,
    /// Fell through the bottom of the canvas.
    FailedFall,
    /// Exhausted the frame budget.
    FailedTimeout,
}

impl EpisodeState {
    /// Playability outcome of a finished episode; `None` while running.
    #[must_use]
    pub fn playable(self) -> Option<bool> {
        match self {
            Self::Running => None,
            Self::Succeeded => Some(true),
            Self::FailedFall | Self::FailedTimeout => Some(false),
        }
    }
}

/// One episode: the chunk's derived geometry plus all per-episode mutable
/// state. Discarded wholesale when the batch advances; nothing leaks into
/// the next chunk.
#[derive(Debug, Clone)]
pub struct Episode {
    solids: Vec<Rect>,
    agent: Agent,
    state: EpisodeState,
    frames: u64,
}

impl Episode {
    /// Derives geometry and places the agent.
    ///
    /// Fails on degenerate chunks (no valid start); callers decide whether
    /// to skip or record those as unplayable.
    pub fn new(
        layout: &TileLayout,
        chunk: &Chunk,
        config: &SimConfig,
    ) -> Result<Self, DegenerateChunkError> {
        let start = layout.agent_start(chunk).ok_or(DegenerateChunkError)?;
        Ok(Self {
            solids: layout.solid_rects(chunk),
            agent: Agent::new(start, config),
            state: EpisodeState::Running,
            frames: 0,
        })
    }

    #[must_use]
    pub fn state(&self) -> EpisodeState {
        self.state
    }

    #[must_use]
    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    #[must_use]
    pub fn solids(&self) -> &[Rect] {
        &self.solids
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advances one frame and classifies the result.
    ///
    /// Checks run in order after the simulation update: fell through the
    /// floor, out of budget, reached the goal line. No-op once terminal.
    pub fn step(&mut self, config: &SimConfig, input: FrameInput) -> EpisodeState {
        if !self.state.is_running() {
            return self.state;
        }

        self.agent.step(config, &self.solids, input);
        self.frames += 1;

        let rect = self.agent.rect();
        if rect.y > CANVAS_HEIGHT {
            self.state = EpisodeState::FailedFall;
        } else if self.frames >= config.frame_budget() {
            self.state = EpisodeState::FailedTimeout;
        } else if rect.x > config.goal_line() {
            self.state = EpisodeState::Succeeded;
        }
        self.state
    }

    /// Runs the episode to its terminal state with autonomous input.
    pub fn run_autonomous(&mut self, config: &SimConfig) -> EpisodeState {
        while self.state.is_running() {
            self.step(config, FrameInput::autonomous());
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CHUNK_SIZE;

    fn flat_chunk() -> Chunk {
        let mut chunk = Chunk::empty();
        for col in 0..CHUNK_SIZE {
            chunk.set_solid(15, col, true);
        }
        chunk
    }

    /// Floor with a pit: columns `gap` have no ground.
    fn pit_chunk(gap: std::ops::Range<usize>) -> Chunk {
        let mut chunk = flat_chunk();
        for col in gap {
            chunk.set_solid(15, col, false);
        }
        chunk
    }

    /// Boxed-in start: low ceiling overhead and a full-height wall ahead.
    fn boxed_chunk() -> Chunk {
        let mut chunk = flat_chunk();
        chunk.set_solid(13, 0, true);
        for row in 0..15 {
            chunk.set_solid(row, 1, true);
        }
        chunk
    }

    fn run_episode(chunk: &Chunk) -> Episode {
        let config = SimConfig::default();
        let layout = TileLayout::new();
        let mut episode = Episode::new(&layout, chunk, &config).unwrap();
        episode.run_autonomous(&config);
        episode
    }

    #[test]
    fn test_flat_chunk_succeeds() {
        let config = SimConfig::default();
        let layout = TileLayout::new();
        let chunk = flat_chunk();
        let mut episode = Episode::new(&layout, &chunk, &config).unwrap();

        let mut last_x = episode.agent().rect().x;
        while episode.state().is_running() {
            let airborne = episode.agent().is_airborne();
            episode.step(&config, FrameInput::autonomous());
            let x = episode.agent().rect().x;
            if !airborne {
                assert!(x >= last_x, "grounded x must be non-decreasing");
            }
            last_x = x;
        }

        assert_eq!(episode.state(), EpisodeState::Succeeded);
        assert!(episode.frames() < config.frame_budget() / 4);
    }

    #[test]
    fn test_jumpable_pit_succeeds_via_trap_sensor() {
        let config = SimConfig::default();
        let layout = TileLayout::new();
        // Two-cell pit well ahead of the start.
        let chunk = pit_chunk(5..7);
        let mut episode = Episode::new(&layout, &chunk, &config).unwrap();

        let gap_start = 5.0 * 40.0;
        let mut jump_requested_before_edge = false;
        while episode.state().is_running() {
            episode.step(&config, FrameInput::autonomous());
            if episode.agent().pending_jump() && episode.agent().rect().x < gap_start {
                jump_requested_before_edge = true;
            }
        }

        assert!(
            jump_requested_before_edge,
            "trap sensor must fire before the pit edge"
        );
        assert_eq!(episode.state(), EpisodeState::Succeeded);
    }

    #[test]
    fn test_wide_pit_fails_by_falling() {
        // Ten missing floor cells are beyond the arc's range.
        let episode = run_episode(&pit_chunk(4..14));
        assert_eq!(episode.state(), EpisodeState::FailedFall);
    }

    #[test]
    fn test_boxed_start_times_out() {
        let config = SimConfig::default();
        let layout = TileLayout::new();
        let chunk = boxed_chunk();
        let mut episode = Episode::new(&layout, &chunk, &config).unwrap();

        // The first attempted arc step collides with the ceiling tile, so
        // every jump is rejected immediately and the agent never leaves the
        // starting cell.
        let start_x = episode.agent().rect().x;
        episode.run_autonomous(&config);
        assert_eq!(episode.state(), EpisodeState::FailedTimeout);
        assert_eq!(episode.agent().rect().x, start_x);
        assert_eq!(episode.frames(), config.frame_budget());
    }

    #[test]
    fn test_degenerate_chunk_is_rejected() {
        let config = SimConfig::default();
        let layout = TileLayout::new();
        assert!(Episode::new(&layout, &Chunk::empty(), &config).is_err());
    }

    #[test]
    fn test_replay_is_deterministic() {
        let chunk = pit_chunk(6..8);
        let first = run_episode(&chunk);
        let second = run_episode(&chunk);

        assert_eq!(first.state(), second.state());
        assert_eq!(first.frames(), second.frames());
        assert_eq!(first.agent().rect(), second.agent().rect());
    }

    #[test]
    fn test_playable_classification() {
        assert_eq!(EpisodeState::Running.playable(), None);
        assert_eq!(EpisodeState::Succeeded.playable(), Some(true));
        assert_eq!(EpisodeState::FailedFall.playable(), Some(false));
        assert_eq!(EpisodeState::FailedTimeout.playable(), Some(false));
    }
}
