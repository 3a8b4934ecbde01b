//! Batch-level playability evaluation.
//!
//! Drives the engine over a shuffled, capped batch of chunks and aggregates
//! per-episode outcomes into a single playability proportion:
//!
//! 1. [`ChunkBatch`] - Deterministic seeded selection of the chunks to test
//! 2. [`BatchSession`] - Frame loop owner: one live episode at a time,
//!    outcomes recorded on termination, state reset wholesale per chunk
//! 3. [`PlayabilityReport`] - The final summary statistic
//!
//! The session is pacing-agnostic: a headless caller steps it as fast as it
//! can, a rendering surface steps it once per display tick. Outcomes are
//! identical either way because all timing is frame-counted.

pub use self::{batch::*, report::*, session::*};

mod batch;
mod report;
mod session;
