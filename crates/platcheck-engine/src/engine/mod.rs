//! Frame-by-frame simulation of the scripted agent inside one chunk.
//!
//! - [`SimConfig`] - Immutable physics and timing constants, built once and
//!   shared by every episode
//! - [`Agent`] - The reactive agent: run, jump arc, gravity, and the two
//!   sensors that raise the pending-jump flag
//! - [`Episode`] - One chunk traversal attempt with termination and
//!   playability classification
//!
//! The loop order inside a frame is fixed: jump, run, gravity, stuck sensor,
//! trap sensor, then the episode's termination checks. The sensors only set
//! a flag; it is consumed at the next frame's jump stage.

pub use self::{agent::*, config::*, episode::*};

mod agent;
mod config;
mod episode;
