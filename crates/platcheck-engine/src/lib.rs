pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("chunk has no valid agent start position")]
pub struct DegenerateChunkError;
