pub use self::{chunk::*, layout::*, rect::*};

pub(crate) mod chunk;
pub(crate) mod layout;
pub(crate) mod rect;
