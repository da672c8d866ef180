//! Command implementations

pub mod clips;
pub mod cull;
pub mod play;
pub mod tree;
