//! skelvis library
//!
//! Scene loading and command implementations behind the `skelvis` binary.

pub mod cli;
pub mod commands;
pub mod scene;
pub mod utils;
