//! Command implementations

pub mod play;

pub use play::{Outcome, run_play};
