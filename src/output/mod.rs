//! Terminal output formatting
//!
//! Display utilities for the game banner, feedback rows, and endgame.

pub mod display;
pub mod formatters;

pub use display::{write_feedback, write_intro, write_loss, write_reveal, write_win};
