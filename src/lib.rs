//! Quantum Wordle
//!
//! A terminal word-guessing game with a twist: quantum mode hides two
//! words at once and scores every guess against both. Guesses are checked
//! against a trie-backed dictionary, and the feedback follows Wordle's
//! duplicate-letter rules per hidden word.
//!
//! # Quick Start
//!
//! ```rust
//! use quantum_wordle::core::{Feedback, FeedbackRow, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("slate").unwrap();
//!
//! let row = FeedbackRow::score(&guess, &answer, None);
//! assert_eq!(row.symbols()[2], Feedback::Correct);
//! assert!(!row.is_win());
//! ```

// Core domain types
pub mod core;

// Dictionary membership
pub mod dict;

// Session state and target selection
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
