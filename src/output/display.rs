//! Display functions for game output
//!
//! Everything writes into an injected writer rather than straight to
//! stdout, so the round loop can be exercised against an in-memory
//! buffer. Styling goes through `colored`, which downgrades to plain
//! text on non-terminals.

use super::formatters::{feedback_glyphs, glyph_legend};
use crate::core::{FeedbackRow, Word};
use crate::game::{Session, Target};
use colored::Colorize;
use std::io::{self, Write};

/// Print the banner, session parameters, and glyph legend
pub fn write_intro(out: &mut impl Write, session: &Session) -> io::Result<()> {
    let title = if session.is_quantum() {
        "QUANTUM WORDLE"
    } else {
        "WORDLE"
    };

    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", title.bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        "\nGuess the {}-letter word in {} rounds.",
        session.word_length(),
        session.max_rounds()
    )?;
    if session.is_quantum() {
        writeln!(
            out,
            "Two words are hidden at once; every guess is scored against both."
        )?;
    }
    writeln!(out, "Dictionary: {} words.\n", session.dictionary_size())?;
    writeln!(out, "{}", glyph_legend(session.is_quantum()))?;
    writeln!(out)
}

/// Print the hidden word(s), for `--reveal` runs
pub fn write_reveal(out: &mut impl Write, target: &Target) -> io::Result<()> {
    match target.secondary() {
        Some(secondary) => writeln!(
            out,
            "The hidden words are {} and {}",
            styled_word(target.primary()),
            styled_word(secondary)
        ),
        None => writeln!(
            out,
            "The hidden word is {}",
            styled_word(target.primary())
        ),
    }
}

/// Print the scored row for one guess
pub fn write_feedback(out: &mut impl Write, guess: &str, row: &FeedbackRow) -> io::Result<()> {
    writeln!(
        out,
        "Result: {} {}",
        guess.to_uppercase().bright_white().bold(),
        feedback_glyphs(row)
    )
}

/// Print the victory banner
///
/// The verdict line follows the attempt count; a quantum win also reveals
/// both words, since the winning guess need not equal either of them.
pub fn write_win(out: &mut impl Write, target: &Target, rounds: usize) -> io::Result<()> {
    let verdict = match rounds {
        1 => "Genius!",
        2 => "Magnificent!",
        3 => "Impressive!",
        4 => "Splendid!",
        5 => "Great!",
        _ => "Phew!",
    };

    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "{}", verdict.bright_green().bold())?;
    writeln!(
        out,
        "You needed {} {}.",
        rounds.to_string().bright_cyan().bold(),
        if rounds == 1 { "attempt" } else { "attempts" }
    )?;
    if let Some(secondary) = target.secondary() {
        writeln!(
            out,
            "The hidden words were {} and {}.",
            styled_word(target.primary()),
            styled_word(secondary)
        )?;
    }
    writeln!(out, "{}", "═".repeat(60).bright_cyan())
}

/// Print the loss message, revealing what was hidden
pub fn write_loss(out: &mut impl Write, target: &Target, rounds: usize) -> io::Result<()> {
    writeln!(
        out,
        "\n{}",
        format!("Out of rounds after {rounds} attempts.").red().bold()
    )?;
    match target.secondary() {
        Some(secondary) => writeln!(
            out,
            "The words were {} and {}.",
            styled_word(target.primary()),
            styled_word(secondary)
        ),
        None => writeln!(out, "The word was {}.", styled_word(target.primary())),
    }
}

fn styled_word(word: &Word) -> colored::ColoredString {
    word.text().to_uppercase().bright_yellow().bold()
}
