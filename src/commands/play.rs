//! The interactive game loop
//!
//! Drives one game over an injected reader and writer, so tests can feed
//! a scripted transcript through a `Cursor` and inspect the output.
//! `main` hands in locked stdin and stdout.

use crate::game::Session;
use crate::output::{write_feedback, write_intro, write_loss, write_win};
use anyhow::{Result, bail};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// How a finished game ended
///
/// Both ends are ordinary returns; losing is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A guess resolved every position within the round budget
    Won { rounds: usize },
    /// The round budget ran out
    Lost { rounds: usize },
}

/// Run one game to completion
///
/// Each round prompts, reads one line, and submits it as a guess. A
/// rejected guess prints the reason and prompts again without spending
/// the round, as many times as it takes. A winning row or an exhausted
/// budget ends the game.
///
/// # Errors
///
/// Returns an error on I/O failure or when input ends before the game
/// does; a game cannot finish without a player.
pub fn run_play<R: BufRead, W: Write>(
    mut session: Session,
    input: &mut R,
    output: &mut W,
) -> Result<Outcome> {
    write_intro(output, &session)?;

    while !session.is_exhausted() {
        let round = session.rounds_played() + 1;
        write!(
            output,
            "[{round}/{}] Please input your guess: ",
            session.max_rounds()
        )?;
        output.flush()?;

        let Some(guess) = read_line(input)? else {
            bail!("input ended before the game finished");
        };

        let row = match session.submit_guess(&guess) {
            Ok(row) => row,
            Err(err) => {
                writeln!(output, "{}", format!("❌ {err}. Try again.").red())?;
                continue;
            }
        };

        write_feedback(output, &guess, &row)?;

        if row.is_win() {
            let rounds = session.rounds_played();
            write_win(output, session.target(), rounds)?;
            return Ok(Outcome::Won { rounds });
        }
    }

    let rounds = session.rounds_played();
    write_loss(output, session.target(), rounds)?;
    Ok(Outcome::Lost { rounds })
}

/// One trimmed input line, or `None` once the reader is empty
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
