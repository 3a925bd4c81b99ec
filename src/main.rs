//! Quantum Wordle - CLI
//!
//! Terminal Wordle with an optional quantum mode that hides two words at
//! once and scores every guess against both.

use anyhow::{Context, Result, ensure};
use clap::Parser;
use quantum_wordle::{
    commands::run_play,
    core::Word,
    game::{GameConfig, Session},
    output::write_reveal,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "quantum_wordle",
    about = "Terminal Wordle with a quantum two-word variant",
    version,
    author
)]
struct Cli {
    /// Letters per word
    #[arg(short = 'k', long = "length", default_value_t = 5)]
    length: usize,

    /// Word list file, one word per line; bundled list when omitted
    #[arg(short = 'w', long)]
    wordlist: Option<PathBuf>,

    /// Hide two words instead of one
    #[arg(short = 'q', long)]
    quantum: bool,

    /// Seed the target draw, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Print the hidden word(s) before play starts
    #[arg(long)]
    reveal: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    ensure!(cli.length >= 1, "--length must be at least 1");

    let words = load_words(cli.wordlist.as_deref())?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let config = GameConfig::new(cli.length, cli.quantum);
    let session = Session::new(&words, &config, &mut rng)?;

    let stdout = io::stdout();
    let mut output = stdout.lock();

    if cli.reveal {
        write_reveal(&mut output, session.target())?;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_play(session, &mut input, &mut output)?;
    Ok(())
}

/// Load the configured word list file, or fall back to the bundled one
fn load_words(path: Option<&Path>) -> Result<Vec<Word>> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display())),
        None => Ok(words_from_slice(WORDS)),
    }
}
