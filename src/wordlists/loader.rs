//! Word list loading utilities
//!
//! Parses word lists from files or the embedded constants. Lines that are
//! not clean words are skipped rather than failing the whole list, and
//! duplicates collapse to their first occurrence, so downstream code can
//! treat any loaded list as duplicate-free.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Surrounding whitespace is trimmed, blank and
/// malformed lines are skipped, and repeated words keep only their first
/// occurrence. Words of any length are accepted; the session filters by
/// length later so one file can serve several session lengths.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use quantum_wordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(collect_words(content.lines()))
}

/// Convert an embedded string slice to a Word vector
///
/// Same parsing rules as [`load_from_file`].
///
/// # Examples
/// ```
/// use quantum_wordle::wordlists::WORDS;
/// use quantum_wordle::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    collect_words(slice.iter().copied())
}

/// Shared parse: trim, drop blanks and malformed entries, first-seen dedup
fn collect_words<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    lines
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
