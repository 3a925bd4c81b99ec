//! Bundled word list
//!
//! A default dictionary compiled into the binary so the game runs with no
//! arguments; `-w/--wordlist` substitutes a file at startup.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn entries_are_valid_words() {
        // The bundled list is five-letter, lowercase
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn entries_sorted_and_unique() {
        for pair in WORDS.windows(2) {
            assert!(
                pair[0] < pair[1],
                "'{}' and '{}' out of order or duplicated",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn entries_all_parse() {
        // Round trip through the loader keeps every entry
        let words = loader::words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS_COUNT);
    }
}
