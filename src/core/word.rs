//! Word representation
//!
//! A Word is an immutable run of lowercase letters. The word length for a
//! game session is a runtime parameter, so unlike classic Wordle nothing
//! here is fixed to five letters; the session enforces its own length.

use std::fmt;

/// A validated lowercase word
///
/// Guaranteed non-empty and made of ASCII letters `a`-`z` only, so the
/// dictionary trie can index children directly by `byte - b'a'`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must have at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Uppercase input is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if the input:
    /// - is empty
    /// - contains non-ASCII characters
    /// - contains anything outside the letters `a`-`z`
    ///
    /// # Examples
    /// ```
    /// use quantum_wordle::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: construction rejects empty input
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.bytes(), b"crane");
        assert_eq!(word.len(), 5);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("cat").unwrap().len(), 3);
        assert_eq!(Word::new("quantum").unwrap().len(), 7);
        assert_eq!(Word::new("a").unwrap().len(), 1);
    }

    #[test]
    fn word_creation_empty() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err()); // Number
        assert!(Word::new("cran ").is_err()); // Space
        assert!(Word::new("cran!").is_err()); // Punctuation
        assert!(Word::new("too long").is_err()); // Embedded space
    }

    #[test]
    fn word_creation_non_ascii() {
        assert!(matches!(Word::new("crâne"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("crane").unwrap();
        let word2 = Word::new("crane").unwrap();
        let word3 = Word::new("CRANE").unwrap();
        let word4 = Word::new("slate").unwrap();

        assert_eq!(word1, word2);
        assert_eq!(word1, word3); // Case insensitive
        assert_ne!(word1, word4);
    }
}
