//! A single game in progress
//!
//! The session owns the dictionary and the hidden target, counts rounds,
//! and classifies every failure as either a setup error (fatal, before
//! play starts) or a guess rejection (the player is re-prompted and no
//! round is spent).

use super::MAX_ROUNDS;
use super::target::Target;
use crate::core::{FeedbackRow, Word, WordError};
use crate::dict::PrefixSet;

use rand::Rng;
use std::fmt;

/// Parameters for a session
///
/// `max_rounds` defaults to [`MAX_ROUNDS`] and is overridable field-wise;
/// the CLI never changes it, tests do.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub length: usize,
    pub quantum: bool,
    pub max_rounds: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(length: usize, quantum: bool) -> Self {
        Self {
            length,
            quantum,
            max_rounds: MAX_ROUNDS,
        }
    }
}

/// Failures while assembling a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// The word list holds nothing of the requested length
    NoWords { length: usize },
    /// A forced target whose length disagrees with the session length
    TargetLength { expected: usize, found: usize },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWords { length } => {
                write!(f, "word list has no {length}-letter words")
            }
            Self::TargetLength { expected, found } => {
                write!(
                    f,
                    "target length {found} does not match session length {expected}"
                )
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// Reasons a guess is rejected
///
/// Rejections are never fatal: the caller reports the reason and prompts
/// again, and the round counter stays where it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Not a clean run of letters
    Malformed(WordError),
    /// Right alphabet, wrong length
    WrongLength { expected: usize, found: usize },
    /// A well-formed word the dictionary does not know
    NotInDictionary,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "{err}"),
            Self::WrongLength { expected, found } => {
                write!(f, "Expected {expected} letters, got {found}")
            }
            Self::NotInDictionary => write!(f, "Not in the word list"),
        }
    }
}

impl std::error::Error for GuessError {}

/// A single game in progress
#[derive(Debug)]
pub struct Session {
    dictionary: PrefixSet,
    target: Target,
    max_rounds: usize,
    rounds_played: usize,
}

impl Session {
    /// Draw the target(s) at random and build the session dictionary
    ///
    /// Words whose length differs from the configured one are ignored and
    /// duplicates collapse, so quantum mode's two draws name two
    /// different words whenever more than one exists; a one-word pool
    /// hides the same word twice.
    ///
    /// # Errors
    /// `SetupError::NoWords` when nothing of the configured length
    /// remains.
    pub fn new(
        words: &[Word],
        config: &GameConfig,
        rng: &mut impl Rng,
    ) -> Result<Self, SetupError> {
        let (dictionary, pool) = index_words(words, config.length);
        if pool.is_empty() {
            return Err(SetupError::NoWords {
                length: config.length,
            });
        }

        let target = Target::draw(&pool, config.quantum, rng);
        Ok(Self::assemble(dictionary, target, config.max_rounds))
    }

    /// Build a session around a fixed target instead of a random draw
    ///
    /// The target word(s) are added to the dictionary even when absent
    /// from `words`, so the winning guess is always accepted.
    ///
    /// # Errors
    /// `SetupError::TargetLength` when either hidden word's length
    /// disagrees with the configured session length.
    pub fn with_target(
        words: &[Word],
        config: &GameConfig,
        target: Target,
    ) -> Result<Self, SetupError> {
        let expected = config.length;
        if target.primary().len() != expected {
            return Err(SetupError::TargetLength {
                expected,
                found: target.primary().len(),
            });
        }
        if let Some(secondary) = target.secondary()
            && secondary.len() != expected
        {
            return Err(SetupError::TargetLength {
                expected,
                found: secondary.len(),
            });
        }

        let (mut dictionary, _) = index_words(words, config.length);
        dictionary.insert(target.primary());
        if let Some(secondary) = target.secondary() {
            dictionary.insert(secondary);
        }
        Ok(Self::assemble(dictionary, target, config.max_rounds))
    }

    fn assemble(dictionary: PrefixSet, target: Target, max_rounds: usize) -> Self {
        Self {
            dictionary,
            target,
            max_rounds,
            rounds_played: 0,
        }
    }

    /// Check a raw guess without spending a round
    ///
    /// Checks run in order: character set, length, dictionary membership.
    /// Uppercase input is accepted and normalized.
    ///
    /// # Errors
    /// The first failing check's `GuessError`.
    pub fn validate_guess(&self, raw: &str) -> Result<Word, GuessError> {
        let word = Word::new(raw).map_err(GuessError::Malformed)?;

        let expected = self.word_length();
        if word.len() != expected {
            return Err(GuessError::WrongLength {
                expected,
                found: word.len(),
            });
        }

        if !self.dictionary.contains(&word) {
            return Err(GuessError::NotInDictionary);
        }

        Ok(word)
    }

    /// Validate a guess, spend a round, and score it
    ///
    /// Rejected input leaves the round counter untouched.
    ///
    /// # Errors
    /// Same as [`Session::validate_guess`].
    pub fn submit_guess(&mut self, raw: &str) -> Result<FeedbackRow, GuessError> {
        let word = self.validate_guess(raw)?;
        self.rounds_played += 1;
        Ok(self.target.score(&word))
    }

    /// Rounds already spent on valid guesses
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Round budget for this session
    #[must_use]
    pub const fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// Letters per word in this session
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.length()
    }

    /// Distinct words accepted as guesses
    #[must_use]
    pub fn dictionary_size(&self) -> usize {
        self.dictionary.len()
    }

    /// True when two words are hidden
    #[must_use]
    pub const fn is_quantum(&self) -> bool {
        self.target.is_quantum()
    }

    /// True once the round budget is spent
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.rounds_played >= self.max_rounds
    }

    /// The hidden target, for endgame reveals
    #[must_use]
    pub const fn target(&self) -> &Target {
        &self.target
    }
}

/// Index the words of one length: membership trie plus duplicate-free pool
fn index_words(words: &[Word], length: usize) -> (PrefixSet, Vec<Word>) {
    let mut dictionary = PrefixSet::new();
    let mut pool = Vec::new();
    for word in words {
        if word.len() == length && dictionary.insert(word) {
            pool.push(word.clone());
        }
    }
    (dictionary, pool)
}
