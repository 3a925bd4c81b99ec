//! Guess feedback calculation and representation
//!
//! Each position of a guess is classified against the secret target, or
//! against two targets in quantum mode. Classification follows Wordle's
//! duplicate-letter rules: exact matches are claimed first, then displaced
//! letters draw from whatever each target has left, and every target letter
//! feeds at most one guess position. Consumption is tracked independently
//! per target, with the primary target always checked before the secondary.

use super::Word;

/// Per-position classification of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Letter matches the primary target at this position
    Correct,
    /// Letter occurs elsewhere in the primary target
    WrongPosition,
    /// Letter not found in either target
    Wrong,
    /// Letter matches the secondary target at this position (quantum mode)
    QuantumCorrect,
    /// Letter occurs elsewhere in the secondary target (quantum mode)
    QuantumWrongPosition,
}

impl Feedback {
    /// True for the two exact-position symbols
    ///
    /// A round is won when every position is exact against some target.
    #[inline]
    #[must_use]
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Correct | Self::QuantumCorrect)
    }

    /// The glyph used to render this symbol
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::WrongPosition => '🟨',
            Self::Wrong => '⬜',
            Self::QuantumCorrect => '🟦',
            Self::QuantumWrongPosition => '🟪',
        }
    }
}

/// Feedback for a whole guess, one symbol per position
///
/// Produced fresh each round and discarded after rendering and the win
/// check; no history is kept.
///
/// # Examples
/// ```
/// use quantum_wordle::core::{Feedback, FeedbackRow, Word};
///
/// let guess = Word::new("crane").unwrap();
/// let primary = Word::new("slate").unwrap();
/// let secondary = Word::new("crown").unwrap();
///
/// // Quantum scoring: C and R match the secondary exactly, A and E the
/// // primary, and N is displaced relative to the secondary.
/// let row = FeedbackRow::score(&guess, &primary, Some(&secondary));
/// assert_eq!(
///     row.symbols(),
///     &[
///         Feedback::QuantumCorrect,
///         Feedback::QuantumCorrect,
///         Feedback::Correct,
///         Feedback::QuantumWrongPosition,
///         Feedback::Correct,
///     ]
/// );
/// assert!(!row.is_win());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackRow(Box<[Feedback]>);

impl FeedbackRow {
    /// Score a guess against one target, or two in quantum mode
    ///
    /// Two passes. Pass one claims exact matches: the primary target is
    /// checked first, and only if it misses does the secondary get a
    /// chance, so a position receives exactly one classification. Pass two
    /// scans each target's unconsumed letters in position order for
    /// displaced matches, again primary before secondary. A target letter
    /// consumed by one guess position is invisible to later positions.
    ///
    /// All words must have the same length; the session guarantees this.
    ///
    /// # Examples
    /// ```
    /// use quantum_wordle::core::{Feedback, FeedbackRow, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    ///
    /// let row = FeedbackRow::score(&guess, &target, None);
    /// // C(wrong) R(wrong) A(correct) N(wrong) E(correct)
    /// assert_eq!(row.symbols()[2], Feedback::Correct);
    /// assert_eq!(row.symbols()[4], Feedback::Correct);
    /// assert!(!row.is_win());
    /// ```
    #[must_use]
    pub fn score(guess: &Word, primary: &Word, secondary: Option<&Word>) -> Self {
        let k = guess.len();
        debug_assert_eq!(k, primary.len(), "guess and target lengths must agree");
        if let Some(second) = secondary {
            debug_assert_eq!(k, second.len(), "guess and target lengths must agree");
        }

        let guess = guess.bytes();
        let first = primary.bytes();
        let second = secondary.map(Word::bytes);

        let mut symbols = vec![Feedback::Wrong; k];
        let mut used_first = vec![false; k];
        let mut used_second = vec![false; k];

        // First pass: exact position matches, primary target first
        // Allow: Index needed to compare guess[i] against both targets and set symbols[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..k {
            if guess[i] == first[i] {
                symbols[i] = Feedback::Correct;
                used_first[i] = true;
            } else if let Some(second) = second
                && guess[i] == second[i]
            {
                symbols[i] = Feedback::QuantumCorrect;
                used_second[i] = true;
            }
        }

        // Second pass: displaced letters, drawn from each target's
        // unconsumed pool in position order
        // Allow: Index needed to access guess[i] and check/set symbols[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..k {
            if symbols[i].is_exact() {
                continue;
            }
            if let Some(j) = (0..k).find(|&j| !used_first[j] && first[j] == guess[i]) {
                symbols[i] = Feedback::WrongPosition;
                used_first[j] = true;
            } else if let Some(second) = second
                && let Some(j) = (0..k).find(|&j| !used_second[j] && second[j] == guess[i])
            {
                symbols[i] = Feedback::QuantumWrongPosition;
                used_second[j] = true;
            }
        }

        Self(symbols.into_boxed_slice())
    }

    /// True iff every position is exact against some target
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|symbol| symbol.is_exact())
    }

    /// The per-position symbols, in guess order
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Feedback] {
        &self.0
    }

    /// Number of positions (the session word length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length row (never produced in play)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
