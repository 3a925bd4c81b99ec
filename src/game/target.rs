//! Secret target words
//!
//! A classic game hides one word; a quantum game hides two distinct words
//! that every guess is scored against simultaneously. Targets are drawn
//! uniformly from the session's word pool through whatever RNG the caller
//! provides, so no global random state exists anywhere in the crate.

use crate::core::{FeedbackRow, Word};

use rand::Rng;

/// The hidden word(s) a session is played against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// One hidden word
    Classic(Word),
    /// Two distinct hidden words, resolved side by side
    Quantum(Word, Word),
}

impl Target {
    /// Draw a target uniformly from the pool
    ///
    /// Quantum mode draws a second index and redraws until it differs
    /// from the first, so the two words are distinct whenever the pool
    /// allows it; a pool of one reuses its only word for both. The pool
    /// must be non-empty and duplicate-free; the session upholds both.
    pub fn draw(pool: &[Word], quantum: bool, rng: &mut impl Rng) -> Self {
        debug_assert!(!pool.is_empty(), "target pool must be non-empty");

        let first = rng.random_range(0..pool.len());
        if quantum {
            let second = if pool.len() > 1 {
                let mut second = rng.random_range(0..pool.len());
                while second == first {
                    second = rng.random_range(0..pool.len());
                }
                second
            } else {
                first
            };
            Self::Quantum(pool[first].clone(), pool[second].clone())
        } else {
            Self::Classic(pool[first].clone())
        }
    }

    /// Score a guess against the hidden word(s)
    #[must_use]
    pub fn score(&self, guess: &Word) -> FeedbackRow {
        match self {
            Self::Classic(primary) => FeedbackRow::score(guess, primary, None),
            Self::Quantum(primary, secondary) => {
                FeedbackRow::score(guess, primary, Some(secondary))
            }
        }
    }

    /// Length of the hidden word(s); both agree in quantum mode
    #[must_use]
    pub fn length(&self) -> usize {
        self.primary().len()
    }

    /// True for a two-word target
    #[must_use]
    pub const fn is_quantum(&self) -> bool {
        matches!(self, Self::Quantum(..))
    }

    /// The first hidden word
    #[must_use]
    pub const fn primary(&self) -> &Word {
        match self {
            Self::Classic(primary) | Self::Quantum(primary, _) => primary,
        }
    }

    /// The second hidden word, when one exists
    #[must_use]
    pub const fn secondary(&self) -> Option<&Word> {
        match self {
            Self::Classic(_) => None,
            Self::Quantum(_, secondary) => Some(secondary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn classic_draw_from_singleton_pool() {
        let pool = pool(&["crane"]);
        let mut rng = StdRng::seed_from_u64(0);

        let target = Target::draw(&pool, false, &mut rng);
        assert_eq!(target.primary().text(), "crane");
        assert!(!target.is_quantum());
        assert!(target.secondary().is_none());
    }

    #[test]
    fn quantum_draw_yields_distinct_words() {
        let pool = pool(&["crane", "slate", "crown"]);

        // Any seed must produce two different words
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let target = Target::draw(&pool, true, &mut rng);

            assert!(target.is_quantum());
            let secondary = target.secondary().unwrap();
            assert_ne!(target.primary(), secondary);
            assert!(pool.contains(target.primary()));
            assert!(pool.contains(secondary));
        }
    }

    #[test]
    fn quantum_draw_reuses_a_singleton_pool() {
        let pool = pool(&["crane"]);
        let mut rng = StdRng::seed_from_u64(3);

        let target = Target::draw(&pool, true, &mut rng);
        assert!(target.is_quantum());
        assert_eq!(target.primary().text(), "crane");
        assert_eq!(target.secondary().unwrap().text(), "crane");
    }

    #[test]
    fn quantum_draw_from_two_word_pool() {
        let pool = pool(&["crane", "slate"]);
        let mut rng = StdRng::seed_from_u64(1);

        let target = Target::draw(&pool, true, &mut rng);
        let picked = [
            target.primary().text().to_string(),
            target.secondary().unwrap().text().to_string(),
        ];
        assert!(picked.contains(&"crane".to_string()));
        assert!(picked.contains(&"slate".to_string()));
    }

    #[test]
    fn same_seed_same_target() {
        let pool = pool(&["crane", "slate", "crown", "pearl"]);

        let first = Target::draw(&pool, true, &mut StdRng::seed_from_u64(42));
        let second = Target::draw(&pool, true, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn classic_score_has_no_quantum_symbols() {
        let target = Target::Classic(Word::new("slate").unwrap());
        let row = target.score(&Word::new("crane").unwrap());

        assert!(!row.symbols().iter().any(|s| {
            matches!(
                s,
                Feedback::QuantumCorrect | Feedback::QuantumWrongPosition
            )
        }));
    }

    #[test]
    fn quantum_score_sees_both_words() {
        let target = Target::Quantum(Word::new("slate").unwrap(), Word::new("crown").unwrap());
        let row = target.score(&Word::new("crane").unwrap());

        assert_eq!(row.symbols()[0], Feedback::QuantumCorrect);
        assert_eq!(row.symbols()[2], Feedback::Correct);
    }

    #[test]
    fn length_reports_word_length() {
        let classic = Target::Classic(Word::new("cat").unwrap());
        assert_eq!(classic.length(), 3);

        let quantum = Target::Quantum(Word::new("crane").unwrap(), Word::new("slate").unwrap());
        assert_eq!(quantum.length(), 5);
    }
}
