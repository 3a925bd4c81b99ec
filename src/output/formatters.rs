//! Formatting utilities for terminal output

use crate::core::FeedbackRow;

/// Format a feedback row as a glyph string
#[must_use]
pub fn feedback_glyphs(row: &FeedbackRow) -> String {
    row.symbols().iter().map(|symbol| symbol.glyph()).collect()
}

/// Legend explaining the glyphs for the session mode
#[must_use]
pub const fn glyph_legend(quantum: bool) -> &'static str {
    if quantum {
        "🟩 right letter, right spot in the first word\n\
         🟨 right letter, wrong spot in the first word\n\
         🟦 right letter, right spot in the second word\n\
         🟪 right letter, wrong spot in the second word\n\
         ⬜ letter in neither word"
    } else {
        "🟩 right letter, right spot\n\
         🟨 right letter, wrong spot\n\
         ⬜ letter not in the word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn glyphs_for_classic_row() {
        let row = FeedbackRow::score(&word("crane"), &word("slate"), None);
        assert_eq!(feedback_glyphs(&row), "⬜⬜🟩⬜🟩");
    }

    #[test]
    fn glyphs_for_quantum_row() {
        let row = FeedbackRow::score(&word("crane"), &word("slate"), Some(&word("crown")));
        assert_eq!(feedback_glyphs(&row), "🟦🟦🟩🟪🟩");
    }

    #[test]
    fn glyphs_for_perfect_row() {
        let row = FeedbackRow::score(&word("crane"), &word("crane"), None);
        assert_eq!(feedback_glyphs(&row), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn legend_matches_mode() {
        let classic = glyph_legend(false);
        assert!(classic.contains('⬜'));
        assert!(!classic.contains('🟦'));
        assert!(!classic.contains('🟪'));

        let quantum = glyph_legend(true);
        assert!(quantum.contains('🟦'));
        assert!(quantum.contains('🟪'));
    }
}
