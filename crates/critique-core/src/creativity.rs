//! Deterministic creativity estimates.
//!
//! Creativity is normally judged by the LLM path in the runtime crate.
//! These two local estimates cover the cases where that path is not taken,
//! and they are deliberately different formulas: downstream consumers can
//! tell "judge never configured" apart from "judge failed mid-call" by the
//! score behavior as well as the feedback string.

use crate::scorers::patterns;

/// Quick-path creativity estimate from lexical diversity.
///
/// `min(100, round(distinct_words / total_words * 150))` - a vocabulary
/// variety ratio scaled so that even moderately varied prose lands in a
/// reasonable band. Empty input scores 0.
pub fn lexical_diversity(narration: &str) -> u8 {
    let total = patterns::word_count(narration);
    if total == 0 {
        return 0;
    }

    let distinct = patterns::distinct_word_count(narration);
    let scaled = (distinct as f64 / total as f64 * 150.0).round();
    scaled.min(100.0) as u8
}

/// Judge-failure creativity estimate.
///
/// `min(100, word_count + 20)` when the text carries an explicit humor
/// marker ("haha", "lol", "funny", "hilarious"), `min(100, word_count)`
/// otherwise. Crude, but it never fails and rewards the same length band
/// the judge tends to favor.
pub fn fallback_estimate(narration: &str) -> u8 {
    let words = patterns::word_count(narration);
    let bonus = if patterns::contains_humor_marker(narration) {
        20
    } else {
        0
    };

    (words + bonus).min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexical_diversity_empty_is_zero() {
        assert_eq!(lexical_diversity(""), 0);
        assert_eq!(lexical_diversity("   "), 0);
    }

    #[test]
    fn test_lexical_diversity_repetition_scores_low() {
        // 1 distinct word out of 10: (1/10) * 150 = 15.
        assert_eq!(lexical_diversity("word word word word word word word word word word"), 15);
    }

    #[test]
    fn test_lexical_diversity_varied_text_caps_at_100() {
        // 9 distinct words out of 9: (9/9) * 150 = 150, capped.
        assert_eq!(lexical_diversity("The quick brown fox jumps over that lazy dog"), 100);
    }

    #[test]
    fn test_fallback_tracks_word_count() {
        assert_eq!(fallback_estimate(""), 0);
        assert_eq!(fallback_estimate("five words are right here"), 5);
    }

    #[test]
    fn test_fallback_humor_bonus() {
        assert_eq!(fallback_estimate("that joke was funny"), 24);
        assert_eq!(fallback_estimate("that joke was flat"), 4);
    }

    #[test]
    fn test_fallback_caps_at_100() {
        let long = vec!["word"; 300].join(" ");
        assert_eq!(fallback_estimate(&long), 100);
        let long_funny = format!("hilarious {}", vec!["word"; 95].join(" "));
        assert_eq!(fallback_estimate(&long_funny), 100);
    }
}
