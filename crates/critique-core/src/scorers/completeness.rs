//! Length and structure scorer.
//!
//! **Question**: Do the narration's length and sentence structure fall in
//! an acceptable range?
//!
//! Word-count bands:
//! - under 30 words: linear ramp `(w / 30) * 50`
//! - 30 to 150 words: 100, the ideal band
//! - over 150 words: linear decay `100 - (w - 150) / 2`, floored at 50 so
//!   length alone never costs more than half credit
//!
//! A narration that splits into at least two sentences earns a +10
//! structure bonus, clamped to 100.

use crate::types::Location;

use super::{patterns, Scorer};

const IDEAL_MIN_WORDS: usize = 30;
const IDEAL_MAX_WORDS: usize = 150;
const SENTENCE_BONUS: f64 = 10.0;

/// The completeness scorer.
pub struct CompletenessScorer;

impl CompletenessScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CompletenessScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for CompletenessScorer {
    fn name(&self) -> &'static str {
        "completeness"
    }

    fn score(&self, narration: &str, _location: &Location) -> u8 {
        let words = patterns::word_count(narration);

        let mut score = if words < IDEAL_MIN_WORDS {
            (words as f64 / IDEAL_MIN_WORDS as f64) * 50.0
        } else if words <= IDEAL_MAX_WORDS {
            100.0
        } else {
            (100.0 - (words - IDEAL_MAX_WORDS) as f64 / 2.0).max(50.0)
        };

        if patterns::sentence_count(narration) >= 2 {
            score = (score + SENTENCE_BONUS).min(100.0);
        }

        score.round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(narration: &str) -> u8 {
        CompletenessScorer::new().score(narration, &Location::new("Anywhere", "", ""))
    }

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_empty_narration_scores_zero() {
        assert_eq!(score(""), 0);
    }

    #[test]
    fn test_short_narration_ramps_linearly() {
        // 15 words, one sentence: (15 / 30) * 50 = 25.
        assert_eq!(score(&words(15)), 25);
    }

    #[test]
    fn test_short_narration_with_sentence_bonus() {
        let narration = format!("{}. {}.", words(7), words(8));
        assert_eq!(score(&narration), 35);
    }

    #[test]
    fn test_ideal_band_scores_100() {
        assert_eq!(score(&words(30)), 100);
        assert_eq!(score(&words(150)), 100);
        // The bonus cannot push past 100.
        let narration = format!("{}. {}.", words(15), words(15));
        assert_eq!(score(&narration), 100);
    }

    #[test]
    fn test_long_narration_decays() {
        // 200 words: 100 - 50/2 = 75.
        assert_eq!(score(&words(200)), 75);
    }

    #[test]
    fn test_decay_floors_at_50() {
        assert_eq!(score(&words(400)), 50);
        assert_eq!(score(&words(1000)), 50);
    }

    #[test]
    fn test_floor_plus_bonus() {
        // Very long but multi-sentence: 50 + 10 = 60.
        let narration = format!("{}. {}.", words(200), words(200));
        assert_eq!(score(&narration), 60);
    }
}
