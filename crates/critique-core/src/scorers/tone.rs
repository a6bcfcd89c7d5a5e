//! Stylistic tone scorer.
//!
//! **Question**: How strongly does the narration exhibit the fixed set of
//! in-character stylistic markers?
//!
//! Folds the [`patterns::TONE_MARKERS`] table: each marker contributes its
//! points once regardless of how many times it matches, and the raw sum
//! (110 across all eight rows) is capped at 100.

use crate::types::Location;

use super::{patterns, Scorer};

/// The tone match scorer.
pub struct ToneScorer;

impl ToneScorer {
    pub fn new() -> Self {
        Self
    }

    /// Names of the markers the narration triggers, for diagnostics.
    pub fn matched_markers(narration: &str) -> Vec<&'static str> {
        patterns::TONE_MARKERS
            .iter()
            .filter(|m| m.pattern.is_match(narration))
            .map(|m| m.name)
            .collect()
    }
}

impl Default for ToneScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for ToneScorer {
    fn name(&self) -> &'static str {
        "tone_match"
    }

    fn score(&self, narration: &str, _location: &Location) -> u8 {
        let raw: u16 = patterns::TONE_MARKERS
            .iter()
            .filter(|m| m.pattern.is_match(narration))
            .map(|m| u16::from(m.points))
            .sum();

        raw.min(100) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(narration: &str) -> u8 {
        ToneScorer::new().score(narration, &Location::new("Anywhere", "", ""))
    }

    #[test]
    fn test_flat_text_scores_zero() {
        assert_eq!(score("The weather report for today is mild."), 0);
    }

    #[test]
    fn test_single_marker() {
        assert_eq!(score("jeez"), 15);
        assert_eq!(score("burp"), 10);
        assert_eq!(score("family"), 10);
    }

    #[test]
    fn test_marker_counted_once_despite_repeats() {
        assert_eq!(score("morty morty morty jeez"), 15);
    }

    #[test]
    fn test_sum_is_capped_at_100() {
        // Triggers all eight markers: raw sum 110.
        let narration = "Jeez Morty. Burp. This dimension runs on quantum science, \
                         your stupid grandpa knows nobody cares. Deal with it.";
        assert_eq!(score(narration), 100);
    }

    #[test]
    fn test_worked_example_scores_80() {
        let narration = "Welcome to the Citadel of Ricks, Morty! In this dimension, \
                         everyone's a genius, and nobody cares. Quantum paradoxes, \
                         multiverse bureaucracy, it's all pathetic, honestly.";
        // informal address 15 + jargon 15 + cynicism 10 + scientific 15
        // + nihilism 15 + multi-sentence 10
        assert_eq!(score(narration), 80);

        let matched = ToneScorer::matched_markers(narration);
        assert_eq!(matched.len(), 6);
        assert!(matched.contains(&"nihilism"));
        assert!(!matched.contains(&"vocal tic"));
    }
}
