//! Synthesizer: folds sub-scores into a final [`EvaluationResult`].
//!
//! The weighting is a fixed invariant of the engine, not a tuning knob.
//! Callers who need different weights build a different synthesizer; the
//! one evaluation pipeline shipped here always uses these.

use chrono::Utc;
use tracing::debug;

use crate::creativity;
use crate::scorers::{CompletenessScorer, FactualScorer, Scorer, ToneScorer};
use crate::types::{EvaluationResult, HeuristicScores, Location, Scores};

/// Weight of factual consistency in the overall score.
pub const FACTUAL_WEIGHT: f64 = 0.30;
/// Weight of tone match in the overall score.
pub const TONE_WEIGHT: f64 = 0.30;
/// Weight of creativity in the overall score.
pub const CREATIVITY_WEIGHT: f64 = 0.25;
/// Weight of completeness in the overall score.
pub const COMPLETENESS_WEIGHT: f64 = 0.15;

/// Feedback attached to quick-mode results.
pub const QUICK_FEEDBACK: &str =
    "Quick heuristic evaluation completed. For detailed feedback, use full evaluation.";

/// Run the three deterministic scorers over a narration.
///
/// Pure and total: identical inputs always produce identical sub-scores,
/// and there is no input that produces an error.
pub fn heuristic_scores(narration: &str, location: &Location) -> HeuristicScores {
    let scores = HeuristicScores {
        factual_consistency: FactualScorer::new().score(narration, location),
        tone_match: ToneScorer::new().score(narration, location),
        completeness: CompletenessScorer::new().score(narration, location),
    };

    debug!(
        factual = scores.factual_consistency,
        tone = scores.tone_match,
        completeness = scores.completeness,
        "heuristic scoring complete"
    );

    scores
}

/// The Synthesizer assembles sub-scores into a final result.
pub struct Synthesizer;

impl Synthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Weighted overall score, rounded to the nearest integer.
    pub fn overall(&self, heuristic: &HeuristicScores, creativity: u8) -> u8 {
        let weighted = f64::from(heuristic.factual_consistency) * FACTUAL_WEIGHT
            + f64::from(heuristic.tone_match) * TONE_WEIGHT
            + f64::from(creativity) * CREATIVITY_WEIGHT
            + f64::from(heuristic.completeness) * COMPLETENESS_WEIGHT;

        weighted.round() as u8
    }

    /// Merge heuristic sub-scores with a creativity score and feedback,
    /// stamping the current time.
    pub fn synthesize(
        &self,
        heuristic: HeuristicScores,
        creativity: u8,
        feedback: impl Into<String>,
    ) -> EvaluationResult {
        let overall = self.overall(&heuristic, creativity);

        EvaluationResult {
            scores: Scores {
                factual_consistency: heuristic.factual_consistency,
                tone_match: heuristic.tone_match,
                creativity,
                completeness: heuristic.completeness,
                overall,
            },
            feedback: feedback.into(),
            timestamp: Utc::now(),
        }
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Heuristic-only evaluation: the quick path.
///
/// Creativity comes from the lexical-diversity estimate, so nothing here
/// suspends or touches the network. Feedback is the fixed quick-mode
/// string directing callers at full evaluation for detail.
pub fn quick_evaluate(narration: &str, location: &Location) -> EvaluationResult {
    let heuristic = heuristic_scores(narration, location);
    let creativity = creativity::lexical_diversity(narration);

    Synthesizer::new().synthesize(heuristic, creativity, QUICK_FEEDBACK)
}
