//! The combining evaluator: heuristics always, judge when possible.
//!
//! Whether the judge path can be attempted is decided at construction
//! time by injecting (or not injecting) a text-generation capability.
//! Branching on an `Option` field keeps the degradation paths local and
//! testable instead of leaning on ambient process state.
//!
//! The evaluator itself never fails. Every judge-side problem collapses
//! into a creativity estimate plus a distinguishing feedback string:
//! "never configured" and "configured but failed" stay observably
//! different for downstream consumers.

use std::sync::Arc;

use tracing::info;

use critique_core::{
    creativity, heuristic_scores, quick_evaluate, EvaluationMode, EvaluationResult, Location,
    Synthesizer,
};

use crate::judge::{JudgeEvaluator, JudgeOutcome, DEFAULT_CREATIVITY, DEFAULT_FEEDBACK};
use crate::providers::TextGenerator;

/// Feedback when full mode was requested but no capability was injected.
pub const NOT_CONFIGURED_FEEDBACK: &str =
    "Text generation not configured. Using quick evaluation mode.";

/// Feedback when the capability was present but the judge call failed.
pub const UNAVAILABLE_FEEDBACK: &str =
    "LLM evaluation unavailable. Using fallback heuristic scoring.";

/// The evaluation pipeline: deterministic scorers plus an optional judge.
pub struct Evaluator {
    judge: Option<JudgeEvaluator>,
    synthesizer: Synthesizer,
}

impl Evaluator {
    /// Create an evaluator. Pass `None` to pin full-mode requests to the
    /// heuristic path.
    pub fn new(judge: Option<JudgeEvaluator>) -> Self {
        Self {
            judge,
            synthesizer: Synthesizer::new(),
        }
    }

    /// Evaluator with no judge: full mode degrades to heuristics.
    pub fn heuristic_only() -> Self {
        Self::new(None)
    }

    /// Evaluator judging through the given text-generation capability.
    pub fn with_generator(generator: Arc<dyn TextGenerator>) -> Self {
        Self::new(Some(JudgeEvaluator::new(generator)))
    }

    /// Whether full mode can actually reach a judge.
    pub fn has_judge(&self) -> bool {
        self.judge.is_some()
    }

    /// Evaluate one narration against one location record.
    ///
    /// Suspends only in full mode with a judge present, and only while
    /// awaiting the generation call. Never fails; the result always
    /// carries four valid sub-scores.
    pub async fn evaluate(
        &self,
        narration: &str,
        location: &Location,
        mode: EvaluationMode,
    ) -> EvaluationResult {
        let result = match (mode, &self.judge) {
            (EvaluationMode::Quick, _) => quick_evaluate(narration, location),

            (EvaluationMode::Full, None) => {
                let heuristic = heuristic_scores(narration, location);
                let estimate = creativity::lexical_diversity(narration);
                self.synthesizer
                    .synthesize(heuristic, estimate, NOT_CONFIGURED_FEEDBACK)
            }

            (EvaluationMode::Full, Some(judge)) => {
                let heuristic = heuristic_scores(narration, location);

                let (creativity, feedback) = match judge.evaluate(narration, location).await {
                    JudgeOutcome::Scored {
                        creativity,
                        feedback,
                    } => (creativity, feedback),
                    JudgeOutcome::ParseFailed { .. } => {
                        (DEFAULT_CREATIVITY, DEFAULT_FEEDBACK.to_string())
                    }
                    JudgeOutcome::Unavailable { .. } => (
                        creativity::fallback_estimate(narration),
                        UNAVAILABLE_FEEDBACK.to_string(),
                    ),
                };

                self.synthesizer.synthesize(heuristic, creativity, feedback)
            }
        };

        info!(
            location = %location.name,
            %mode,
            overall = result.scores.overall,
            "evaluation complete"
        );

        result
    }
}
