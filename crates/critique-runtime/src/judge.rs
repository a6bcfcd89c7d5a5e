//! The LLM judge evaluator.
//!
//! Asks the text-generation capability for a single subjective sub-score
//! (creativity) plus free-text feedback, under a strict two-line response
//! contract. Degradation is first-class: the judge never returns an error,
//! it returns a [`JudgeOutcome`] variant and the combining evaluator
//! decides what each variant means for the final score.

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use critique_core::Location;

use crate::prompts;
use crate::providers::{GenerationConfig, TextGenerator};

/// Feedback used when the judge responded but omitted the feedback line.
pub const DEFAULT_FEEDBACK: &str = "Evaluation completed.";

/// Creativity used when the judge responded but omitted the score line.
pub const DEFAULT_CREATIVITY: u8 = 50;

lazy_static! {
    static ref SCORE_LINE: Regex = Regex::new(r"CREATIVITY_SCORE:\s*(\d+)").unwrap();
    static ref FEEDBACK_LINE: Regex = Regex::new(r"FEEDBACK:\s*(.+)").unwrap();
}

/// What the judge path produced.
///
/// Exactly one of three states, so degradation is a pattern match rather
/// than an exception intercept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JudgeOutcome {
    /// The judge answered and at least one labeled line was extracted.
    /// Missing fields are already defaulted and the score is clamped.
    Scored { creativity: u8, feedback: String },

    /// The judge answered but neither labeled line was found.
    ParseFailed { raw: String },

    /// The generation call itself failed (network, auth, quota).
    Unavailable { reason: String },
}

/// Parse a raw judge response against the two-line contract.
///
/// The two extractions are independent: a missing score defaults to
/// [`DEFAULT_CREATIVITY`], a missing feedback line to
/// [`DEFAULT_FEEDBACK`]. Only when both are missing is the response
/// treated as unparseable.
pub fn parse_verdict(raw: &str) -> JudgeOutcome {
    let score = SCORE_LINE
        .captures(raw)
        .map(|caps| caps[1].parse::<u64>().map_or(100, |n| n.min(100)) as u8);

    let feedback = FEEDBACK_LINE
        .captures(raw)
        .map(|caps| caps[1].trim().to_string());

    match (score, feedback) {
        (None, None) => JudgeOutcome::ParseFailed {
            raw: raw.to_string(),
        },
        (score, feedback) => JudgeOutcome::Scored {
            creativity: score.unwrap_or(DEFAULT_CREATIVITY),
            feedback: feedback.unwrap_or_else(|| DEFAULT_FEEDBACK.to_string()),
        },
    }
}

/// The judge evaluator.
///
/// Holds the text-generation capability and the generation settings used
/// for judging (low temperature - the judge should be consistent across
/// calls, unlike the narration generator it is scoring).
pub struct JudgeEvaluator {
    generator: Arc<dyn TextGenerator>,
    config: GenerationConfig,
}

impl JudgeEvaluator {
    /// Create a judge over a text-generation capability with default
    /// generation settings.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            config: GenerationConfig::default(),
        }
    }

    /// Override the generation settings.
    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    /// Judge one narration. Infallible: provider errors become
    /// [`JudgeOutcome::Unavailable`].
    pub async fn evaluate(&self, narration: &str, location: &Location) -> JudgeOutcome {
        let prompt = prompts::creativity_prompt(narration, location);

        match self.generator.generate(&prompt, &self.config).await {
            Ok(raw) => {
                let outcome = parse_verdict(&raw);
                debug!(provider = self.generator.name(), ?outcome, "judge responded");
                outcome
            }
            Err(e) => {
                warn!(provider = self.generator.name(), error = %e, "judge call failed");
                JudgeOutcome::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }
}
