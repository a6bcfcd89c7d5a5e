//! # critique-core
//!
//! Deterministic narration quality scoring engine.
//!
//! This crate scores a piece of in-character narration against the factual
//! record of the location it describes, answering:
//! - Does the text reflect the supplied facts?
//! - Does it sound like the character?
//! - Is it the right length and shape?
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces same output
//! 2. **No LLM calls**: All scoring is rule-based; the judge path lives in
//!    `critique-runtime`
//! 3. **Total**: Malformed or empty input yields low but valid scores,
//!    never an error
//! 4. **Parallel-safe**: Evaluations share no mutable state
//!
//! ## Example
//!
//! ```rust
//! use critique_core::{quick_evaluate, Location};
//!
//! let location = Location::new("Citadel of Ricks", "Space station", "Unknown");
//! let result = quick_evaluate("Welcome to the Citadel of Ricks, Morty!", &location);
//!
//! assert!(result.scores.overall <= 100);
//! ```

pub mod creativity;
pub mod scorers;
pub mod synthesizer;
pub mod types;

// Re-export main types at crate root
pub use scorers::{CompletenessScorer, FactualScorer, Scorer, ToneScorer};
pub use synthesizer::{heuristic_scores, quick_evaluate, Synthesizer, QUICK_FEEDBACK};
pub use types::{
    EvaluationMode, EvaluationResult, HeuristicScores, Location, Resident, Scores,
};
