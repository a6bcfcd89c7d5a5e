//! # critique-runtime
//!
//! LLM-judge evaluation for critique.
//!
//! This crate adds the subjective half of narration scoring: a judge that
//! asks an external text-generation capability for a creativity score and
//! free-text feedback, and the combining evaluator that merges judge and
//! heuristic outputs into one result.
//!
//! ## Important
//!
//! This crate is OPTIONAL in the sense that every path through it still
//! works without a configured provider: quick mode never touches the
//! network, and full mode degrades to deterministic scoring when the
//! capability is missing or failing. The deterministic engine lives in
//! `critique-core` and never makes LLM calls.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use critique_core::{EvaluationMode, Location};
//! use critique_runtime::{Evaluator, OpenAiProvider};
//!
//! let evaluator = match OpenAiProvider::from_env() {
//!     Ok(provider) => Evaluator::with_generator(Arc::new(provider)),
//!     Err(_) => Evaluator::heuristic_only(),
//! };
//!
//! let location = Location::new("Citadel of Ricks", "Space station", "Unknown");
//! let result = evaluator
//!     .evaluate("Welcome to the Citadel, Morty!", &location, EvaluationMode::Full)
//!     .await;
//! ```

pub mod api;
pub mod evaluator;
pub mod judge;
pub mod prompts;
pub mod providers;

// Re-export main types at crate root
pub use api::{handle_evaluate, handle_evaluate_json, ApiError, EvaluateRequest, EvaluateResponse};
pub use evaluator::{Evaluator, NOT_CONFIGURED_FEEDBACK, UNAVAILABLE_FEEDBACK};
pub use judge::{parse_verdict, JudgeEvaluator, JudgeOutcome};
pub use providers::{GenerationConfig, ProviderError, TextGenerator};

#[cfg(feature = "openai")]
pub use providers::OpenAiProvider;
