//! Text-generation provider abstractions for critique-runtime.
//!
//! This module defines the capability the judge evaluator depends on: a
//! single `generate(prompt, config) -> text` operation. The engine is
//! agnostic to which concrete provider backs it.
//!
//! ## Security
//!
//! All providers use the [`secrets`] module for secure credential handling.
//! See [`ApiCredential`] for the recommended patterns.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub mod secrets;

#[cfg(feature = "openai")]
mod openai;

pub use secrets::{ApiCredential, CredentialSource};

#[cfg(feature = "openai")]
pub use openai::{OpenAiProvider, OPENAI_API_KEY_ENV};

/// Errors from text-generation providers.
///
/// None of these escape the judge evaluator: every variant degrades into
/// a fallback creativity estimate. They exist so providers can report
/// precisely and so logs stay useful.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Rate limit exceeded, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Response parse error: {0}")]
    Parse(String),

    #[error("Authentication failed")]
    Auth,

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Configuration for one generation request.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Model identifier
    pub model: String,

    /// Sampling temperature. Low for judging - the judge should be
    /// consistent, not creative.
    pub temperature: f32,

    /// Maximum tokens to generate
    pub max_tokens: u32,

    /// Request timeout
    pub timeout: Duration,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.3,
            max_tokens: 500,
            timeout: Duration::from_secs(15),
        }
    }
}

impl GenerationConfig {
    /// Create a config with the specified model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }
}

/// The external text-generation capability.
///
/// This is the ONLY place where LLM calls are made. The heuristic scorers
/// in `critique-core` never see this trait.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for the prompt.
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, ProviderError>;

    /// Provider name for logs and metrics.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = GenerationConfig::default();
        assert_eq!(config.temperature, 0.3);
        assert_eq!(config.max_tokens, 500);
    }

    #[test]
    fn test_config_with_model() {
        let config = GenerationConfig::new("gpt-4o");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.temperature, 0.3);
    }

    #[test]
    fn test_provider_error_messages() {
        let err = ProviderError::Api {
            status: 500,
            message: "internal".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 500 - internal");

        let err = ProviderError::NotConfigured("no key".to_string());
        assert!(err.to_string().contains("no key"));
    }
}
