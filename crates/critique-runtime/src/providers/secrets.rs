//! Secure credential handling for text-generation providers.
//!
//! This module provides a centralized, type-safe way to handle API
//! credentials. Using it ensures:
//!
//! - **No accidental logging**: Credentials cannot appear in Debug output
//! - **Memory safety**: Credentials are zeroed on drop
//! - **Consistent patterns**: All providers use the same handling
//!
//! ## Usage
//!
//! ```ignore
//! use crate::providers::secrets::ApiCredential;
//!
//! // Load from environment
//! let cred = ApiCredential::from_env("OPENAI_API_KEY", "OpenAI API key")?;
//!
//! // Use in HTTP header (explicit exposure)
//! request.bearer_auth(cred.expose());
//! ```

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use super::ProviderError;

/// Where a credential was loaded from.
///
/// Useful for debugging configuration issues without exposing the actual
/// credential value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Loaded from environment variable
    Environment,
    /// Provided programmatically
    Programmatic,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Environment => write!(f, "environment"),
            CredentialSource::Programmatic => write!(f, "programmatic"),
        }
    }
}

/// A securely-stored API credential.
///
/// - Safe Debug implementation that shows `[REDACTED]`
/// - Memory zeroing on drop via the `secrecy` crate
/// - Explicit exposure via `.expose()` at the point of use
/// - Source tracking for debugging
pub struct ApiCredential {
    value: SecretString,
    source: CredentialSource,
    name: &'static str,
}

impl ApiCredential {
    /// Create a new credential from a string value.
    ///
    /// The value is immediately wrapped in `SecretString` and cannot be
    /// accidentally logged after this point.
    pub fn new(value: impl Into<String>, source: CredentialSource, name: &'static str) -> Self {
        Self {
            value: SecretString::from(value.into()),
            source,
            name,
        }
    }

    /// Load a credential from an environment variable.
    ///
    /// # Arguments
    /// * `env_var` - Name of the environment variable
    /// * `name` - Human-readable name for error messages
    pub fn from_env(env_var: &str, name: &'static str) -> Result<Self, ProviderError> {
        std::env::var(env_var)
            .map(|v| Self::new(v, CredentialSource::Environment, name))
            .map_err(|_| {
                ProviderError::NotConfigured(format!(
                    "{} not set: configure '{}' environment variable",
                    name, env_var
                ))
            })
    }

    /// Check whether a credential is available without loading it.
    pub fn is_available(env_var: &str) -> bool {
        std::env::var(env_var).is_ok_and(|v| !v.is_empty())
    }

    /// Expose the credential value for use in an API call.
    ///
    /// Only call this at the point where the credential is actually needed
    /// (e.g. setting an HTTP header). Never store the exposed value.
    pub fn expose(&self) -> &str {
        self.value.expose_secret()
    }

    /// True if the stored value is empty.
    pub fn is_empty(&self) -> bool {
        self.value.expose_secret().is_empty()
    }

    /// Where this credential came from.
    pub fn source(&self) -> CredentialSource {
        self.source
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredential")
            .field("name", &self.name)
            .field("value", &"[REDACTED]")
            .field("source", &self.source)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_value() {
        let cred = ApiCredential::new("sk-super-secret", CredentialSource::Programmatic, "test key");
        let debug = format!("{:?}", cred);

        assert!(!debug.contains("sk-super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_expose_returns_value() {
        let cred = ApiCredential::new("sk-value", CredentialSource::Programmatic, "test key");
        assert_eq!(cred.expose(), "sk-value");
        assert!(!cred.is_empty());
    }

    #[test]
    fn test_empty_credential() {
        let cred = ApiCredential::new("", CredentialSource::Programmatic, "test key");
        assert!(cred.is_empty());
    }

    #[test]
    fn test_from_env_missing_is_not_configured() {
        let result = ApiCredential::from_env("CRITIQUE_TEST_NO_SUCH_VAR", "test key");
        assert!(matches!(result, Err(ProviderError::NotConfigured(_))));
    }

    #[test]
    fn test_source_is_tracked() {
        let cred = ApiCredential::new("k", CredentialSource::Programmatic, "test key");
        assert_eq!(cred.source(), CredentialSource::Programmatic);
        assert_eq!(cred.source().to_string(), "programmatic");
    }
}
