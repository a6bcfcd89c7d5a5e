//! The request/response invocation boundary.
//!
//! This is the surface the surrounding application calls: a JSON-shaped
//! request in, either a complete evaluation response or a structured
//! `{ "error": ... }` payload out. It is transport-agnostic on purpose -
//! an HTTP layer, a queue consumer, or a CLI can all sit on top of
//! [`handle_evaluate`] without the engine knowing.
//!
//! Validation failures are the only errors a well-behaved caller will
//! ever see; everything judge-related is absorbed further down.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use critique_core::{EvaluationMode, Location, Scores};

use crate::evaluator::Evaluator;

/// An evaluation request as received from the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    pub narration: String,
    pub location: Location,

    /// Defaults to full evaluation when omitted.
    #[serde(default)]
    pub mode: Option<EvaluationMode>,
}

/// A completed evaluation, merged with the echoed mode and location name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateResponse {
    pub scores: Scores,
    pub feedback: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub mode: EvaluationMode,

    /// Echo of the evaluated location's name.
    pub location: String,
}

/// Errors surfaced across the invocation boundary.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP-style status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            ApiError::Internal(_) => 500,
        }
    }

    /// The structured `{ "error": ... }` payload for this error.
    pub fn to_payload(&self) -> serde_json::Value {
        serde_json::json!({ "error": self.to_string() })
    }
}

/// Handle one evaluation request.
///
/// Returns `Validation` when required fields are missing or empty; never
/// panics and never leaks judge-path failures as errors.
pub async fn handle_evaluate(
    evaluator: &Evaluator,
    request: EvaluateRequest,
) -> Result<EvaluateResponse, ApiError> {
    if request.narration.trim().is_empty() {
        return Err(ApiError::Validation(
            "Narration and location data are required".to_string(),
        ));
    }
    if request.location.name.trim().is_empty() {
        return Err(ApiError::Validation(
            "Narration and location data are required".to_string(),
        ));
    }

    let mode = request.mode.unwrap_or_default();
    info!(location = %request.location.name, %mode, "evaluating narration");

    let result = evaluator
        .evaluate(&request.narration, &request.location, mode)
        .await;

    Ok(EvaluateResponse {
        scores: result.scores,
        feedback: result.feedback,
        timestamp: result.timestamp,
        mode,
        location: request.location.name,
    })
}

/// JSON-in, JSON-out wrapper over [`handle_evaluate`].
///
/// Deserialization failures are validation errors; any other failure is
/// reported as a generic internal error payload with its status, never a
/// crash.
pub async fn handle_evaluate_json(
    evaluator: &Evaluator,
    body: &str,
) -> (u16, serde_json::Value) {
    let request: EvaluateRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(e) => {
            let err = ApiError::Validation(format!("Invalid request: {e}"));
            return (err.status(), err.to_payload());
        }
    };

    match handle_evaluate(evaluator, request).await {
        Ok(response) => match serde_json::to_value(&response) {
            Ok(value) => (200, value),
            Err(e) => {
                error!(error = %e, "failed to serialize evaluation response");
                let err = ApiError::Internal("Failed to evaluate narration".to_string());
                (err.status(), err.to_payload())
            }
        },
        Err(err) => (err.status(), err.to_payload()),
    }
}
