//! Core types for narration quality evaluation.
//!
//! Everything here is plain data: the engine is a pure function from
//! (narration text, location facts, mode) to an [`EvaluationResult`].
//! Nothing has identity beyond structural equality and nothing is
//! persisted by this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A resident of a location, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resident {
    pub name: String,
    pub species: String,
    pub status: String,
}

/// The factual record a narration is checked against.
///
/// Supplied by the caller, read-only for the duration of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,

    /// Location category, e.g. "Planet" or "Space station".
    #[serde(rename = "type")]
    pub kind: String,

    pub dimension: String,

    #[serde(default)]
    pub residents: Vec<Resident>,
}

impl Location {
    /// Convenience constructor for a location without residents.
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        dimension: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            dimension: dimension.into(),
            residents: Vec::new(),
        }
    }
}

/// The three sub-scores the deterministic evaluator produces on its own.
///
/// Creativity is not here: it comes either from the LLM judge or from a
/// local estimate, depending on the evaluation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeuristicScores {
    pub factual_consistency: u8,
    pub tone_match: u8,
    pub completeness: u8,
}

/// All four sub-scores plus the weighted overall score.
///
/// Every field is an integer in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    pub factual_consistency: u8,
    pub tone_match: u8,
    pub creativity: u8,
    pub completeness: u8,
    pub overall: u8,
}

/// Final output of one evaluation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub scores: Scores,
    pub feedback: String,
    pub timestamp: DateTime<Utc>,
}

/// Evaluation profile: whether the LLM judge path may be attempted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationMode {
    /// Heuristic scorers only. Never touches the text-generation capability.
    Quick,

    /// Heuristic scorers plus the LLM judge for creativity and feedback.
    #[default]
    Full,
}

impl std::fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvaluationMode::Quick => write!(f, "quick"),
            EvaluationMode::Full => write!(f, "full"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_type_field_rename() {
        let json = r#"{
            "name": "Citadel of Ricks",
            "type": "Space station",
            "dimension": "unknown",
            "residents": [{"name": "Rick D-99", "species": "Human", "status": "Alive"}]
        }"#;

        let location: Location = serde_json::from_str(json).unwrap();
        assert_eq!(location.kind, "Space station");
        assert_eq!(location.residents.len(), 1);

        let back = serde_json::to_value(&location).unwrap();
        assert_eq!(back["type"], "Space station");
    }

    #[test]
    fn test_location_residents_default_empty() {
        let json = r#"{"name": "Earth", "type": "Planet", "dimension": "C-137"}"#;
        let location: Location = serde_json::from_str(json).unwrap();
        assert!(location.residents.is_empty());
    }

    #[test]
    fn test_scores_serialize_camel_case() {
        let scores = Scores {
            factual_consistency: 40,
            tone_match: 80,
            creativity: 50,
            completeness: 52,
            overall: 57,
        };

        let value = serde_json::to_value(scores).unwrap();
        assert_eq!(value["factualConsistency"], 40);
        assert_eq!(value["toneMatch"], 80);
        assert_eq!(value["overall"], 57);
    }

    #[test]
    fn test_mode_wire_format() {
        assert_eq!(
            serde_json::from_str::<EvaluationMode>(r#""quick""#).unwrap(),
            EvaluationMode::Quick
        );
        assert_eq!(
            serde_json::to_string(&EvaluationMode::Full).unwrap(),
            r#""full""#
        );
    }

    #[test]
    fn test_mode_defaults_to_full() {
        assert_eq!(EvaluationMode::default(), EvaluationMode::Full);
    }

    #[test]
    fn test_result_timestamp_is_iso8601() {
        let result = EvaluationResult {
            scores: Scores {
                factual_consistency: 0,
                tone_match: 0,
                creativity: 0,
                completeness: 0,
                overall: 0,
            },
            feedback: "ok".to_string(),
            timestamp: Utc::now(),
        };

        let value = serde_json::to_value(&result).unwrap();
        let ts = value["timestamp"].as_str().unwrap();
        assert!(ts.contains('T'));
        assert!(DateTime::parse_from_rfc3339(ts).is_ok());
    }
}
