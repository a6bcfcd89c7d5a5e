//! Command-line narration quality evaluation.
//!
//! Reads a narration (file or stdin) and a location record (JSON or YAML),
//! runs an evaluation, and prints the response as JSON. When full mode is
//! requested without an `OPENAI_API_KEY` in the environment, the run
//! degrades to heuristic scoring and says so in the feedback.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use critique_core::{EvaluationMode, Location};
use critique_runtime::{
    handle_evaluate, EvaluateRequest, Evaluator, GenerationConfig, JudgeEvaluator, OpenAiProvider,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Quick,
    Full,
}

impl From<ModeArg> for EvaluationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Quick => EvaluationMode::Quick,
            ModeArg::Full => EvaluationMode::Full,
        }
    }
}

/// Score an in-character narration against a location record.
#[derive(Debug, Parser)]
#[command(name = "critique", version, about)]
struct Args {
    /// Narration text file, or '-' to read from stdin
    #[arg(long, default_value = "-")]
    narration: PathBuf,

    /// Location record file (.json, .yaml or .yml)
    #[arg(long)]
    location: PathBuf,

    /// Evaluation mode
    #[arg(long, value_enum, default_value = "full")]
    mode: ModeArg,

    /// Judge model identifier
    #[arg(long, default_value = "gpt-4o-mini")]
    model: String,

    /// Judge request timeout
    #[arg(long, default_value = "15s", value_parser = humantime::parse_duration)]
    timeout: Duration,

    /// Pretty-print the JSON response
    #[arg(long)]
    pretty: bool,
}

fn read_narration(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading narration from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading narration file {}", path.display()))
    }
}

fn read_location(path: &Path) -> Result<Location> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading location file {}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

    if is_yaml {
        serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing YAML location record {}", path.display()))
    } else {
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing JSON location record {}", path.display()))
    }
}

fn build_evaluator(args: &Args) -> Evaluator {
    if !matches!(args.mode, ModeArg::Full) {
        return Evaluator::heuristic_only();
    }

    match OpenAiProvider::from_env() {
        Ok(provider) => {
            let config = GenerationConfig {
                model: args.model.clone(),
                timeout: args.timeout,
                ..GenerationConfig::default()
            };
            Evaluator::new(Some(JudgeEvaluator::new(Arc::new(provider)).with_config(config)))
        }
        Err(e) => {
            warn!(error = %e, "no judge credential, degrading to heuristic scoring");
            Evaluator::heuristic_only()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let narration = read_narration(&args.narration)?;
    let location = read_location(&args.location)?;
    let evaluator = build_evaluator(&args);

    let request = EvaluateRequest {
        narration,
        location,
        mode: Some(args.mode.into()),
    };

    let response = handle_evaluate(&evaluator, request).await?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{json}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["critique", "--location", "loc.json"]);
        assert!(matches!(args.mode, ModeArg::Full));
        assert_eq!(args.model, "gpt-4o-mini");
        assert_eq!(args.timeout, Duration::from_secs(15));
        assert_eq!(args.narration.as_os_str(), "-");
    }

    #[test]
    fn test_args_parse_mode_and_timeout() {
        let args = Args::parse_from([
            "critique",
            "--location",
            "loc.yaml",
            "--mode",
            "quick",
            "--timeout",
            "2s",
        ]);
        assert!(matches!(args.mode, ModeArg::Quick));
        assert_eq!(args.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_quick_mode_builds_heuristic_evaluator() {
        let args = Args::parse_from(["critique", "--location", "loc.json", "--mode", "quick"]);
        let evaluator = build_evaluator(&args);
        assert!(!evaluator.has_judge());
    }
}
