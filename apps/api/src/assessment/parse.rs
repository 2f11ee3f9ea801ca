use serde_json::Value;
use thiserror::Error;

use crate::models::recommendation::{CareerEntry, RecommendationPayload};

#[derive(Debug, Error)]
pub enum ParseError {
    /// The model output is not a JSON document at all. The raw text is
    /// preserved for server-side diagnostics and never shown to the caller.
    #[error("model response is not valid JSON: {source}")]
    Malformed {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("model response violates the recommendation schema: {0}")]
    SchemaViolation(String),
}

/// Parses and validates raw model output into a recommendation payload.
///
/// Accepts fenced or unfenced input. Top-level shape (non-empty `analysis`,
/// non-empty `careers` array) is strict; per-career leniency follows
/// [`CareerEntry`]: hard-required fields reject the document, soft fields
/// default. No partial result is ever returned.
pub fn parse_recommendation(raw: &str) -> Result<RecommendationPayload, ParseError> {
    let text = strip_code_fences(raw);

    let document: Value = serde_json::from_str(text).map_err(|source| ParseError::Malformed {
        raw: raw.to_string(),
        source,
    })?;

    let analysis = document
        .get("analysis")
        .and_then(Value::as_str)
        .ok_or_else(|| ParseError::SchemaViolation("missing 'analysis' string".to_string()))?;
    if analysis.is_empty() {
        return Err(ParseError::SchemaViolation(
            "'analysis' must be a non-empty string".to_string(),
        ));
    }

    let careers_value = document
        .get("careers")
        .and_then(Value::as_array)
        .ok_or_else(|| ParseError::SchemaViolation("missing 'careers' array".to_string()))?;
    if careers_value.is_empty() {
        return Err(ParseError::SchemaViolation(
            "'careers' array is empty".to_string(),
        ));
    }

    let careers = careers_value
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<CareerEntry>(entry.clone())
                .map_err(|e| ParseError::SchemaViolation(format!("career entry {index}: {e}")))
        })
        .collect::<Result<Vec<CareerEntry>, ParseError>>()?;

    Ok(RecommendationPayload {
        analysis: analysis.to_string(),
        careers,
    })
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
/// Unfenced input passes through untouched, so stripping is idempotent.
fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let body = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .map(str::trim_start);
    match body {
        Some(inner) => inner.strip_suffix("```").map(str::trim).unwrap_or(inner),
        None => text,
    }
}
