//! SHA-256 fingerprint over the location-derived part of a report.

use crate::report::ProspectReport;
use crate::score::score;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Excluded from the fingerprint: it is wall-clock, not derived.
const TIME_FIELD: &str = "reportTime";

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("serialize: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Normalize JSON for hashing: sort keys and no whitespace.
pub fn normalize_for_hash(value: &serde_json::Value) -> Result<String, VerifyError> {
    let sorted = sort_json_keys(value);
    Ok(serde_json::to_string(&sorted)?)
}

fn sort_json_keys(v: &serde_json::Value) -> serde_json::Value {
    match v {
        serde_json::Value::Object(m) => {
            let out: std::collections::BTreeMap<String, serde_json::Value> = m
                .iter()
                .map(|(k, v)| (k.clone(), sort_json_keys(v)))
                .collect();
            serde_json::Value::Object(serde_json::Map::from_iter(out))
        }
        serde_json::Value::Array(arr) => {
            serde_json::Value::Array(arr.iter().map(sort_json_keys).collect())
        }
        other => other.clone(),
    }
}

/// SHA-256 (hex) over the normalized report with `reportTime` removed.
/// Same location text, same fingerprint.
pub fn report_fingerprint(report: &ProspectReport) -> Result<String, VerifyError> {
    let mut json = serde_json::to_value(report)?;
    if let serde_json::Value::Object(m) = &mut json {
        m.remove(TIME_FIELD);
    }
    let normalized = normalize_for_hash(&json)?;
    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerificationResult {
    pub location: String,
    /// Fingerprint of the report as given.
    pub fingerprint: String,
    /// Fingerprint of a fresh score of the same location.
    pub expected_fingerprint: String,
    pub matches: bool,
    /// JSON names of body fields that differ from a fresh score.
    pub mismatched_fields: Vec<String>,
}

/// Re-score `report.location` and compare against the report's body.
pub fn verify_report(report: &ProspectReport) -> Result<VerificationResult, VerifyError> {
    let expected = score(&report.location);
    let got = &report.score;
    let mut mismatched_fields = Vec::new();
    if got.verdict != expected.verdict {
        mismatched_fields.push("verdict".to_string());
    }
    if got.estimated_depth != expected.estimated_depth {
        mismatched_fields.push("estimatedDepth".to_string());
    }
    if got.estimated_yield != expected.estimated_yield {
        mismatched_fields.push("estimatedYield".to_string());
    }
    if got.recommended_technique != expected.recommended_technique {
        mismatched_fields.push("recommendedTechnique".to_string());
    }
    if got.quality_note != expected.quality_note {
        mismatched_fields.push("qualityNote".to_string());
    }
    let fingerprint = report_fingerprint(report)?;
    let expected_fingerprint = report_fingerprint(&ProspectReport {
        score: expected,
        ..report.clone()
    })?;
    Ok(VerificationResult {
        location: report.location.clone(),
        matches: mismatched_fields.is_empty() && fingerprint == expected_fingerprint,
        fingerprint,
        expected_fingerprint,
        mismatched_fields,
    })
}
