//! Incoming analyze request and boundary validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("location required")]
    MissingInput,
    #[error("invalid time: {0}")]
    InvalidTime(String),
}

/// Body of an analyze request: `{ location, timestamp? }`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationQuery {
    #[serde(default)]
    pub location: Option<String>,
    /// Client-side submission time. Never affects scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl LocationQuery {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            timestamp: None,
        }
    }

    /// The location as received, or `MissingInput` when absent or blank.
    pub fn validated_location(&self) -> Result<&str, QueryError> {
        match self.location.as_deref() {
            Some(loc) if !loc.trim().is_empty() => Ok(loc),
            _ => Err(QueryError::MissingInput),
        }
    }

    /// Parsed client timestamp; `None` when absent or not RFC 3339.
    pub fn client_time(&self) -> Option<OffsetDateTime> {
        self.timestamp
            .as_deref()
            .and_then(|s| parse_time_rfc3339(s).ok())
    }
}

/// Parse an RFC 3339 timestamp (the format browsers emit from `toISOString`).
pub fn parse_time_rfc3339(s: &str) -> Result<OffsetDateTime, QueryError> {
    OffsetDateTime::parse(s.trim(), &Rfc3339).map_err(|e| QueryError::InvalidTime(e.to_string()))
}
