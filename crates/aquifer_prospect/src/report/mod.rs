//! Prospect report: the scored body plus location and generation time.

mod query;

pub use query::{parse_time_rfc3339, LocationQuery, QueryError};

use crate::score::{score, ProspectScore};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("format report time: {0}")]
    Time(#[from] time::error::Format),
}

/// Report returned for an analyzed location. JSON field set:
/// `location, reportTime, verdict, estimatedDepth, estimatedYield, recommendedTechnique, qualityNote`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProspectReport {
    pub location: String,
    /// RFC 3339 UTC generation time. Not derived from the location.
    pub report_time: String,
    #[serde(flatten)]
    pub score: ProspectScore,
}

impl ProspectReport {
    /// Score `location` and stamp the report with `now`.
    pub fn generate(location: &str, now: OffsetDateTime) -> Result<Self, ReportError> {
        let report_time = now.to_offset(time::UtcOffset::UTC).format(&Rfc3339)?;
        Ok(Self {
            location: location.to_string(),
            report_time,
            score: score(location),
        })
    }

    pub fn now(location: &str) -> Result<Self, ReportError> {
        Self::generate(location, OffsetDateTime::now_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::{QualityNote, Technique, Verdict};
    use time::macros::datetime;

    #[test]
    fn generate_fixed_time() {
        let report =
            ProspectReport::generate("Shirur, Pune", datetime!(2026-01-15 10:30:00 UTC)).unwrap();
        assert_eq!(report.location, "Shirur, Pune");
        assert_eq!(report.report_time, "2026-01-15T10:30:00Z");
        assert_eq!(report.score.verdict, Verdict::Caution);
    }

    #[test]
    fn report_time_normalized_to_utc() {
        let report =
            ProspectReport::generate("x", datetime!(2026-01-15 16:00:00 +5:30)).unwrap();
        assert_eq!(report.report_time, "2026-01-15T10:30:00Z");
    }

    #[test]
    fn json_field_set() {
        let report = ProspectReport::generate("", datetime!(2026-01-15 0:00 UTC)).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "estimatedDepth",
                "estimatedYield",
                "location",
                "qualityNote",
                "recommendedTechnique",
                "reportTime",
                "verdict"
            ]
        );
        assert_eq!(obj["verdict"], "go");
        assert_eq!(obj["estimatedDepth"], 10);
        assert_eq!(obj["estimatedYield"], 800);
        assert_eq!(obj["recommendedTechnique"], "rotary");
        assert_eq!(obj["qualityNote"], "high-salinity");
    }

    #[test]
    fn parse_back() {
        let json = r#"{"location":"a","reportTime":"2026-01-15T00:00:00Z","verdict":"no-go",
            "estimatedDepth":47,"estimatedYield":744,"recommendedTechnique":"percussion+casing",
            "qualityNote":"typical"}"#;
        let report: ProspectReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.score.recommended_technique, Technique::PercussionCasing);
        assert_eq!(report.score.quality_note, QualityNote::Typical);
        assert_eq!(report.score, score("a"));
    }
}
