//! Prospect fields derived from the location roll.

use crate::score::hash::roll;
use serde::{Deserialize, Serialize};
use std::fmt;

const GO_BELOW: u8 = 55;
const CAUTION_BELOW: u8 = 85;
const BASE_DEPTH_M: u32 = 10;
const DEPTH_SPAN_M: u8 = 60;
const YIELD_SPAN: u8 = 90;
const YIELD_STEP_L_PER_HR: i64 = 8;
/// Depths beyond this need a cased percussion bore.
const CASING_DEPTH_M: u32 = 45;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "go")]
    Go,
    #[serde(rename = "caution")]
    Caution,
    #[serde(rename = "no-go")]
    NoGo,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Go => "go",
            Verdict::Caution => "caution",
            Verdict::NoGo => "no-go",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Technique {
    #[serde(rename = "rotary")]
    Rotary,
    #[serde(rename = "percussion+casing")]
    PercussionCasing,
}

impl Technique {
    pub fn as_str(self) -> &'static str {
        match self {
            Technique::Rotary => "rotary",
            Technique::PercussionCasing => "percussion+casing",
        }
    }

    /// Human-readable label for reports.
    pub fn label(self) -> &'static str {
        match self {
            Technique::Rotary => "Rotary drilling",
            Technique::PercussionCasing => "Percussion + casing",
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityNote {
    #[serde(rename = "typical")]
    Typical,
    #[serde(rename = "moderate-hardness")]
    ModerateHardness,
    #[serde(rename = "high-salinity")]
    HighSalinity,
}

impl QualityNote {
    pub fn as_str(self) -> &'static str {
        match self {
            QualityNote::Typical => "typical",
            QualityNote::ModerateHardness => "moderate-hardness",
            QualityNote::HighSalinity => "high-salinity",
        }
    }

    /// Human-readable label for reports.
    pub fn label(self) -> &'static str {
        match self {
            QualityNote::Typical => "Typical regional quality",
            QualityNote::ModerateHardness => "Moderate hardness",
            QualityNote::HighSalinity => "High salinity (treatment advised)",
        }
    }
}

impl fmt::Display for QualityNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Report body derived from a location. Everything except the report time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProspectScore {
    pub verdict: Verdict,
    /// Meters, 10..=69.
    pub estimated_depth: u32,
    /// Litres per hour, multiple of 8 in 0..=800.
    pub estimated_yield: u32,
    pub recommended_technique: Technique,
    pub quality_note: QualityNote,
}

impl ProspectScore {
    /// Derive all fields from a roll in `0..100`.
    pub fn from_roll(r: u8) -> Self {
        let verdict = if r < GO_BELOW {
            Verdict::Go
        } else if r < CAUTION_BELOW {
            Verdict::Caution
        } else {
            Verdict::NoGo
        };
        let estimated_depth = BASE_DEPTH_M + u32::from(r % DEPTH_SPAN_M);
        let estimated_yield =
            ((100 - i64::from(r % YIELD_SPAN)) * YIELD_STEP_L_PER_HR).max(0) as u32;
        // mod-7 is checked first: 35 and 70 are salinity, not hardness.
        let quality_note = if r % 7 == 0 {
            QualityNote::HighSalinity
        } else if r % 5 == 0 {
            QualityNote::ModerateHardness
        } else {
            QualityNote::Typical
        };
        let recommended_technique = if estimated_depth > CASING_DEPTH_M {
            Technique::PercussionCasing
        } else {
            Technique::Rotary
        };
        Self {
            verdict,
            estimated_depth,
            estimated_yield,
            recommended_technique,
            quality_note,
        }
    }
}

/// Score a location. Total over any string, including the empty one.
pub fn score(location: &str) -> ProspectScore {
    ProspectScore::from_roll(roll(location))
}
