//! Deterministic prospect scoring: rolling hash and field derivation.

mod hash;
mod prospect;

pub use hash::{roll, rolling_hash};
pub use prospect::{score, ProspectScore, QualityNote, Technique, Verdict};
