//! aquifer_prospect — deterministic groundwater prospect reports.
//!
//! Maps free-text locations to a reproducible synthetic drilling report
//! (verdict, depth, yield, technique, quality) and serves it over HTTP.
//! The scoring is a placeholder: no geocoding or aquifer data is consulted.

pub mod report;
pub mod score;
pub mod server;
pub mod verify;

pub use report::{LocationQuery, ProspectReport, QueryError};
pub use score::{score, ProspectScore, QualityNote, Technique, Verdict};
pub use server::{router, serve, ServerConfig};
pub use verify::{report_fingerprint, verify_report, VerificationResult};
