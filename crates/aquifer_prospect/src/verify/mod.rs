//! Report fingerprints and re-derivation checks.

mod fingerprint;

pub use fingerprint::{
    normalize_for_hash, report_fingerprint, verify_report, VerificationResult, VerifyError,
};
