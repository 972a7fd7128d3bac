//! # Error Types
//!
//! Validation errors for the Garita domain primitives. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations and
//! carry the offending input so call sites can report it without extra
//! plumbing.

use thiserror::Error;

/// Validation failure for a Garita domain identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The string matches neither accepted RUT surface syntax.
    #[error("invalid RUT format: '{0}'")]
    InvalidRutFormat(String),

    /// The RUT is well-formed but its verifier does not match the body.
    #[error("RUT verifier mismatch for body {body}: expected '{expected}', got '{found}'")]
    VerifierMismatch {
        /// The numeric body of the rejected identifier.
        body: u32,
        /// The verifier the Module-11 computation yields for `body`.
        expected: char,
        /// The verifier the input actually carried.
        found: char,
    },

    /// The numeric body is outside the 7–8 digit range.
    #[error("RUT body out of range: {0} (expected 7 or 8 decimal digits)")]
    BodyOutOfRange(u32),

    /// The string matches neither license-plate grammar.
    #[error("invalid license plate: '{0}'")]
    InvalidPlate(String),
}
