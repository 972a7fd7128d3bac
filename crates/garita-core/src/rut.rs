//! # RUT — National Tax Identifier
//!
//! Validated newtype for the RUT, the national tax identifier attached to
//! companies and drivers in gate-event metadata. A [`Rut`] stores the
//! numeric body plus its Module-11 verifier; the pair is consistent by
//! construction, so an identifier with a wrong verifier cannot exist as a
//! value of this type.
//!
//! ## Surface syntaxes
//!
//! Two input forms are accepted, mirroring how operators type them:
//!
//! - Compact: `76123456-0` (7–8 digits, hyphen, verifier)
//! - Thousands-grouped: `76.123.456-0`
//!
//! The verifier position accepts lowercase `k`; it is normalized to `'K'`
//! on construction. Canonical display is the compact form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checksum::check_digit;
use crate::error::ValidationError;

/// Smallest valid numeric body (7 digits).
pub const MIN_BODY: u32 = 1_000_000;

/// Largest valid numeric body (8 digits).
pub const MAX_BODY: u32 = 99_999_999;

/// A national tax identifier: numeric body plus Module-11 verifier.
///
/// The verifier always equals [`check_digit`] of the body. Construction
/// goes through [`Rut::new`] (from a numeric body) or [`Rut::parse`]
/// (from either surface syntax); both enforce the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rut {
    body: u32,
    verifier: char,
}

impl Rut {
    /// Build a RUT from its numeric body, deriving the verifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BodyOutOfRange`] if `body` is not a
    /// 7–8 digit number.
    pub fn new(body: u32) -> Result<Self, ValidationError> {
        if !(MIN_BODY..=MAX_BODY).contains(&body) {
            return Err(ValidationError::BodyOutOfRange(body));
        }
        Ok(Self {
            body,
            verifier: check_digit(body),
        })
    }

    /// Parse a RUT from either surface syntax, verifying the checksum.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidRutFormat`] if the string is not
    /// well-formed, or [`ValidationError::VerifierMismatch`] if the format
    /// is fine but the verifier does not match the body.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let (digits, found) =
            split_syntax(s).ok_or_else(|| ValidationError::InvalidRutFormat(s.to_string()))?;
        let body: u32 = digits
            .parse()
            .map_err(|_| ValidationError::InvalidRutFormat(s.to_string()))?;
        let expected = check_digit(body);
        let found = found.to_ascii_uppercase();
        if found != expected {
            return Err(ValidationError::VerifierMismatch {
                body,
                expected,
                found,
            });
        }
        Ok(Self {
            body,
            verifier: expected,
        })
    }

    /// Check whether a string is structurally a RUT, in either syntax.
    ///
    /// Purely syntactic and total: never errors, for any input including
    /// the empty string. A well-formed string can still carry a wrong
    /// verifier; use [`Rut::parse`] when full validity matters.
    pub fn is_well_formed(s: &str) -> bool {
        split_syntax(s).is_some()
    }

    /// The numeric body.
    pub fn body(&self) -> u32 {
        self.body
    }

    /// The verifier symbol, one of `0-9` or `K`.
    pub fn verifier(&self) -> char {
        self.verifier
    }

    /// Render the thousands-grouped form, e.g. `76.123.456-0`.
    pub fn formatted(&self) -> String {
        let digits = self.body.to_string();
        // Body is 7-8 digits by construction, so the split is in bounds.
        let (head, tail) = digits.split_at(digits.len() - 6);
        format!("{}.{}.{}-{}", head, &tail[..3], &tail[3..], self.verifier)
    }
}

/// Split a candidate string into its digit run and verifier character.
///
/// Returns `None` unless the input matches one of the two accepted
/// syntaxes exactly. The digit run is returned without separators; the
/// verifier is returned as typed (case not yet normalized).
fn split_syntax(s: &str) -> Option<(String, char)> {
    let (digits_part, verifier_part) = s.rsplit_once('-')?;

    let mut verifier_chars = verifier_part.chars();
    let verifier = match (verifier_chars.next(), verifier_chars.next()) {
        (Some(v), None) => v,
        _ => return None,
    };
    if !verifier.is_ascii_digit() && verifier != 'k' && verifier != 'K' {
        return None;
    }

    let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());

    if digits_part.contains('.') {
        // Thousands-grouped: 1-2 digits, then two groups of exactly 3.
        let mut groups = digits_part.split('.');
        let (millions, thousands, units) = (groups.next()?, groups.next()?, groups.next()?);
        if groups.next().is_some() {
            return None;
        }
        if !matches!(millions.len(), 1 | 2) || thousands.len() != 3 || units.len() != 3 {
            return None;
        }
        if !all_digits(millions) || !all_digits(thousands) || !all_digits(units) {
            return None;
        }
        Some((format!("{millions}{thousands}{units}"), verifier))
    } else {
        if !matches!(digits_part.len(), 7 | 8) || !all_digits(digits_part) {
            return None;
        }
        Some((digits_part.to_string(), verifier))
    }
}

impl fmt::Display for Rut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.body, self.verifier)
    }
}

impl FromStr for Rut {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Rut {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

// Deserializes as a plain `String`, then routes through `parse` so that
// invalid values are rejected at deserialization time — not silently
// accepted.
impl<'de> Deserialize<'de> for Rut {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
