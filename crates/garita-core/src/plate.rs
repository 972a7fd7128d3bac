//! # License Plates
//!
//! Validated newtype for vehicle registration plates as read by the gate
//! cameras. Two disjoint grammars are in circulation and both are exactly
//! six characters:
//!
//! - [`PlateFormat::Legacy`]: three uppercase letters, three digits
//!   (`ABC123`) — pre-2007 registrations.
//! - [`PlateFormat::Modern`]: four uppercase letters, two digits
//!   (`ABCD12`) — 2007-onward registrations.
//!
//! Matching is full-string, uppercase-only, with no separators tolerated;
//! anything else is rejected. The format is classified once at
//! construction and carried with the value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The registration grammar a plate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateFormat {
    /// Three letters followed by three digits (pre-2007).
    Legacy,
    /// Four letters followed by two digits (2007 onward).
    Modern,
}

impl PlateFormat {
    /// Returns the snake_case string identifier for this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Modern => "modern",
        }
    }
}

impl fmt::Display for PlateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vehicle registration plate in one of the two accepted grammars.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LicensePlate {
    value: String,
    format: PlateFormat,
}

impl LicensePlate {
    /// Create a plate from a string, validating and classifying it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPlate`] if the string matches
    /// neither grammar.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        match classify(&value) {
            Some(format) => Ok(Self { value, format }),
            None => Err(ValidationError::InvalidPlate(value)),
        }
    }

    /// Check whether a string matches one of the two plate grammars.
    ///
    /// Total: never errors, for any input including the empty string.
    pub fn is_well_formed(s: &str) -> bool {
        classify(s).is_some()
    }

    /// The plate string.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The grammar this plate was classified into.
    pub fn format(&self) -> PlateFormat {
        self.format
    }
}

/// Classify a candidate string into a plate format, if it matches one.
///
/// The grammars are disjoint (a six-character string cannot have both
/// exactly three and exactly four leading letters), so at most one format
/// can match.
fn classify(s: &str) -> Option<PlateFormat> {
    let bytes = s.as_bytes();
    if bytes.len() != 6 {
        return None;
    }
    let letters = bytes.iter().take_while(|b| b.is_ascii_uppercase()).count();
    match letters {
        3 if bytes[3..].iter().all(u8::is_ascii_digit) => Some(PlateFormat::Legacy),
        4 if bytes[4..].iter().all(u8::is_ascii_digit) => Some(PlateFormat::Modern),
        _ => None,
    }
}

impl fmt::Display for LicensePlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for LicensePlate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for LicensePlate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

// Deserializes as a plain `String`, then routes through `new` so that
// invalid values are rejected at deserialization time — not silently
// accepted.
impl<'de> Deserialize<'de> for LicensePlate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_legacy_grammar() {
        let plate = LicensePlate::new("ABC123").unwrap();
        assert_eq!(plate.format(), PlateFormat::Legacy);
        assert_eq!(plate.as_str(), "ABC123");
    }

    #[test]
    fn accepts_modern_grammar() {
        let plate = LicensePlate::new("ABCD12").unwrap();
        assert_eq!(plate.format(), PlateFormat::Modern);
    }

    #[test]
    fn leading_zeros_are_fine() {
        assert_eq!(
            LicensePlate::new("XYZ007").unwrap().format(),
            PlateFormat::Legacy
        );
        assert_eq!(
            LicensePlate::new("WXYZ00").unwrap().format(),
            PlateFormat::Modern
        );
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert!(!LicensePlate::is_well_formed("AB123"));
        assert!(!LicensePlate::is_well_formed("ABCDE12"));
        assert!(!LicensePlate::is_well_formed(""));
        assert!(!LicensePlate::is_well_formed("ABC1234"));
    }

    #[test]
    fn rejects_wrong_letter_digit_split() {
        assert!(!LicensePlate::is_well_formed("ABC12A"));
        assert!(!LicensePlate::is_well_formed("123ABC"));
        assert!(!LicensePlate::is_well_formed("AB1234"));
        assert!(!LicensePlate::is_well_formed("ABCDE1"));
        assert!(!LicensePlate::is_well_formed("ABCDEF"));
        assert!(!LicensePlate::is_well_formed("123456"));
    }

    #[test]
    fn rejects_lowercase_and_separators() {
        assert!(!LicensePlate::is_well_formed("abc123"));
        assert!(!LicensePlate::is_well_formed("Abc123"));
        assert!(!LicensePlate::is_well_formed("AB-123"));
        assert!(!LicensePlate::is_well_formed("ABC 12"));
    }

    #[test]
    fn rejects_non_ascii() {
        assert!(!LicensePlate::is_well_formed("ÁBC123"));
        assert!(!LicensePlate::is_well_formed("ABC12³"));
    }

    #[test]
    fn grammars_are_disjoint() {
        // Every accepted string classifies into exactly one format, so
        // membership in one grammar excludes the other.
        for (input, expected) in [
            ("ABC123", PlateFormat::Legacy),
            ("ZZZZ99", PlateFormat::Modern),
        ] {
            assert_eq!(LicensePlate::new(input).unwrap().format(), expected);
        }
    }

    #[test]
    fn display_and_from_str() {
        let plate: LicensePlate = "GHJK34".parse().unwrap();
        assert_eq!(plate.to_string(), "GHJK34");
        assert!("gh jk34".parse::<LicensePlate>().is_err());
    }

    #[test]
    fn format_display_names() {
        assert_eq!(PlateFormat::Legacy.as_str(), "legacy");
        assert_eq!(PlateFormat::Modern.to_string(), "modern");
    }

    #[test]
    fn serde_roundtrip() {
        let plate = LicensePlate::new("ABCD12").unwrap();
        let json = serde_json::to_string(&plate).unwrap();
        assert_eq!(json, "\"ABCD12\"");
        let back: LicensePlate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plate);
        assert_eq!(back.format(), PlateFormat::Modern);
    }

    #[test]
    fn serde_rejects_invalid_payloads() {
        assert!(serde_json::from_str::<LicensePlate>("\"abc123\"").is_err());
        assert!(serde_json::from_str::<LicensePlate>("\"ABC12\"").is_err());
    }
}
