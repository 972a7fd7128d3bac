//! # License-Plate Generators
//!
//! Uniform per-position sampling for both plate grammars, plus a mixed
//! generator weighted toward the legacy format to match what the cameras
//! actually see on the road.

use garita_core::LicensePlate;
use rand::Rng;

/// Probability that a mixed draw produces a legacy-format plate.
///
/// Models the prevalence of pre-2007 registrations in circulation; the
/// ratio is fixed so fixture distributions stay comparable over time.
pub const LEGACY_SHARE: f64 = 0.7;

/// Generate a legacy-format plate: three letters, three digits.
pub fn legacy_plate<R: Rng + ?Sized>(rng: &mut R) -> LicensePlate {
    build_plate(rng, 3, 3)
}

/// Generate a modern-format plate: four letters, two digits.
pub fn modern_plate<R: Rng + ?Sized>(rng: &mut R) -> LicensePlate {
    build_plate(rng, 4, 2)
}

/// Generate a plate in either grammar, legacy with probability
/// [`LEGACY_SHARE`].
pub fn mixed_plate<R: Rng + ?Sized>(rng: &mut R) -> LicensePlate {
    if rng.gen_bool(LEGACY_SHARE) {
        legacy_plate(rng)
    } else {
        modern_plate(rng)
    }
}

fn build_plate<R: Rng + ?Sized>(rng: &mut R, letters: usize, digits: usize) -> LicensePlate {
    let mut value = String::with_capacity(letters + digits);
    for _ in 0..letters {
        value.push(char::from(rng.gen_range(b'A'..=b'Z')));
    }
    for _ in 0..digits {
        value.push(char::from(rng.gen_range(b'0'..=b'9')));
    }
    LicensePlate::new(value).expect("generated string matches a plate grammar")
}
