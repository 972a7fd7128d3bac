//! # RUT Generators
//!
//! Draws numeric bodies from the two allocation ranges the tax authority
//! reserves (one for juridical entities, one for natural persons) and
//! derives the Module-11 verifier through `garita-core`, so every
//! generated identifier is checksum-correct by construction.

use std::ops::RangeInclusive;

use garita_core::Rut;
use rand::Rng;

/// Numeric-body allocation range for juridical entities (companies).
pub const COMPANY_BODY_RANGE: RangeInclusive<u32> = 76_000_000..=77_999_999;

/// Numeric-body allocation range for natural persons.
pub const PERSONAL_BODY_RANGE: RangeInclusive<u32> = 10_000_000..=25_999_999;

/// Generate a company RUT, uniform over [`COMPANY_BODY_RANGE`].
pub fn company_rut<R: Rng + ?Sized>(rng: &mut R) -> Rut {
    body_in(rng, COMPANY_BODY_RANGE)
}

/// Generate a personal RUT, uniform over [`PERSONAL_BODY_RANGE`].
pub fn personal_rut<R: Rng + ?Sized>(rng: &mut R) -> Rut {
    body_in(rng, PERSONAL_BODY_RANGE)
}

fn body_in<R: Rng + ?Sized>(rng: &mut R, range: RangeInclusive<u32>) -> Rut {
    let body = rng.gen_range(range);
    // Both allocation ranges are 8-digit subranges of the valid body domain.
    Rut::new(body).expect("allocation ranges lie within the valid body domain")
}
