//! Generator/validator round trips across the fixtures and core crates.
//!
//! Seeded RNGs keep these deterministic; the sample sizes are large enough
//! that the distribution checks would also hold for any reasonable seed.

use garita_core::{check_digit, LicensePlate, PlateFormat, Rut};
use garita_fixtures::{
    anpr_event, company_record, company_rut, legacy_plate, mixed_plate, modern_plate, personal_rut,
};
use garita_fixtures::plate::LEGACY_SHARE;
use garita_fixtures::rut::{COMPANY_BODY_RANGE, PERSONAL_BODY_RANGE};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SAMPLES: usize = 10_000;

#[test]
fn legacy_plates_always_validate() {
    let mut rng = StdRng::seed_from_u64(100);
    for _ in 0..SAMPLES {
        let plate = legacy_plate(&mut rng);
        assert!(LicensePlate::is_well_formed(plate.as_str()));
        assert_eq!(plate.format(), PlateFormat::Legacy);
    }
}

#[test]
fn modern_plates_always_validate() {
    let mut rng = StdRng::seed_from_u64(101);
    for _ in 0..SAMPLES {
        let plate = modern_plate(&mut rng);
        assert!(LicensePlate::is_well_formed(plate.as_str()));
        assert_eq!(plate.format(), PlateFormat::Modern);
    }
}

#[test]
fn company_ruts_rederive_their_verifier() {
    let mut rng = StdRng::seed_from_u64(102);
    for _ in 0..SAMPLES {
        let rut = company_rut(&mut rng);
        assert!(COMPANY_BODY_RANGE.contains(&rut.body()));
        assert_eq!(rut.verifier(), check_digit(rut.body()));
        // The rendered forms parse back to the same value.
        assert_eq!(Rut::parse(&rut.to_string()).unwrap(), rut);
        assert_eq!(Rut::parse(&rut.formatted()).unwrap(), rut);
    }
}

#[test]
fn personal_ruts_rederive_their_verifier() {
    let mut rng = StdRng::seed_from_u64(103);
    for _ in 0..SAMPLES {
        let rut = personal_rut(&mut rng);
        assert!(PERSONAL_BODY_RANGE.contains(&rut.body()));
        assert_eq!(rut.verifier(), check_digit(rut.body()));
    }
}

#[test]
fn mixed_plate_distribution_converges_to_legacy_share() {
    let mut rng = StdRng::seed_from_u64(104);
    let draws = 100_000;
    let legacy = (0..draws)
        .filter(|_| mixed_plate(&mut rng).format() == PlateFormat::Legacy)
        .count();
    let fraction = legacy as f64 / draws as f64;
    assert!(
        (fraction - LEGACY_SHARE).abs() < 0.015,
        "legacy fraction {fraction} strayed from {LEGACY_SHARE}"
    );
}

#[test]
fn company_records_are_internally_consistent() {
    let mut rng = StdRng::seed_from_u64(105);
    for _ in 0..1_000 {
        let record = company_record(&mut rng);
        assert!(COMPANY_BODY_RANGE.contains(&record.rut.body()));
        assert!(!record.name.is_empty());
    }
}

#[test]
fn events_attach_company_ruts_from_the_company_range() {
    let mut rng = StdRng::seed_from_u64(106);
    for _ in 0..1_000 {
        let event = anpr_event(&mut rng);
        if let Some(rut) = event.company {
            assert!(COMPANY_BODY_RANGE.contains(&rut.body()));
        }
    }
}
