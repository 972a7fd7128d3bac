//! # Company Record Fixtures
//!
//! Composes the RUT generator with a fixed catalog of organization base
//! names and legal-form suffixes into realistic [`CompanyRecord`] values.

use garita_core::CompanyRecord;
use rand::Rng;

use crate::rut::company_rut;

/// Probability that a generated company is cleared for deliveries.
pub const ACTIVE_SHARE: f64 = 0.9;

/// Organization base names drawn for demo companies.
const BASE_NAMES: &[&str] = &[
    "Transportes Aconcagua",
    "Logística Austral",
    "Comercial El Roble",
    "Agrícola Santa Clara",
    "Distribuidora Los Andes",
    "Constructora Pacífico",
    "Forestal Bío Bío",
    "Minera Atacama Norte",
    "Pesquera Coral",
    "Importadora Central",
    "Servicios Portuarios Valparaíso",
    "Frigorífico del Sur",
];

/// Legal-form suffixes appended to the base name.
const LEGAL_SUFFIXES: &[&str] = &["S.A.", "SpA", "Ltda.", "EIRL"];

/// Generate a demo company record.
///
/// The tax identifier comes from [`company_rut`]; the name is a random
/// base-name/suffix combination; `active` is true with probability
/// [`ACTIVE_SHARE`].
pub fn company_record<R: Rng + ?Sized>(rng: &mut R) -> CompanyRecord {
    let base = BASE_NAMES[rng.gen_range(0..BASE_NAMES.len())];
    let suffix = LEGAL_SUFFIXES[rng.gen_range(0..LEGAL_SUFFIXES.len())];
    CompanyRecord {
        rut: company_rut(rng),
        name: format!("{base} {suffix}"),
        active: rng.gen_bool(ACTIVE_SHARE),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::rut::COMPANY_BODY_RANGE;

    #[test]
    fn names_compose_base_and_suffix() {
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..200 {
            let record = company_record(&mut rng);
            let (base, suffix) = record
                .name
                .rsplit_once(' ')
                .expect("name has a suffix separator");
            assert!(BASE_NAMES.contains(&base));
            assert!(LEGAL_SUFFIXES.contains(&suffix));
        }
    }

    #[test]
    fn tax_ids_come_from_the_company_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let record = company_record(&mut rng);
            assert!(COMPANY_BODY_RANGE.contains(&record.rut.body()));
        }
    }

    #[test]
    fn both_active_states_occur() {
        let mut rng = StdRng::seed_from_u64(12);
        let records: Vec<_> = (0..500).map(|_| company_record(&mut rng)).collect();
        assert!(records.iter().any(|r| r.active));
        assert!(records.iter().any(|r| !r.active));
    }
}
