//! # garita-fixtures — Test and Demo Data for the Garita ANPR Platform
//!
//! Randomized generators layered on the deterministic `garita-core`
//! primitives. Everything here is for seeding non-production fixtures:
//! demo dashboards, integration tests, load scripts. Nothing is memoized
//! or persisted.
//!
//! All generators take `&mut impl Rng`, so the caller owns the entropy
//! source — pass a seeded [`rand::rngs::StdRng`] for reproducible output,
//! or [`rand::thread_rng`] when reproducibility does not matter.
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let company = garita_fixtures::company::company_record(&mut rng);
//! assert!(company.name.len() > 3);
//! ```

pub mod company;
pub mod event;
pub mod plate;
pub mod rut;

pub use company::company_record;
pub use event::anpr_event;
pub use plate::{legacy_plate, mixed_plate, modern_plate};
pub use rut::{company_rut, personal_rut};
