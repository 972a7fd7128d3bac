//! # garita-core — Foundational Types for the Garita ANPR Platform
//!
//! This crate is the bedrock of the Garita stack. It defines the validated
//! domain primitives that every other crate in the workspace builds on; it
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** [`Rut`] and
//!    [`LicensePlate`] are newtypes with validated constructors. No bare
//!    strings for identifiers.
//!
//! 2. **Checksum-correct by construction.** A [`Rut`] value always carries
//!    the verifier symbol derived from its body via [`check_digit`]; a
//!    mismatched pair cannot be constructed, parsed, or deserialized.
//!
//! 3. **Total validation predicates.** `Rut::is_well_formed` and
//!    `LicensePlate::is_well_formed` accept arbitrary strings and never
//!    error, so callers can use them as unconditional guards.
//!
//! 4. **Generation lives elsewhere.** This crate is fully deterministic;
//!    randomized fixture generation is layered on top in `garita-fixtures`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `garita-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod checksum;
pub mod error;
pub mod plate;
pub mod record;
pub mod rut;

// Re-export primary types for ergonomic imports.
pub use checksum::check_digit;
pub use error::ValidationError;
pub use plate::{LicensePlate, PlateFormat};
pub use record::{AnprEvent, CompanyRecord, EventId};
pub use rut::Rut;
