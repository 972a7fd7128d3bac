//! # Check Subcommand
//!
//! One-shot validation of a RUT or license-plate string, mirroring the
//! guards the API layer runs before persisting operator input.

use anyhow::Result;
use clap::Args;

use garita_core::{LicensePlate, Rut};

/// Arguments for the `garita check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Value to validate: a RUT in either syntax, or a license plate.
    pub value: String,
}

/// Execute the check subcommand.
///
/// Returns exit code 0 for a valid value, 1 for an invalid one. Errors are
/// reported on stdout rather than via `Err` so a bad input string is an
/// expected outcome, not a failure of the tool itself.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let value = args.value.trim();

    if Rut::is_well_formed(value) {
        return match Rut::parse(value) {
            Ok(rut) => {
                println!("valid RUT: {} (verifier '{}')", rut.formatted(), rut.verifier());
                Ok(0)
            }
            Err(err) => {
                println!("invalid RUT: {err}");
                Ok(1)
            }
        };
    }

    match LicensePlate::new(value) {
        Ok(plate) => {
            println!("valid plate: {} ({} format)", plate, plate.format());
            Ok(0)
        }
        Err(_) => {
            println!("'{value}' is neither a well-formed RUT nor a license plate");
            Ok(1)
        }
    }
}
