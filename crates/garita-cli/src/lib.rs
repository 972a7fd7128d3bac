//! # garita-cli — CLI Tool for the Garita ANPR Platform
//!
//! Provides the `garita` command-line interface: batch fixture generation
//! for demo dashboards and test environments, and one-shot validation of
//! RUT/plate strings.
//!
//! ## Subcommands
//!
//! - `garita fixtures` — Print generated companies, plates, and capture
//!   events, as a table or as JSON lines.
//! - `garita check` — Validate a RUT or license-plate string; exits
//!   nonzero on an invalid value.
//!
//! ```bash
//! garita fixtures --companies 5 --plates 20 --seed 7
//! garita fixtures --events 100 --json
//! garita check 30.686.957-4
//! garita check ABCD12
//! ```

pub mod check;
pub mod fixtures;
