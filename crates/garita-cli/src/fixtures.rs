//! # Fixtures Subcommand
//!
//! Batch demo-data driver: prints generated companies, plates, and capture
//! events. Lives here, outside the library crates, so the generators stay
//! free of console concerns.

use anyhow::Result;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use garita_fixtures::{anpr_event, company_record, mixed_plate};

/// Arguments for the `garita fixtures` subcommand.
#[derive(Args, Debug)]
pub struct FixturesArgs {
    /// Number of company records to generate.
    #[arg(long, default_value_t = 10)]
    pub companies: usize,

    /// Number of license plates to generate (mixed formats).
    #[arg(long, default_value_t = 10)]
    pub plates: usize,

    /// Number of capture events to generate.
    #[arg(long, default_value_t = 10)]
    pub events: usize,

    /// RNG seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit one JSON object per line instead of the table form.
    #[arg(long)]
    pub json: bool,
}

/// Execute the fixtures subcommand.
pub fn run_fixtures(args: &FixturesArgs) -> Result<u8> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    tracing::debug!(
        companies = args.companies,
        plates = args.plates,
        events = args.events,
        seeded = args.seed.is_some(),
        "generating fixtures"
    );

    if !args.json && args.companies > 0 {
        println!("companies:");
    }
    for _ in 0..args.companies {
        let record = company_record(&mut rng);
        if args.json {
            println!("{}", serde_json::to_string(&record)?);
        } else {
            let state = if record.active { "active" } else { "inactive" };
            println!("  {:<13} {:<9} {}", record.rut.formatted(), state, record.name);
        }
    }

    if !args.json && args.plates > 0 {
        println!("plates:");
    }
    for _ in 0..args.plates {
        let plate = mixed_plate(&mut rng);
        if args.json {
            println!(
                "{}",
                serde_json::json!({
                    "plate": plate.as_str(),
                    "format": plate.format().as_str(),
                })
            );
        } else {
            println!("  {}  {}", plate.as_str(), plate.format());
        }
    }

    if !args.json && args.events > 0 {
        println!("events:");
    }
    for _ in 0..args.events {
        let event = anpr_event(&mut rng);
        if args.json {
            println!("{}", serde_json::to_string(&event)?);
        } else {
            let company = event
                .company
                .map(|rut| rut.formatted())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  {}  {:<12} {}  {}",
                event.captured_at.format("%Y-%m-%dT%H:%M:%SZ"),
                event.lane,
                event.plate,
                company
            );
        }
    }

    Ok(0)
}
