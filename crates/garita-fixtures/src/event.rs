//! # Capture-Event Fixtures
//!
//! Generates realistic [`AnprEvent`] values: a plate from the mixed
//! generator, a lane from the site catalog, a capture timestamp inside the
//! trailing 24 hours, and usually an attached company RUT.

use chrono::{Duration, Utc};
use garita_core::{AnprEvent, EventId};
use rand::Rng;

use crate::plate::mixed_plate;
use crate::rut::company_rut;

/// Probability that a generated event already has a company attached.
///
/// The remainder models captures still waiting for staff review.
pub const ATTACHED_SHARE: f64 = 0.8;

/// Capture window, in seconds, backward from now.
const CAPTURE_WINDOW_SECS: i64 = 24 * 60 * 60;

/// Lanes and gates of the demo site.
const LANES: &[&str] = &[
    "acceso-norte",
    "acceso-sur",
    "anden-1",
    "anden-2",
    "romana",
];

/// Generate a demo capture event.
pub fn anpr_event<R: Rng + ?Sized>(rng: &mut R) -> AnprEvent {
    let seconds_back = rng.gen_range(0..CAPTURE_WINDOW_SECS);
    AnprEvent {
        id: EventId::new(),
        plate: mixed_plate(rng),
        lane: LANES[rng.gen_range(0..LANES.len())].to_string(),
        captured_at: Utc::now() - Duration::seconds(seconds_back),
        company: rng
            .gen_bool(ATTACHED_SHARE)
            .then(|| company_rut(rng)),
    }
}
