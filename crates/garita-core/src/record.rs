//! # Record Value Types
//!
//! The value objects the dashboard layer exchanges: a company known to the
//! gate operators, and a single ANPR capture event. Both are plain serde
//! values with no identity beyond their fields and no mutation lifecycle:
//! they are produced (by the API layer or the fixture generators) and
//! consumed immediately.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::plate::LicensePlate;
use crate::rut::Rut;

/// Unique identifier for a plate-capture event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(Uuid);

impl EventId {
    /// Create a new random event identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an event identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A company registered with the site, keyed by its tax identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// The company's tax identifier.
    pub rut: Rut,
    /// Registered business name, including the legal-form suffix.
    pub name: String,
    /// Whether the company is currently cleared for deliveries.
    pub active: bool,
}

/// A single plate capture produced by a gate camera.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnprEvent {
    /// Unique event identifier.
    pub id: EventId,
    /// The plate as recognized by the camera.
    pub plate: LicensePlate,
    /// The lane or gate that produced the capture.
    pub lane: String,
    /// Capture timestamp, UTC.
    pub captured_at: DateTime<Utc>,
    /// Company attached by staff during review; absent until then.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<Rut>,
}
