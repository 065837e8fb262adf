//! Reservation Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reservation status (no further lifecycle is modeled yet)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Upcoming,
}

/// Reservation entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub customer: String,
    /// Reserved moment (RFC 3339 on the wire)
    pub when: DateTime<Utc>,
    pub party_size: i32,
    pub status: ReservationStatus,
}

/// Create reservation payload
///
/// The view combines its separate date and time inputs into the single
/// `when` instant before handing the payload over.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreate {
    pub customer: String,
    pub when: DateTime<Utc>,
    pub party_size: i32,
}
