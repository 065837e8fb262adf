//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Table occupancy status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
}

/// Dining table entity
///
/// Seeded once at first run; `status` and `current_order_id` are the
/// only fields that change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    pub id: i64,
    pub name: String,
    pub capacity: i32,
    pub status: TableStatus,
    pub current_order_id: Option<String>,
}

impl DiningTable {
    pub fn is_available(&self) -> bool {
        self.status == TableStatus::Available
    }
}
