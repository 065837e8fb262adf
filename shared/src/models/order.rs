//! Order Model

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Order lifecycle status
///
/// The usual progression is Pending → InProgress → Served → Paid, but
/// callers may jump straight to any status. Paid is terminal and is the
/// only transition with a table side effect (release).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Served,
    Paid,
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Paid)
    }
}

/// Order line, denormalized from the menu item at placement time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    /// Price in currency unit, as snapshotted when added to the cart
    pub price: f64,
    pub qty: i32,
}

/// Order entity
///
/// Immutable after placement except for `status`; `total` is fixed at
/// creation and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub table_id: i64,
    /// Denormalized table name for display
    pub table_name: String,
    pub items: Vec<OrderItem>,
    /// Total amount in currency unit, summed from the lines at creation
    pub total: f64,
    pub status: OrderStatus,
    /// Creation time (Unix milliseconds)
    pub created_at: Timestamp,
}
