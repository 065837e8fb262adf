use crate::storage::StorageError;
use thiserror::Error;

/// Domain store errors
///
/// Precondition failures are typed variants so callers decide whether
/// to warn, retry, or ignore. Collections are never left half-updated
/// by an operation that returns one of the domain variants.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Table not found: {0}")]
    TableNotFound(i64),

    #[error("Table is already occupied: {0}")]
    TableOccupied(i64),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    #[error("Reservation not found: {0}")]
    ReservationNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
