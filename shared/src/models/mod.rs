//! Data models
//!
//! Shared between the store crate and any UI shell.
//! Serialized field names follow the persisted JSON layout (camelCase),
//! so stored collections round-trip byte-compatibly across sessions.
//! Table IDs are `i64`; all other entity IDs are opaque strings.

pub mod dining_table;
pub mod menu_item;
pub mod order;
pub mod reservation;

// Re-exports
pub use dining_table::*;
pub use menu_item::*;
pub use order::*;
pub use reservation::*;
