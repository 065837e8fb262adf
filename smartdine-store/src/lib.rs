//! SmartDine Store - restaurant front-of-house state
//!
//! Embedded data store for a single-location restaurant: menu catalog,
//! table occupancy, orders, and reservations, persisted in redb and
//! hydrated once at startup. The store owns every cross-entity rule;
//! view layers read the collections and call the mutators, nothing
//! else touches persisted state.
//!
//! # Module Structure
//!
//! ```text
//! smartdine-store/src/
//! ├── storage.rs     # redb key-value backend
//! ├── cell.rs        # typed persistent slot, one per collection
//! ├── store/         # DineStore: collections + occupancy rules
//! ├── cart.rs        # transient order composition
//! ├── stats.rs       # dashboard projections
//! ├── money.rs       # decimal arithmetic and money validation
//! └── validation.rs  # input validation helpers
//! ```

pub mod cart;
pub mod cell;
pub mod money;
pub mod stats;
pub mod storage;
pub mod store;
pub mod validation;

// Re-export the types most callers need
pub use cart::Cart;
pub use cell::StateCell;
pub use stats::{DashboardStats, dashboard_stats, recent_orders, reservations_by_time};
pub use storage::{StateStorage, StorageError, StorageResult};
pub use store::{DineStore, StoreError, StoreResult};
