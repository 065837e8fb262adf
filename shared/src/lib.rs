//! Shared types for SmartDine
//!
//! Entity models, input payloads, and id/time utilities used by the
//! store crate and any UI shell linking against it.

pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
pub use types::Timestamp;
