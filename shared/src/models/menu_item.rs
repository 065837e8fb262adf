//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item entity
///
/// Orders keep a denormalized copy of id/name/price at placement time,
/// so editing or deleting a menu item never rewrites order history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Price in currency unit
    pub price: f64,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub category: String,
    /// Price in currency unit
    pub price: f64,
}

/// Update menu item payload (full-field replace)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: String,
    pub category: String,
    /// Price in currency unit
    pub price: f64,
}
