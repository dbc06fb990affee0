//! Cart Line Model

use serde::{Deserialize, Serialize};

use super::MenuItem;

/// A single line in the client-local cart
///
/// Name and price are denormalized snapshots taken at add-time; the cart
/// is never persisted server-side, only embedded in an order draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Referenced menu item id
    pub menu_item: String,
    pub name: String,
    pub price: f64,
    /// Always >= 1; a line at 0 is removed instead
    pub quantity: u32,
}

impl CartLine {
    /// Snapshot a menu item into a new line.
    pub fn from_item(item: &MenuItem, quantity: u32) -> Self {
        Self {
            menu_item: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}
