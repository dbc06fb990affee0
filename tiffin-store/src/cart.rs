//! Cart store
//!
//! Pure local reducer, no network I/O. Lines hold denormalized
//! name/price snapshots taken at add-time; at most one line exists per
//! menu item id. Cart contents only ever reach the server embedded in
//! an order draft.

use std::sync::RwLock;

use shared::models::{CartLine, MenuItem};

/// Cart state slice
#[derive(Debug, Clone, Default)]
pub struct CartState {
    pub lines: Vec<CartLine>,
}

impl CartState {
    /// Add an item to the cart.
    ///
    /// Merge policy: adding an item already in the cart increments the
    /// existing line's quantity by the requested amount.
    pub fn add_item(&mut self, item: &MenuItem, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.lines.iter_mut().find(|line| line.menu_item == item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine::from_item(item, quantity)),
        }
    }

    /// Set a line's quantity. Zero removes the line.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove_item(id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|line| line.menu_item == id) {
            line.quantity = quantity;
        }
    }

    /// Remove a line; no-op if absent.
    pub fn remove_item(&mut self, id: &str) {
        self.lines.retain(|line| line.menu_item != id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total_price(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

/// Cart store: synchronous wrapper owning [`CartState`]
#[derive(Default)]
pub struct CartStore {
    state: RwLock<CartState>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current lines, taken at the moment of the call.
    pub fn snapshot(&self) -> Vec<CartLine> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .lines
            .clone()
    }

    pub fn state(&self) -> CartState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn add_item(&self, item: &MenuItem, quantity: u32) {
        self.state
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .add_item(item, quantity);
    }

    pub fn update_quantity(&self, id: &str, quantity: u32) {
        self.state
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .update_quantity(id, quantity);
    }

    pub fn remove_item(&self, id: &str) {
        self.state
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove_item(id);
    }

    pub fn clear(&self) {
        self.state.write().unwrap_or_else(|e| e.into_inner()).clear();
    }

    pub fn total_price(&self) -> f64 {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .total_price()
    }
}
