//! Data models
//!
//! Shared between the state stores and the REST backend (via API).
//! All IDs are opaque `String`s assigned server-side.

pub mod cart;
pub mod menu_item;
pub mod order;
pub mod user;

// Re-exports
pub use cart::*;
pub use menu_item::*;
pub use order::*;
pub use user::*;
