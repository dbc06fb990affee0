//! Shared types for the Tiffin storefront
//!
//! Domain models and API DTOs used by both the HTTP client and the
//! state stores. Wire format matches the REST backend (camelCase JSON,
//! `{ data, message }` envelope).

pub mod client;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};
