//! Tiffin Store - client-side state for the storefront
//!
//! Four cooperating stores (session, catalog, cart, order) plus the
//! access guard, wired together by [`App`]. Each store owns its slice
//! of state exclusively; asynchronous operations apply a Pending
//! transition at dispatch and an Ok/Err transition on response arrival,
//! through a pure per-store reducer.

pub mod app;
pub mod cart;
pub mod catalog;
pub mod guard;
pub mod lifecycle;
pub mod notify;
pub mod order;
pub mod session;

#[cfg(test)]
pub(crate) mod testutil;

pub use app::App;
pub use cart::{CartState, CartStore};
pub use catalog::{CatalogState, CatalogStore};
pub use guard::{RouteAccess, check_access, may_request_status};
pub use lifecycle::Phase;
pub use notify::{LogNotifier, Notifier};
pub use order::{OrderState, OrderStore};
pub use session::{SessionState, SessionStore};
