//! Access guard
//!
//! Pure functions of session state gating navigation and the
//! status-transition requests the UI may offer. Advisory only on the
//! client; the backend enforces authorization independently.

use shared::models::{OrderStatus, User};

/// Outcome of a route access check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Allow,
    RedirectToLogin,
    RedirectToHome,
}

/// Gate a protected route on the current session.
pub fn check_access(user: Option<&User>, admin_only: bool) -> RouteAccess {
    let Some(user) = user else {
        return RouteAccess::RedirectToLogin;
    };
    if admin_only && !user.role.is_admin() {
        return RouteAccess::RedirectToHome;
    }
    RouteAccess::Allow
}

/// Whether `user` may request moving an order from `current` to `requested`.
///
/// Admins may request any of the four statuses. Other users may only
/// request cancellation, and only while the order is not already
/// cancelled.
pub fn may_request_status(user: &User, current: OrderStatus, requested: OrderStatus) -> bool {
    if user.role.is_admin() {
        return true;
    }
    requested == OrderStatus::Cancelled && current != OrderStatus::Cancelled
}
