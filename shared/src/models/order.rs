//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CartLine;

/// Order lifecycle status
///
/// Transitions are admin-driven except cancellation, which the owning
/// user may request while the order is not already cancelled. The store
/// sends requested transitions as-is; the backend is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Terminal by convention; nothing in this client re-opens these.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment method selected at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Online,
}

/// One ordered line: menu item reference plus quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub menu_item: String,
    pub quantity: u32,
}

/// Server-persisted order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub items: Vec<OrderLine>,
    /// Client-computed at submission; the server echo is authoritative
    pub total_price: f64,
    pub payment_method: PaymentMethod,
    /// Free-text delivery address
    pub address: String,
    pub status: OrderStatus,
    /// Owning user id
    pub user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Order creation payload, built from a cart snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub items: Vec<OrderLine>,
    pub total_price: f64,
    pub payment_method: PaymentMethod,
    pub address: String,
}

impl OrderDraft {
    /// Build a draft from cart lines taken as a snapshot at dispatch time.
    ///
    /// Total is the sum of line totals; the server recomputes and echoes
    /// the canonical value.
    pub fn from_cart(
        lines: &[CartLine],
        payment_method: PaymentMethod,
        address: impl Into<String>,
    ) -> Self {
        Self {
            items: lines
                .iter()
                .map(|line| OrderLine {
                    menu_item: line.menu_item.clone(),
                    quantity: line.quantity,
                })
                .collect(),
            total_price: lines.iter().map(CartLine::line_total).sum(),
            payment_method,
            address: address.into(),
        }
    }
}

/// Status transition request body (`PUT /orders/:id`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}
