//! Order store
//!
//! Holds submitted orders and their statuses. Scoping of `fetch_all`
//! (admin sees everything, a user sees their own) happens server-side;
//! this store is agnostic. Status transitions are sent as requested —
//! transition legality is the caller's concern (see
//! [`crate::guard::may_request_status`]).

use std::sync::{Arc, RwLock};

use shared::models::{Order, OrderDraft, OrderStatus};
use tiffin_client::{Api, ClientError, ClientResult};

use crate::lifecycle::Phase;
use crate::notify::Notifier;

/// Order state slice
#[derive(Debug, Clone, Default)]
pub struct OrderState {
    pub orders: Vec<Order>,
    pub current_order: Option<Order>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Order state transitions
#[derive(Debug, Clone)]
pub enum OrderEvent {
    Create(Phase<Order>),
    FetchAll(Phase<Vec<Order>>),
    FetchOne(Phase<Order>),
    UpdateStatus(Phase<Order>),
    Remove(Phase<String>),
}

impl OrderState {
    /// Pure transition function.
    pub fn apply(&mut self, event: OrderEvent) {
        use OrderEvent::*;
        match event {
            Create(Phase::Pending) | FetchAll(Phase::Pending) => {
                self.loading = true;
                self.error = None;
            }
            FetchOne(Phase::Pending) | UpdateStatus(Phase::Pending) | Remove(Phase::Pending) => {
                self.loading = true;
            }
            Create(Phase::Ok(order)) => {
                self.loading = false;
                self.orders.push(order);
            }
            FetchAll(Phase::Ok(orders)) => {
                self.loading = false;
                self.orders = orders;
            }
            FetchOne(Phase::Ok(order)) => {
                self.loading = false;
                self.current_order = Some(order);
            }
            // Replace by id; an unmatched id is a silent no-op
            UpdateStatus(Phase::Ok(order)) => {
                self.loading = false;
                if let Some(existing) = self.orders.iter_mut().find(|o| o.id == order.id) {
                    *existing = order;
                }
            }
            Remove(Phase::Ok(id)) => {
                self.loading = false;
                self.orders.retain(|order| order.id != id);
            }
            Create(Phase::Err(message))
            | FetchAll(Phase::Err(message))
            | FetchOne(Phase::Err(message))
            | UpdateStatus(Phase::Err(message))
            | Remove(Phase::Err(message)) => {
                self.loading = false;
                self.error = Some(message);
            }
        }
    }
}

/// Order store: async operations over [`OrderState`]
pub struct OrderStore<A> {
    api: Arc<A>,
    notifier: Arc<dyn Notifier>,
    state: RwLock<OrderState>,
}

impl<A: Api> OrderStore<A> {
    pub fn new(api: Arc<A>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            state: RwLock::new(OrderState::default()),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> OrderState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn clear_error(&self) {
        self.state
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .error = None;
    }

    pub fn clear_current_order(&self) {
        self.state
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .current_order = None;
    }

    fn apply(&self, event: OrderEvent) {
        self.state
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .apply(event);
    }

    fn fail(
        &self,
        make_event: impl FnOnce(String) -> OrderEvent,
        err: ClientError,
        notify: bool,
    ) -> ClientError {
        let message = err.to_string();
        if notify {
            self.notifier.error(&message);
        }
        self.apply(make_event(message));
        err
    }

    /// Submit an order draft; the server echo (with assigned id and
    /// `pending` status) is appended.
    ///
    /// Clearing the cart afterwards is the caller's step, not this
    /// store's (see [`crate::App::checkout`]).
    pub async fn create(&self, draft: OrderDraft) -> ClientResult<Order> {
        self.apply(OrderEvent::Create(Phase::Pending));
        match self.api.create_order(&draft).await {
            Ok(order) => {
                self.apply(OrderEvent::Create(Phase::Ok(order.clone())));
                self.notifier.success("Order placed successfully!");
                Ok(order)
            }
            Err(err) => Err(self.fail(|m| OrderEvent::Create(Phase::Err(m)), err, true)),
        }
    }

    pub async fn fetch_all(&self) -> ClientResult<Vec<Order>> {
        self.apply(OrderEvent::FetchAll(Phase::Pending));
        match self.api.fetch_orders().await {
            Ok(orders) => {
                self.apply(OrderEvent::FetchAll(Phase::Ok(orders.clone())));
                Ok(orders)
            }
            Err(err) => Err(self.fail(|m| OrderEvent::FetchAll(Phase::Err(m)), err, false)),
        }
    }

    pub async fn fetch_one(&self, id: &str) -> ClientResult<Order> {
        self.apply(OrderEvent::FetchOne(Phase::Pending));
        match self.api.fetch_order(id).await {
            Ok(order) => {
                self.apply(OrderEvent::FetchOne(Phase::Ok(order.clone())));
                Ok(order)
            }
            Err(err) => Err(self.fail(|m| OrderEvent::FetchOne(Phase::Err(m)), err, false)),
        }
    }

    /// Request a status transition. Sent as-is; the backend validates.
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> ClientResult<Order> {
        self.apply(OrderEvent::UpdateStatus(Phase::Pending));
        match self.api.update_order_status(id, status).await {
            Ok(order) => {
                self.apply(OrderEvent::UpdateStatus(Phase::Ok(order.clone())));
                self.notifier.success("Order status updated!");
                Ok(order)
            }
            Err(err) => Err(self.fail(|m| OrderEvent::UpdateStatus(Phase::Err(m)), err, true)),
        }
    }

    pub async fn remove(&self, id: &str) -> ClientResult<()> {
        self.apply(OrderEvent::Remove(Phase::Pending));
        match self.api.delete_order(id).await {
            Ok(()) => {
                self.apply(OrderEvent::Remove(Phase::Ok(id.to_string())));
                self.notifier.success("Order deleted successfully!");
                Ok(())
            }
            Err(err) => Err(self.fail(|m| OrderEvent::Remove(Phase::Err(m)), err, true)),
        }
    }
}
