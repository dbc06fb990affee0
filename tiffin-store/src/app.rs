//! Application state container
//!
//! Owns the four stores and the shared API handle. Built once at
//! startup and handed to the UI by reference; no ambient singletons.

use std::sync::Arc;

use shared::models::{Order, PaymentMethod, User};
use tiffin_client::token::{FileTokenStore, MemoryTokenStore, TokenStore};
use tiffin_client::{Api, ClientConfig, ClientError, ClientResult, HttpApi};

use crate::cart::CartStore;
use crate::catalog::CatalogStore;
use crate::notify::{LogNotifier, Notifier};
use crate::order::OrderStore;
use crate::session::SessionStore;

/// Process-wide application state
pub struct App<A> {
    pub session: SessionStore<A>,
    pub catalog: CatalogStore<A>,
    pub cart: CartStore,
    pub orders: OrderStore<A>,
    config: ClientConfig,
}

impl App<HttpApi> {
    /// Build the container against the real backend.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let tokens: Arc<dyn TokenStore> = match &config.token_path {
            Some(path) => Arc::new(FileTokenStore::new(path)),
            None => Arc::new(MemoryTokenStore::new()),
        };
        let api = Arc::new(HttpApi::new(&config, Arc::clone(&tokens))?);
        Ok(Self::with_api(api, tokens, Arc::new(LogNotifier), config))
    }
}

impl<A: Api> App<A> {
    /// Wire the stores to an arbitrary API implementation.
    pub fn with_api(
        api: Arc<A>,
        tokens: Arc<dyn TokenStore>,
        notifier: Arc<dyn Notifier>,
        config: ClientConfig,
    ) -> Self {
        Self {
            session: SessionStore::new(Arc::clone(&api), tokens, Arc::clone(&notifier)),
            catalog: CatalogStore::new(Arc::clone(&api), Arc::clone(&notifier)),
            cart: CartStore::new(),
            orders: OrderStore::new(api, notifier),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Startup hook: restore the session if a durable credential exists.
    pub async fn start(&self) -> Option<User> {
        self.session.restore_session().await
    }

    /// Place an order from the current cart, then clear the cart.
    ///
    /// Two-step choreography: the cart snapshot is taken at dispatch,
    /// the draft is submitted, and the cart is cleared only after a
    /// successful create. There is no rollback of the order if anything
    /// after the create fails.
    pub async fn checkout(
        &self,
        payment_method: PaymentMethod,
        address: impl Into<String>,
    ) -> ClientResult<Order> {
        let address = address.into();
        if address.trim().is_empty() {
            return Err(ClientError::Validation(
                "Please enter delivery address!".to_string(),
            ));
        }
        let lines = self.cart.snapshot();
        if lines.is_empty() {
            return Err(ClientError::Validation("Cart is empty".to_string()));
        }

        let draft = shared::models::OrderDraft::from_cart(&lines, payment_method, address);
        let order = self.orders.create(draft).await?;
        self.cart.clear();
        Ok(order)
    }
}
