//! HTTP adapter for the restaurant REST backend
//!
//! Every non-anonymous request attaches the bearer credential, read
//! fresh from the token store per request so logout or token refresh
//! takes effect on the next call. The adapter does not retry and does
//! not refresh expired tokens.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::Form;
use serde::de::DeserializeOwned;

use shared::client::{AuthData, LoginRequest, RegisterRequest};
use shared::models::{
    MenuItem, MenuItemCreate, MenuItemUpdate, Order, OrderDraft, OrderStatus, StatusUpdate, User,
};
use shared::response::{Envelope, ErrorBody};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::multipart;
use crate::token::TokenStore;

/// REST API seam
///
/// Stores depend on this trait rather than on [`HttpApi`] directly so
/// they can be exercised against a mock backend.
#[async_trait]
pub trait Api: Send + Sync {
    async fn register(&self, req: &RegisterRequest) -> ClientResult<AuthData>;
    async fn login(&self, req: &LoginRequest) -> ClientResult<AuthData>;
    async fn logout(&self) -> ClientResult<()>;
    async fn current_user(&self) -> ClientResult<User>;

    async fn fetch_menu(&self) -> ClientResult<Vec<MenuItem>>;
    async fn fetch_menu_item(&self, id: &str) -> ClientResult<MenuItem>;
    async fn create_menu_item(&self, payload: &MenuItemCreate) -> ClientResult<MenuItem>;
    async fn update_menu_item(&self, id: &str, payload: &MenuItemUpdate)
    -> ClientResult<MenuItem>;
    async fn delete_menu_item(&self, id: &str) -> ClientResult<()>;

    async fn create_order(&self, draft: &OrderDraft) -> ClientResult<Order>;
    async fn fetch_orders(&self) -> ClientResult<Vec<Order>>;
    async fn fetch_order(&self, id: &str) -> ClientResult<Order>;
    async fn update_order_status(&self, id: &str, status: OrderStatus) -> ClientResult<Order>;
    async fn delete_order(&self, id: &str) -> ClientResult<()>;
}

/// Network-backed [`Api`] implementation
pub struct HttpApi {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl HttpApi {
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenStore>) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach the bearer credential if one is stored right now.
    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.tokens.access_token() {
            Some(token) => req.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}")),
            None => req,
        }
    }

    async fn check(&self, response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        Err(status_error(status.as_u16(), &text))
    }

    async fn parse<T: DeserializeOwned>(&self, response: reqwest::Response) -> ClientResult<T> {
        let envelope: Envelope<T> = self.check(response).await?.json().await?;
        envelope
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing response data".into()))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!(%path, "GET");
        let response = self.authorize(self.client.get(self.url(path))).send().await?;
        self.parse(response).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(%path, "POST");
        let response = self
            .authorize(self.client.post(self.url(path)).json(body))
            .send()
            .await?;
        self.parse(response).await
    }

    async fn post_empty(&self, path: &str) -> ClientResult<()> {
        tracing::debug!(%path, "POST");
        let response = self.authorize(self.client.post(self.url(path))).send().await?;
        self.check(response).await?;
        Ok(())
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(%path, "PUT");
        let response = self
            .authorize(self.client.put(self.url(path)).json(body))
            .send()
            .await?;
        self.parse(response).await
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        tracing::debug!(%path, "DELETE");
        let response = self
            .authorize(self.client.delete(self.url(path)))
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    async fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> ClientResult<T> {
        tracing::debug!(%path, "POST multipart");
        let response = self
            .authorize(self.client.post(self.url(path)).multipart(form))
            .send()
            .await?;
        self.parse(response).await
    }

    async fn put_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> ClientResult<T> {
        tracing::debug!(%path, "PUT multipart");
        let response = self
            .authorize(self.client.put(self.url(path)).multipart(form))
            .send()
            .await?;
        self.parse(response).await
    }
}

/// Map a non-2xx response to [`ClientError::Status`], preferring the
/// server's `message` when the body parses as the error envelope.
fn status_error(code: u16, body: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| {
            if body.is_empty() {
                format!("Request failed with status {code}")
            } else {
                body.to_string()
            }
        });
    ClientError::Status { code, message }
}

#[async_trait]
impl Api for HttpApi {
    async fn register(&self, req: &RegisterRequest) -> ClientResult<AuthData> {
        self.post("/users/register", req).await
    }

    async fn login(&self, req: &LoginRequest) -> ClientResult<AuthData> {
        self.post("/users/login", req).await
    }

    async fn logout(&self) -> ClientResult<()> {
        self.post_empty("/users/logout").await
    }

    async fn current_user(&self) -> ClientResult<User> {
        self.get("/users/me").await
    }

    async fn fetch_menu(&self) -> ClientResult<Vec<MenuItem>> {
        self.get("/menus").await
    }

    async fn fetch_menu_item(&self, id: &str) -> ClientResult<MenuItem> {
        self.get(&format!("/menus/{id}")).await
    }

    async fn create_menu_item(&self, payload: &MenuItemCreate) -> ClientResult<MenuItem> {
        let form = multipart::create_form(payload)?;
        self.post_multipart("/menus", form).await
    }

    async fn update_menu_item(
        &self,
        id: &str,
        payload: &MenuItemUpdate,
    ) -> ClientResult<MenuItem> {
        let form = multipart::update_form(payload)?;
        self.put_multipart(&format!("/menus/{id}"), form).await
    }

    async fn delete_menu_item(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/menus/{id}")).await
    }

    async fn create_order(&self, draft: &OrderDraft) -> ClientResult<Order> {
        self.post("/orders", draft).await
    }

    async fn fetch_orders(&self) -> ClientResult<Vec<Order>> {
        self.get("/orders").await
    }

    async fn fetch_order(&self, id: &str) -> ClientResult<Order> {
        self.get(&format!("/orders/{id}")).await
    }

    async fn update_order_status(&self, id: &str, status: OrderStatus) -> ClientResult<Order> {
        self.put(&format!("/orders/{id}"), &StatusUpdate { status })
            .await
    }

    async fn delete_order(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/orders/{id}")).await
    }
}
