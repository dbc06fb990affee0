//! Test support: mock API, recording notifier, fixtures
#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use shared::client::{AuthData, LoginRequest, RegisterRequest};
use shared::models::{
    Category, MenuItem, MenuItemCreate, MenuItemUpdate, Order, OrderDraft, OrderLine, OrderStatus,
    PaymentMethod, User, UserRole,
};
use tiffin_client::{Api, ClientError, ClientResult};

use crate::notify::Notifier;

/// Install the test log subscriber; later calls are no-ops.
///
/// Run tests with `RUST_LOG=debug` to see store-operation traces.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Per-endpoint invocation counters
#[derive(Default)]
pub struct CallCounts {
    register: AtomicUsize,
    login: AtomicUsize,
    logout: AtomicUsize,
    current_user: AtomicUsize,
    fetch_menu: AtomicUsize,
    fetch_menu_item: AtomicUsize,
    create_menu_item: AtomicUsize,
    update_menu_item: AtomicUsize,
    delete_menu_item: AtomicUsize,
    create_order: AtomicUsize,
    fetch_orders: AtomicUsize,
    fetch_order: AtomicUsize,
    update_order_status: AtomicUsize,
    delete_order: AtomicUsize,
}

impl CallCounts {
    pub fn register(&self) -> usize {
        self.register.load(Ordering::SeqCst)
    }

    pub fn current_user(&self) -> usize {
        self.current_user.load(Ordering::SeqCst)
    }

    pub fn create_order(&self) -> usize {
        self.create_order.load(Ordering::SeqCst)
    }

    pub fn update_order_status(&self) -> usize {
        self.update_order_status.load(Ordering::SeqCst)
    }
}

type Slot<T> = Mutex<Option<ClientResult<T>>>;

fn take<T>(slot: &Slot<T>) -> ClientResult<T> {
    slot.lock()
        .unwrap_or_else(|e| e.into_inner())
        .take()
        .unwrap_or_else(|| Err(ClientError::InvalidResponse("no stubbed response".into())))
}

/// Scriptable [`Api`] implementation
///
/// Each stub is consumed by the first matching call; an unstubbed call
/// fails with `InvalidResponse`.
#[derive(Default)]
pub struct MockApi {
    pub calls: CallCounts,
    register_response: Slot<AuthData>,
    login_response: Slot<AuthData>,
    logout_response: Slot<()>,
    current_user_response: Slot<User>,
    fetch_menu_response: Slot<Vec<MenuItem>>,
    fetch_menu_item_response: Slot<MenuItem>,
    create_menu_item_response: Slot<MenuItem>,
    update_menu_item_response: Slot<MenuItem>,
    delete_menu_item_response: Slot<()>,
    create_order_response: Slot<Order>,
    fetch_orders_response: Slot<Vec<Order>>,
    fetch_order_response: Slot<Order>,
    update_order_status_response: Slot<Order>,
    delete_order_response: Slot<()>,
    last_order_draft: Mutex<Option<OrderDraft>>,
    last_menu_create: Mutex<Option<MenuItemCreate>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stub_register(&self, response: ClientResult<AuthData>) {
        *self.register_response.lock().unwrap() = Some(response);
    }

    pub fn stub_login(&self, response: ClientResult<AuthData>) {
        *self.login_response.lock().unwrap() = Some(response);
    }

    pub fn stub_logout(&self, response: ClientResult<()>) {
        *self.logout_response.lock().unwrap() = Some(response);
    }

    pub fn stub_current_user(&self, response: ClientResult<User>) {
        *self.current_user_response.lock().unwrap() = Some(response);
    }

    pub fn stub_fetch_menu(&self, response: ClientResult<Vec<MenuItem>>) {
        *self.fetch_menu_response.lock().unwrap() = Some(response);
    }

    pub fn stub_fetch_menu_item(&self, response: ClientResult<MenuItem>) {
        *self.fetch_menu_item_response.lock().unwrap() = Some(response);
    }

    pub fn stub_create_menu_item(&self, response: ClientResult<MenuItem>) {
        *self.create_menu_item_response.lock().unwrap() = Some(response);
    }

    pub fn stub_update_menu_item(&self, response: ClientResult<MenuItem>) {
        *self.update_menu_item_response.lock().unwrap() = Some(response);
    }

    pub fn stub_delete_menu_item(&self, response: ClientResult<()>) {
        *self.delete_menu_item_response.lock().unwrap() = Some(response);
    }

    pub fn stub_create_order(&self, response: ClientResult<Order>) {
        *self.create_order_response.lock().unwrap() = Some(response);
    }

    pub fn stub_fetch_orders(&self, response: ClientResult<Vec<Order>>) {
        *self.fetch_orders_response.lock().unwrap() = Some(response);
    }

    pub fn stub_fetch_order(&self, response: ClientResult<Order>) {
        *self.fetch_order_response.lock().unwrap() = Some(response);
    }

    pub fn stub_update_order_status(&self, response: ClientResult<Order>) {
        *self.update_order_status_response.lock().unwrap() = Some(response);
    }

    pub fn stub_delete_order(&self, response: ClientResult<()>) {
        *self.delete_order_response.lock().unwrap() = Some(response);
    }

    /// The draft captured by the most recent `create_order` call.
    pub fn last_order_draft(&self) -> Option<OrderDraft> {
        self.last_order_draft.lock().unwrap().clone()
    }

    /// The payload captured by the most recent `create_menu_item` call.
    pub fn last_menu_create(&self) -> Option<MenuItemCreate> {
        self.last_menu_create.lock().unwrap().clone()
    }
}

#[async_trait]
impl Api for MockApi {
    async fn register(&self, _req: &RegisterRequest) -> ClientResult<AuthData> {
        self.calls.register.fetch_add(1, Ordering::SeqCst);
        take(&self.register_response)
    }

    async fn login(&self, _req: &LoginRequest) -> ClientResult<AuthData> {
        self.calls.login.fetch_add(1, Ordering::SeqCst);
        take(&self.login_response)
    }

    async fn logout(&self) -> ClientResult<()> {
        self.calls.logout.fetch_add(1, Ordering::SeqCst);
        take(&self.logout_response)
    }

    async fn current_user(&self) -> ClientResult<User> {
        self.calls.current_user.fetch_add(1, Ordering::SeqCst);
        take(&self.current_user_response)
    }

    async fn fetch_menu(&self) -> ClientResult<Vec<MenuItem>> {
        self.calls.fetch_menu.fetch_add(1, Ordering::SeqCst);
        take(&self.fetch_menu_response)
    }

    async fn fetch_menu_item(&self, _id: &str) -> ClientResult<MenuItem> {
        self.calls.fetch_menu_item.fetch_add(1, Ordering::SeqCst);
        take(&self.fetch_menu_item_response)
    }

    async fn create_menu_item(&self, payload: &MenuItemCreate) -> ClientResult<MenuItem> {
        self.calls.create_menu_item.fetch_add(1, Ordering::SeqCst);
        *self.last_menu_create.lock().unwrap() = Some(payload.clone());
        take(&self.create_menu_item_response)
    }

    async fn update_menu_item(
        &self,
        _id: &str,
        _payload: &MenuItemUpdate,
    ) -> ClientResult<MenuItem> {
        self.calls.update_menu_item.fetch_add(1, Ordering::SeqCst);
        take(&self.update_menu_item_response)
    }

    async fn delete_menu_item(&self, _id: &str) -> ClientResult<()> {
        self.calls.delete_menu_item.fetch_add(1, Ordering::SeqCst);
        take(&self.delete_menu_item_response)
    }

    async fn create_order(&self, draft: &OrderDraft) -> ClientResult<Order> {
        self.calls.create_order.fetch_add(1, Ordering::SeqCst);
        *self.last_order_draft.lock().unwrap() = Some(draft.clone());
        take(&self.create_order_response)
    }

    async fn fetch_orders(&self) -> ClientResult<Vec<Order>> {
        self.calls.fetch_orders.fetch_add(1, Ordering::SeqCst);
        take(&self.fetch_orders_response)
    }

    async fn fetch_order(&self, _id: &str) -> ClientResult<Order> {
        self.calls.fetch_order.fetch_add(1, Ordering::SeqCst);
        take(&self.fetch_order_response)
    }

    async fn update_order_status(&self, _id: &str, _status: OrderStatus) -> ClientResult<Order> {
        self.calls.update_order_status.fetch_add(1, Ordering::SeqCst);
        take(&self.update_order_status_response)
    }

    async fn delete_order(&self, _id: &str) -> ClientResult<()> {
        self.calls.delete_order.fetch_add(1, Ordering::SeqCst);
        take(&self.delete_order_response)
    }
}

/// Notifier that records messages instead of displaying them
#[derive(Default)]
pub struct RecordingNotifier {
    successes: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

// ==================== Fixtures ====================

pub fn sample_user(id: &str, role: UserRole) -> User {
    User {
        id: id.to_string(),
        name: "Asha".to_string(),
        email: format!("{id}@example.com"),
        role,
        address: None,
        created_at: None,
    }
}

pub fn auth_data(user: User) -> AuthData {
    AuthData {
        access_token: format!("access-{}", user.id),
        refresh_token: format!("refresh-{}", user.id),
        user,
    }
}

pub fn register_request(role: UserRole) -> RegisterRequest {
    RegisterRequest {
        name: "Asha".to_string(),
        email: "asha@example.com".to_string(),
        password: "hunter2".to_string(),
        role,
        address: None,
        admin_secret: role.is_admin().then(|| "tiffin-secret".to_string()),
    }
}

pub fn sample_item(id: &str, name: &str, price: f64) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        price,
        category: Category::Other,
        available: true,
        image: None,
        created_at: None,
        updated_at: None,
    }
}

pub fn sample_item_create(name: &str, price: f64) -> MenuItemCreate {
    MenuItemCreate {
        name: name.to_string(),
        description: None,
        price,
        category: Category::Snacks,
        available: true,
        image: None,
    }
}

pub fn sample_order(id: &str, status: OrderStatus, total_price: f64) -> Order {
    Order {
        id: id.to_string(),
        items: vec![OrderLine {
            menu_item: "m1".to_string(),
            quantity: 1,
        }],
        total_price,
        payment_method: PaymentMethod::Cash,
        address: "12 MG Road".to_string(),
        status,
        user: "u1".to_string(),
        created_at: None,
        updated_at: None,
    }
}

pub fn sample_draft(total_price: f64) -> OrderDraft {
    OrderDraft {
        items: vec![OrderLine {
            menu_item: "m1".to_string(),
            quantity: 1,
        }],
        total_price,
        payment_method: PaymentMethod::Cash,
        address: "12 MG Road".to_string(),
    }
}
