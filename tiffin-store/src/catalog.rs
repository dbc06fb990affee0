//! Catalog store
//!
//! Holds the menu item collection and per-item CRUD state. Catalog
//! order is insertion order: creates append at the end. Authorization
//! is not enforced here; the access guard keeps non-admins away from
//! the mutating operations before they are invoked.

use std::sync::{Arc, RwLock};

use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use tiffin_client::{Api, ClientError, ClientResult};

use crate::lifecycle::Phase;
use crate::notify::Notifier;

/// Catalog state slice
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub items: Vec<MenuItem>,
    pub current_item: Option<MenuItem>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Catalog state transitions
#[derive(Debug, Clone)]
pub enum CatalogEvent {
    FetchAll(Phase<Vec<MenuItem>>),
    FetchOne(Phase<MenuItem>),
    Create(Phase<MenuItem>),
    Update(Phase<MenuItem>),
    Remove(Phase<String>),
}

impl CatalogState {
    /// Pure transition function.
    pub fn apply(&mut self, event: CatalogEvent) {
        use CatalogEvent::*;
        match event {
            FetchAll(Phase::Pending) => {
                self.loading = true;
                self.error = None;
            }
            FetchOne(Phase::Pending)
            | Create(Phase::Pending)
            | Update(Phase::Pending)
            | Remove(Phase::Pending) => {
                self.loading = true;
            }
            FetchAll(Phase::Ok(items)) => {
                self.loading = false;
                self.items = items;
            }
            FetchOne(Phase::Ok(item)) => {
                self.loading = false;
                self.current_item = Some(item);
            }
            Create(Phase::Ok(item)) => {
                self.loading = false;
                self.items.push(item);
            }
            // Replace in place by id; an unmatched id is a silent no-op
            Update(Phase::Ok(item)) => {
                self.loading = false;
                if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
                    *existing = item;
                }
            }
            Remove(Phase::Ok(id)) => {
                self.loading = false;
                self.items.retain(|item| item.id != id);
            }
            FetchAll(Phase::Err(message))
            | FetchOne(Phase::Err(message))
            | Create(Phase::Err(message))
            | Update(Phase::Err(message))
            | Remove(Phase::Err(message)) => {
                self.loading = false;
                self.error = Some(message);
            }
        }
    }
}

/// Catalog store: async operations over [`CatalogState`]
pub struct CatalogStore<A> {
    api: Arc<A>,
    notifier: Arc<dyn Notifier>,
    state: RwLock<CatalogState>,
}

impl<A: Api> CatalogStore<A> {
    pub fn new(api: Arc<A>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            state: RwLock::new(CatalogState::default()),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> CatalogState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn clear_error(&self) {
        self.state
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .error = None;
    }

    pub fn clear_current_item(&self) {
        self.state
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .current_item = None;
    }

    fn apply(&self, event: CatalogEvent) {
        self.state
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .apply(event);
    }

    fn fail(&self, make_event: impl FnOnce(String) -> CatalogEvent, err: ClientError, notify: bool) -> ClientError {
        let message = err.to_string();
        if notify {
            self.notifier.error(&message);
        }
        self.apply(make_event(message));
        err
    }

    pub async fn fetch_all(&self) -> ClientResult<Vec<MenuItem>> {
        self.apply(CatalogEvent::FetchAll(Phase::Pending));
        match self.api.fetch_menu().await {
            Ok(items) => {
                self.apply(CatalogEvent::FetchAll(Phase::Ok(items.clone())));
                Ok(items)
            }
            Err(err) => Err(self.fail(|m| CatalogEvent::FetchAll(Phase::Err(m)), err, false)),
        }
    }

    pub async fn fetch_one(&self, id: &str) -> ClientResult<MenuItem> {
        self.apply(CatalogEvent::FetchOne(Phase::Pending));
        match self.api.fetch_menu_item(id).await {
            Ok(item) => {
                self.apply(CatalogEvent::FetchOne(Phase::Ok(item.clone())));
                Ok(item)
            }
            Err(err) => Err(self.fail(|m| CatalogEvent::FetchOne(Phase::Err(m)), err, false)),
        }
    }

    /// Create a menu item (admin); the server echo is appended as-is.
    pub async fn create(&self, payload: MenuItemCreate) -> ClientResult<MenuItem> {
        self.apply(CatalogEvent::Create(Phase::Pending));
        match self.api.create_menu_item(&payload).await {
            Ok(item) => {
                self.apply(CatalogEvent::Create(Phase::Ok(item.clone())));
                self.notifier.success("Menu item created successfully!");
                Ok(item)
            }
            Err(err) => Err(self.fail(|m| CatalogEvent::Create(Phase::Err(m)), err, true)),
        }
    }

    /// Update a menu item (admin), replacing the matching entry by id.
    pub async fn update(&self, id: &str, payload: MenuItemUpdate) -> ClientResult<MenuItem> {
        self.apply(CatalogEvent::Update(Phase::Pending));
        match self.api.update_menu_item(id, &payload).await {
            Ok(item) => {
                self.apply(CatalogEvent::Update(Phase::Ok(item.clone())));
                self.notifier.success("Menu item updated successfully!");
                Ok(item)
            }
            Err(err) => Err(self.fail(|m| CatalogEvent::Update(Phase::Err(m)), err, true)),
        }
    }

    /// Delete a menu item (admin); an absent id is a silent no-op.
    pub async fn remove(&self, id: &str) -> ClientResult<()> {
        self.apply(CatalogEvent::Remove(Phase::Pending));
        match self.api.delete_menu_item(id).await {
            Ok(()) => {
                self.apply(CatalogEvent::Remove(Phase::Ok(id.to_string())));
                self.notifier.success("Menu item deleted successfully!");
                Ok(())
            }
            Err(err) => Err(self.fail(|m| CatalogEvent::Remove(Phase::Err(m)), err, true)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{MockApi, RecordingNotifier, init_tracing, sample_item, sample_item_create};

    fn store(api: MockApi) -> (CatalogStore<MockApi>, Arc<RecordingNotifier>) {
        init_tracing();
        let notifier = Arc::new(RecordingNotifier::default());
        let store = CatalogStore::new(Arc::new(api), notifier.clone() as Arc<dyn Notifier>);
        (store, notifier)
    }

    #[tokio::test]
    async fn test_fetch_all_replaces_items() {
        let api = MockApi::new();
        api.stub_fetch_menu(Ok(vec![sample_item("m1", "Dosa", 90.0)]));
        let (store, _) = store(api);

        let items = store.fetch_all().await.unwrap();
        assert_eq!(items.len(), 1);
        let state = store.state();
        assert_eq!(state.items[0].id, "m1");
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_fetch_one_sets_current_item() {
        let api = MockApi::new();
        api.stub_fetch_menu_item(Ok(sample_item("m2", "Thali", 150.0)));
        let (store, _) = store(api);

        store.fetch_one("m2").await.unwrap();
        assert_eq!(store.state().current_item.unwrap().id, "m2");
    }

    #[tokio::test]
    async fn test_create_appends_at_end() {
        let api = MockApi::new();
        api.stub_fetch_menu(Ok(vec![sample_item("m1", "Dosa", 90.0)]));
        api.stub_create_menu_item(Ok(sample_item("m2", "Thali", 150.0)));
        let (store, notifier) = store(api);

        store.fetch_all().await.unwrap();
        store.create(sample_item_create("Thali", 150.0)).await.unwrap();

        let items = store.state().items;
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, "m2");
        assert_eq!(notifier.successes(), vec!["Menu item created successfully!"]);
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let api = MockApi::new();
        api.stub_fetch_menu(Ok(vec![
            sample_item("m1", "Dosa", 90.0),
            sample_item("m2", "Thali", 150.0),
        ]));
        api.stub_update_menu_item(Ok(sample_item("m1", "Masala Dosa", 110.0)));
        let (store, _) = store(api);

        store.fetch_all().await.unwrap();
        store
            .update("m1", MenuItemUpdate::default())
            .await
            .unwrap();

        let items = store.state().items;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Masala Dosa");
        assert_eq!(items[1].id, "m2");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_silent_noop() {
        let api = MockApi::new();
        api.stub_fetch_menu(Ok(vec![sample_item("m1", "Dosa", 90.0)]));
        api.stub_update_menu_item(Ok(sample_item("ghost", "Ghost", 1.0)));
        let (store, _) = store(api);

        store.fetch_all().await.unwrap();
        store
            .update("ghost", MenuItemUpdate::default())
            .await
            .unwrap();

        let state = store.state();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].name, "Dosa");
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_remove_filters_by_id() {
        let api = MockApi::new();
        api.stub_fetch_menu(Ok(vec![
            sample_item("m1", "Dosa", 90.0),
            sample_item("m2", "Thali", 150.0),
        ]));
        api.stub_delete_menu_item(Ok(()));
        let (store, _) = store(api);

        store.fetch_all().await.unwrap();
        store.remove("m1").await.unwrap();

        let items = store.state().items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "m2");
    }

    #[tokio::test]
    async fn test_remove_unknown_id_is_silent_noop() {
        let api = MockApi::new();
        api.stub_fetch_menu(Ok(vec![sample_item("m1", "Dosa", 90.0)]));
        api.stub_delete_menu_item(Ok(()));
        let (store, _) = store(api);

        store.fetch_all().await.unwrap();
        store.remove("ghost").await.unwrap();

        let state = store.state();
        assert_eq!(state.items.len(), 1);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_create_round_trip_preserves_submitted_fields() {
        // The server echo is trusted verbatim; barring the assigned id
        // and image path, it mirrors the submitted fields.
        let api = MockApi::new();
        let mut echoed = sample_item("m7", "Pav Bhaji", 110.5);
        echoed.category = shared::models::Category::Snacks;
        api.stub_create_menu_item(Ok(echoed));
        let (store, _) = store(api);

        let payload = sample_item_create("Pav Bhaji", 110.5);
        let created = store.create(payload.clone()).await.unwrap();

        assert_eq!(created.name, payload.name);
        assert_eq!(created.price, payload.price);
        assert_eq!(created.category, payload.category);
        assert_eq!(created.available, payload.available);
    }

    #[tokio::test]
    async fn test_create_sends_payload_as_submitted() {
        let api = MockApi::new();
        api.stub_create_menu_item(Ok(sample_item("m7", "Pav Bhaji", 110.5)));
        let (store, _) = store(api);
        let api = Arc::clone(&store.api);

        store.create(sample_item_create("Pav Bhaji", 110.5)).await.unwrap();
        let sent = api.last_menu_create().unwrap();
        assert_eq!(sent.name, "Pav Bhaji");
        assert_eq!(sent.price, 110.5);
        assert!(sent.available);
    }

    #[tokio::test]
    async fn test_create_failure_notifies_and_records_error() {
        let api = MockApi::new();
        api.stub_create_menu_item(Err(ClientError::Status {
            code: 403,
            message: "Forbidden".to_string(),
        }));
        let (store, notifier) = store(api);

        assert!(store.create(sample_item_create("Thali", 150.0)).await.is_err());
        let state = store.state();
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("HTTP 403: Forbidden"));
        assert_eq!(notifier.errors(), vec!["HTTP 403: Forbidden"]);
    }

    #[tokio::test]
    async fn test_clear_current_item() {
        let api = MockApi::new();
        api.stub_fetch_menu_item(Ok(sample_item("m1", "Dosa", 90.0)));
        let (store, _) = store(api);

        store.fetch_one("m1").await.unwrap();
        store.clear_current_item();
        assert!(store.state().current_item.is_none());
    }
}
