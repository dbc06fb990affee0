//! Session store
//!
//! Holds the authenticated user and the loading/error flags. Successful
//! register/login persist the credential pair to durable storage; the
//! HTTP adapter reads it back per request. At most one authenticated
//! user is held at a time.

use std::sync::{Arc, RwLock};

use shared::client::{LoginRequest, RegisterRequest};
use shared::models::User;
use tiffin_client::token::TokenStore;
use tiffin_client::{Api, ClientError, ClientResult};

use crate::lifecycle::Phase;
use crate::notify::Notifier;

/// Session state slice
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Session state transitions
#[derive(Debug, Clone)]
pub enum SessionEvent {
    Register(Phase<User>),
    Login(Phase<User>),
    Logout(Phase<()>),
    Restore(Phase<User>),
}

impl SessionState {
    /// Pure transition function.
    pub fn apply(&mut self, event: SessionEvent) {
        use SessionEvent::*;
        match event {
            Register(Phase::Pending) | Login(Phase::Pending) => {
                self.loading = true;
                self.error = None;
            }
            Register(Phase::Ok(user)) | Login(Phase::Ok(user)) => {
                self.loading = false;
                self.user = Some(user);
            }
            Register(Phase::Err(message)) | Login(Phase::Err(message)) => {
                self.loading = false;
                self.error = Some(message);
            }
            Logout(Phase::Pending) => {
                self.loading = true;
            }
            // Local session is dropped on both logout outcomes; the
            // stored credential may already be invalid server-side.
            Logout(Phase::Ok(())) => {
                self.loading = false;
                self.user = None;
            }
            Logout(Phase::Err(message)) => {
                self.loading = false;
                self.user = None;
                self.error = Some(message);
            }
            Restore(Phase::Pending) => {
                self.loading = true;
            }
            Restore(Phase::Ok(user)) => {
                self.loading = false;
                self.user = Some(user);
            }
            // Restore failure reads as "not authenticated", never as a
            // surfaced error.
            Restore(Phase::Err(_)) => {
                self.loading = false;
                self.user = None;
            }
        }
    }
}

/// Session store: async operations over [`SessionState`]
pub struct SessionStore<A> {
    api: Arc<A>,
    tokens: Arc<dyn TokenStore>,
    notifier: Arc<dyn Notifier>,
    state: RwLock<SessionState>,
}

impl<A: Api> SessionStore<A> {
    pub fn new(api: Arc<A>, tokens: Arc<dyn TokenStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            tokens,
            notifier,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().user.is_some()
    }

    pub fn clear_error(&self) {
        self.state
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .error = None;
    }

    pub fn set_user(&self, user: Option<User>) {
        self.state.write().unwrap_or_else(|e| e.into_inner()).user = user;
    }

    fn apply(&self, event: SessionEvent) {
        self.state
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .apply(event);
    }

    /// Register a new account.
    ///
    /// Admin registrations require a non-empty admin secret; the check
    /// fails fast without a network round trip.
    pub async fn register(&self, req: RegisterRequest) -> ClientResult<User> {
        if req.role.is_admin()
            && req
                .admin_secret
                .as_deref()
                .is_none_or(|secret| secret.trim().is_empty())
        {
            let message = "Admin secret is required!";
            self.state
                .write()
                .unwrap_or_else(|e| e.into_inner())
                .error = Some(message.to_string());
            self.notifier.error(message);
            return Err(ClientError::Validation(message.to_string()));
        }

        self.apply(SessionEvent::Register(Phase::Pending));
        match self.api.register(&req).await {
            Ok(auth) => {
                if let Err(err) = self.tokens.save(&auth.token_pair()) {
                    let err = ClientError::from(err);
                    let event = SessionEvent::Register(Phase::Err(err.to_string()));
                    return Err(self.fail(event, err));
                }
                let user = auth.user;
                self.apply(SessionEvent::Register(Phase::Ok(user.clone())));
                self.notifier.success("Registration successful!");
                Ok(user)
            }
            Err(err) => {
                Err(self.fail(SessionEvent::Register(Phase::Err(err.to_string())), err))
            }
        }
    }

    /// Record a failed completion and pass the error through.
    fn fail(&self, event: SessionEvent, err: ClientError) -> ClientError {
        self.notifier.error(&err.to_string());
        self.apply(event);
        err
    }

    /// Log into an existing account.
    pub async fn login(&self, req: LoginRequest) -> ClientResult<User> {
        self.apply(SessionEvent::Login(Phase::Pending));
        match self.api.login(&req).await {
            Ok(auth) => {
                if let Err(err) = self.tokens.save(&auth.token_pair()) {
                    let err = ClientError::from(err);
                    let event = SessionEvent::Login(Phase::Err(err.to_string()));
                    return Err(self.fail(event, err));
                }
                let user = auth.user;
                self.apply(SessionEvent::Login(Phase::Ok(user.clone())));
                self.notifier.success("Login successful!");
                Ok(user)
            }
            Err(err) => Err(self.fail(SessionEvent::Login(Phase::Err(err.to_string())), err)),
        }
    }

    /// Request server-side invalidation and drop the local session.
    ///
    /// The local credential and user are cleared even when the server
    /// call fails; the failure is still surfaced via `error` and the
    /// returned result.
    pub async fn logout(&self) -> ClientResult<()> {
        self.apply(SessionEvent::Logout(Phase::Pending));
        let result = self.api.logout().await;
        if let Err(err) = self.tokens.clear() {
            tracing::warn!(%err, "Failed to clear stored credentials");
        }
        match result {
            Ok(()) => {
                self.apply(SessionEvent::Logout(Phase::Ok(())));
                self.notifier.success("Logout successful!");
                Ok(())
            }
            Err(err) => {
                let message = err.to_string();
                self.apply(SessionEvent::Logout(Phase::Err(message.clone())));
                self.notifier.error(&message);
                Err(err)
            }
        }
    }

    /// Restore the session from a durable credential at startup.
    ///
    /// Any failure, transient network failure included, reads as "not
    /// authenticated": the user is cleared and no error is surfaced.
    pub async fn restore_session(&self) -> Option<User> {
        if self.tokens.load().is_none() {
            tracing::debug!("No stored credentials, skipping session restore");
            return None;
        }
        self.apply(SessionEvent::Restore(Phase::Pending));
        match self.api.current_user().await {
            Ok(user) => {
                self.apply(SessionEvent::Restore(Phase::Ok(user.clone())));
                tracing::info!(user = %user.email, "Session restored");
                Some(user)
            }
            Err(err) => {
                tracing::debug!(%err, "Session restore failed");
                self.apply(SessionEvent::Restore(Phase::Err(err.to_string())));
                None
            }
        }
    }
}
