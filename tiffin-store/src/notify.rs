//! User-visible notification sink
//!
//! Mutating operations surface fire-and-forget success/failure
//! notifications. The UI supplies its own sink (toasts); the default
//! writes structured log lines.

pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default sink backed by `tracing`
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        tracing::info!(%message, "notify");
    }

    fn error(&self, message: &str) {
        tracing::warn!(%message, "notify");
    }
}
