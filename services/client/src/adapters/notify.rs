//! services/client/src/adapters/notify.rs
//!
//! Notification adapter that renders the store's fire-and-forget status
//! messages as `tracing` events. A graphical client would show these as
//! toasts; a headless session host logs them instead.

use bookhaven_core::ports::{NotificationKind, NotificationSink};
use tracing::{info, warn};

/// An adapter that implements the `NotificationSink` port over the
/// process-wide tracing subscriber.
#[derive(Clone, Default)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, kind: NotificationKind, title: &str, description: &str) {
        match kind {
            NotificationKind::Info => info!(target: "bookhaven::toast", "{}: {}", title, description),
            NotificationKind::Error => warn!(target: "bookhaven::toast", "{}: {}", title, description),
        }
    }
}
