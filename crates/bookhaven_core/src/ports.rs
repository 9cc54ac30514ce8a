//! crates/bookhaven_core/src/ports.rs
//!
//! Defines the service contracts (traits) the catalog core consumes.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of specific external implementations like the on-disk
//! key-value storage or the toast UI.

use async_trait::async_trait;
use serde_json::Value;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., filesystem).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Persistent key-value storage addressed by fixed string keys.
///
/// Values cross the boundary as structured JSON; the store applies its own
/// defaults when a key is absent.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if the key has
    /// never been written.
    async fn load(&self, key: &str) -> PortResult<Option<Value>>;

    /// Writes `value` under `key`, replacing any previous value.
    async fn save(&self, key: &str, value: Value) -> PortResult<()>;
}

/// The severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// Fire-and-forget sink for user-facing status messages (toasts).
/// The catalog never waits on or reacts to the outcome of a notification.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, kind: NotificationKind, title: &str, description: &str);
}

/// Source of fresh opaque identifiers for books and reviews.
///
/// Injected rather than derived from the wall clock so uniqueness is
/// guaranteed and tests can be deterministic.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}
