pub mod catalog;
pub mod domain;
pub mod ports;
pub mod query;
pub mod seed;

pub use catalog::{CatalogError, CatalogResult, CatalogStore, BOOKS_KEY, FAVORITES_KEY};
pub use domain::{Book, NewBook, NewReview, Review};
pub use ports::{IdGenerator, KeyValueStore, NotificationKind, NotificationSink, PortError, PortResult};
pub use query::SortKey;
