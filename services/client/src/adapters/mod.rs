pub mod fs_store;
pub mod ids;
pub mod notify;

pub use fs_store::JsonFileStore;
pub use ids::UuidIdGenerator;
pub use notify::TracingNotifier;
