//! services/client/src/adapters/ids.rs
//!
//! Id-generation adapter. Answers the core's id requests with UUIDv4
//! strings, which cannot collide with the short numeric ids used by the
//! seed data.

use bookhaven_core::ports::IdGenerator;
use uuid::Uuid;

/// An adapter that implements the `IdGenerator` port with random UUIDs.
#[derive(Clone, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
