//! crates/bookhaven_core/src/domain.rs
//!
//! Defines the pure, core data structures for the catalog.
//! These structs are independent of any storage backend; their serde shape
//! IS the persisted schema.

use serde::{Deserialize, Serialize};

/// A book record held by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    /// Publication year, kept as text; parsed numerically only for sorting.
    pub year: String,
    #[serde(rename = "coverUrl")]
    pub cover_url: String,
    pub genre: String,
    pub description: String,
    /// Submission order, append-only.
    pub reviews: Vec<Review>,
}

/// A reader review attached to a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    /// Display name captured at submission time, not a live user reference.
    #[serde(rename = "userName")]
    pub user_name: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
    pub comment: String,
    /// Submission date as `YYYY-MM-DD`.
    pub date: String,
}

/// The fields a caller supplies when adding a book; the store assigns
/// `id` and starts `reviews` empty.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: String,
    pub cover_url: String,
    pub genre: String,
    pub description: String,
}

/// The fields a caller supplies when submitting a review; the store
/// assigns `id` and `date`.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
}
