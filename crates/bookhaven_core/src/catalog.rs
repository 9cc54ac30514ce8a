//! crates/bookhaven_core/src/catalog.rs
//!
//! The catalog store: single source of truth for the book collection and
//! the current user's favorite-id set. All reads and writes to this data
//! flow through it; every mutation is synchronized to the backing
//! key-value store before the operation reports success to the caller.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use chrono::Utc;
use serde_json::Value;

use crate::domain::{Book, NewBook, NewReview, Review};
use crate::ports::{IdGenerator, KeyValueStore, NotificationKind, NotificationSink};
use crate::query::{self, SortKey};
use crate::seed;

/// Storage key for the serialized book collection.
pub const BOOKS_KEY: &str = "bookhaven-books";
/// Storage key for the serialized favorite-id list.
pub const FAVORITES_KEY: &str = "bookhaven-favorites";

//=========================================================================================
// Store Error Type
//=========================================================================================

/// Errors a catalog mutation can report to its caller.
///
/// Persistence failures are deliberately absent: the in-memory state stays
/// authoritative for the session, so a failed write is surfaced through the
/// notification sink instead of failing the operation.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Book {0} not found")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    Invalid(String),
}

/// A convenience type alias for `Result<T, CatalogError>`.
pub type CatalogResult<T> = Result<T, CatalogError>;

//=========================================================================================
// Favorite-Id Set
//=========================================================================================

/// Insertion-ordered id set. The ordered form is what gets persisted; the
/// hash index keeps membership checks O(1).
#[derive(Debug, Default)]
struct FavoriteSet {
    order: Vec<String>,
    index: HashSet<String>,
}

impl FavoriteSet {
    fn from_ids(ids: Vec<String>) -> Self {
        let mut set = FavoriteSet::default();
        for id in ids {
            set.insert(id);
        }
        set
    }

    fn contains(&self, id: &str) -> bool {
        self.index.contains(id)
    }

    fn insert(&mut self, id: String) {
        if self.index.insert(id.clone()) {
            self.order.push(id);
        }
    }

    /// Returns true if the id was present.
    fn remove(&mut self, id: &str) -> bool {
        if self.index.remove(id) {
            self.order.retain(|existing| existing != id);
            true
        } else {
            false
        }
    }

    fn ids(&self) -> Vec<String> {
        self.order.clone()
    }
}

//=========================================================================================
// The Catalog Store
//=========================================================================================

struct CatalogState {
    books: Vec<Book>,
    favorites: FavoriteSet,
}

/// The catalog-management core, constructed once per client session with
/// its collaborators injected.
pub struct CatalogStore {
    state: RwLock<CatalogState>,
    loading: Arc<AtomicBool>,
    storage: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn NotificationSink>,
    ids: Arc<dyn IdGenerator>,
}

impl CatalogStore {
    /// Opens the catalog for a new session.
    ///
    /// Books and favorites are loaded from storage when present; an absent
    /// key is seeded with the built-in list and persisted immediately so
    /// the key exists thereafter. A failing or undecodable load falls back
    /// to the seed for this session without overwriting the stored payload.
    ///
    /// `load_delay` models the one-time catalog-fetch latency: the store
    /// reports `is_loading() == true` until the delay elapses, then false
    /// for the rest of the session.
    pub async fn open(
        storage: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn NotificationSink>,
        ids: Arc<dyn IdGenerator>,
        load_delay: Duration,
    ) -> Self {
        let books = load_books_or_seed(storage.as_ref(), notifier.as_ref()).await;
        let favorites = load_favorites(storage.as_ref(), notifier.as_ref()).await;

        let loading = Arc::new(AtomicBool::new(true));
        let flag = loading.clone();
        tokio::spawn(async move {
            tokio::time::sleep(load_delay).await;
            flag.store(false, Ordering::Release);
        });

        Self {
            state: RwLock::new(CatalogState {
                books,
                favorites: FavoriteSet::from_ids(favorites),
            }),
            loading,
            storage,
            notifier,
            ids,
        }
    }

    //-------------------------------------------------------------------------------------
    // Mutations
    //-------------------------------------------------------------------------------------

    /// Adds a book to the end of the collection and persists it.
    ///
    /// The store assigns the id and starts the review list empty. Title and
    /// author must be non-empty and the year must be numeric.
    pub async fn add_book(&self, new_book: NewBook) -> CatalogResult<Book> {
        require_text("title", &new_book.title)?;
        require_text("author", &new_book.author)?;
        if new_book.year.trim().parse::<i64>().is_err() {
            return Err(CatalogError::Invalid(format!(
                "year '{}' is not a number",
                new_book.year
            )));
        }

        let book = Book {
            id: self.ids.next_id(),
            title: new_book.title,
            author: new_book.author,
            year: new_book.year,
            cover_url: new_book.cover_url,
            genre: new_book.genre,
            description: new_book.description,
            reviews: Vec::new(),
        };
        self.write_state().books.push(book.clone());

        self.persist_books().await;
        self.notifier.notify(
            NotificationKind::Info,
            "Book added",
            &format!("{} has been added to the collection.", book.title),
        );
        Ok(book)
    }

    /// Appends a review to the targeted book's review list and persists it.
    ///
    /// Returns [`CatalogError::NotFound`] when no book matches `book_id`;
    /// in that case nothing is persisted and no notification is emitted.
    pub async fn add_review(&self, book_id: &str, new_review: NewReview) -> CatalogResult<Review> {
        require_text("name", &new_review.user_name)?;
        if !(1..=5).contains(&new_review.rating) {
            return Err(CatalogError::Invalid(format!(
                "rating must be between 1 and 5, got {}",
                new_review.rating
            )));
        }

        let review = Review {
            id: self.ids.next_id(),
            user_name: new_review.user_name,
            rating: new_review.rating,
            comment: new_review.comment,
            date: Utc::now().format("%Y-%m-%d").to_string(),
        };
        {
            let mut state = self.write_state();
            let book = state
                .books
                .iter_mut()
                .find(|book| book.id == book_id)
                .ok_or_else(|| CatalogError::NotFound(book_id.to_string()))?;
            book.reviews.push(review.clone());
        }

        self.persist_books().await;
        self.notifier.notify(
            NotificationKind::Info,
            "Review added",
            "Your review has been published. Thank you for your feedback!",
        );
        Ok(review)
    }

    /// Flips `book_id`'s membership in the favorite set and persists it.
    ///
    /// There is no existence check against the collection: a favorite id
    /// with no matching book is legal and simply resolves to nothing when
    /// displayed. Returns whether the id is a favorite afterwards.
    pub async fn toggle_favorite(&self, book_id: &str) -> bool {
        let now_favorite = {
            let mut state = self.write_state();
            if state.favorites.remove(book_id) {
                false
            } else {
                state.favorites.insert(book_id.to_string());
                true
            }
        };

        self.persist_favorites().await;
        if now_favorite {
            self.notifier.notify(
                NotificationKind::Info,
                "Added to favorites",
                "This book has been added to your favorites.",
            );
        } else {
            self.notifier.notify(
                NotificationKind::Info,
                "Removed from favorites",
                "This book has been removed from your favorites.",
            );
        }
        now_favorite
    }

    //-------------------------------------------------------------------------------------
    // Queries (pure: no mutation, no persistence, no notification)
    //-------------------------------------------------------------------------------------

    /// Case-insensitive substring search over title, author, and genre.
    /// An empty or whitespace-only query returns the whole collection in
    /// its current order.
    pub fn search_books(&self, query: &str) -> Vec<Book> {
        let state = self.read_state();
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return state.books.clone();
        }
        state
            .books
            .iter()
            .filter(|book| {
                book.title.to_lowercase().contains(&term)
                    || book.author.to_lowercase().contains(&term)
                    || book.genre.to_lowercase().contains(&term)
            })
            .cloned()
            .collect()
    }

    /// Looks a book up by exact id.
    pub fn get_book_by_id(&self, id: &str) -> Option<Book> {
        self.read_state()
            .books
            .iter()
            .find(|book| book.id == id)
            .cloned()
    }

    /// The browse view's contract: filter by exact genre (`None` = all),
    /// then return a stably sorted copy. See [`query::filter_and_sort`].
    pub fn browse(&self, genre: Option<&str>, key: SortKey) -> Vec<Book> {
        query::filter_and_sort(&self.read_state().books, genre, key)
    }

    /// Snapshot of the full collection, in insertion order.
    pub fn books(&self) -> Vec<Book> {
        self.read_state().books.clone()
    }

    /// Snapshot of the favorite ids, in the order they were added.
    pub fn favorite_book_ids(&self) -> Vec<String> {
        self.read_state().favorites.ids()
    }

    pub fn is_favorite(&self, book_id: &str) -> bool {
        self.read_state().favorites.contains(book_id)
    }

    /// True from session start until the simulated catalog-fetch delay has
    /// elapsed, then permanently false.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    //-------------------------------------------------------------------------------------
    // Persistence (best-effort; never fails the triggering operation)
    //-------------------------------------------------------------------------------------

    async fn persist_books(&self) {
        let snapshot = self.read_state().books.clone();
        self.persist(BOOKS_KEY, serde_json::to_value(&snapshot)).await;
    }

    async fn persist_favorites(&self) {
        let ids = self.read_state().favorites.ids();
        self.persist(FAVORITES_KEY, serde_json::to_value(&ids)).await;
    }

    async fn persist(&self, key: &str, encoded: Result<Value, serde_json::Error>) {
        let value = match encoded {
            Ok(value) => value,
            Err(err) => {
                report_sync_failure(self.notifier.as_ref(), key, &err.to_string());
                return;
            }
        };
        if let Err(err) = self.storage.save(key, value).await {
            report_sync_failure(self.notifier.as_ref(), key, &err.to_string());
        }
    }

    // A poisoned lock means some other access panicked mid-operation; the
    // data it guards is still the authoritative session state, so recover
    // it rather than cascading the panic.
    fn read_state(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

//=========================================================================================
// Startup Loading & Failure Reporting
//=========================================================================================

async fn load_books_or_seed(
    storage: &dyn KeyValueStore,
    notifier: &dyn NotificationSink,
) -> Vec<Book> {
    match storage.load(BOOKS_KEY).await {
        Ok(Some(value)) => match serde_json::from_value::<Vec<Book>>(value) {
            Ok(books) => books,
            Err(err) => {
                report_load_failure(notifier, BOOKS_KEY, &err.to_string());
                seed::initial_books()
            }
        },
        Ok(None) => {
            // First run: persist the seed right away so the key exists
            // for every later session.
            let books = seed::initial_books();
            match serde_json::to_value(&books) {
                Ok(value) => {
                    if let Err(err) = storage.save(BOOKS_KEY, value).await {
                        report_sync_failure(notifier, BOOKS_KEY, &err.to_string());
                    }
                }
                Err(err) => report_sync_failure(notifier, BOOKS_KEY, &err.to_string()),
            }
            books
        }
        Err(err) => {
            report_load_failure(notifier, BOOKS_KEY, &err.to_string());
            seed::initial_books()
        }
    }
}

async fn load_favorites(
    storage: &dyn KeyValueStore,
    notifier: &dyn NotificationSink,
) -> Vec<String> {
    match storage.load(FAVORITES_KEY).await {
        Ok(Some(value)) => match serde_json::from_value::<Vec<String>>(value) {
            Ok(ids) => ids,
            Err(err) => {
                report_load_failure(notifier, FAVORITES_KEY, &err.to_string());
                Vec::new()
            }
        },
        Ok(None) => {
            // Same first-run discipline as the books key.
            if let Err(err) = storage.save(FAVORITES_KEY, Value::Array(Vec::new())).await {
                report_sync_failure(notifier, FAVORITES_KEY, &err.to_string());
            }
            Vec::new()
        }
        Err(err) => {
            report_load_failure(notifier, FAVORITES_KEY, &err.to_string());
            Vec::new()
        }
    }
}

fn report_load_failure(notifier: &dyn NotificationSink, key: &str, detail: &str) {
    tracing::warn!(key, detail, "could not load catalog state from storage");
    notifier.notify(
        NotificationKind::Error,
        "Could not restore your library",
        "Your saved library could not be read, so the built-in catalog is shown instead.",
    );
}

fn report_sync_failure(notifier: &dyn NotificationSink, key: &str, detail: &str) {
    tracing::warn!(key, detail, "could not sync catalog state to storage");
    notifier.notify(
        NotificationKind::Error,
        "Storage sync failed",
        "Your changes are kept for this session but could not be saved.",
    );
}

fn require_text(field: &'static str, value: &str) -> CatalogResult<()> {
    if value.trim().is_empty() {
        Err(CatalogError::Invalid(format!(
            "{} must not be empty",
            field
        )))
    } else {
        Ok(())
    }
}

//=========================================================================================
// Tests
//=========================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::PortError;
    use async_trait::async_trait;
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
    use std::sync::Mutex;

    /// In-memory `KeyValueStore` that records every saved key and can be
    /// switched into a failing mode.
    #[derive(Default)]
    struct MemoryStore {
        values: Mutex<HashMap<String, Value>>,
        saved_keys: Mutex<Vec<String>>,
        fail_saves: AtomicBool,
    }

    impl MemoryStore {
        fn failing() -> Self {
            let store = MemoryStore::default();
            store.fail_saves.store(true, Ordering::Relaxed);
            store
        }

        fn saved_keys(&self) -> Vec<String> {
            self.saved_keys.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl KeyValueStore for MemoryStore {
        async fn load(&self, key: &str) -> crate::ports::PortResult<Option<Value>> {
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        async fn save(&self, key: &str, value: Value) -> crate::ports::PortResult<()> {
            if self.fail_saves.load(Ordering::Relaxed) {
                return Err(PortError::Unexpected("quota exceeded".to_string()));
            }
            self.saved_keys.lock().unwrap().push(key.to_string());
            self.values.lock().unwrap().insert(key.to_string(), value);
            Ok(())
        }
    }

    /// Notification sink that records everything it is handed.
    #[derive(Default)]
    struct RecordingNotifier {
        notes: Mutex<Vec<(NotificationKind, String, String)>>,
    }

    impl RecordingNotifier {
        fn notes(&self) -> Vec<(NotificationKind, String, String)> {
            self.notes.lock().unwrap().clone()
        }
    }

    impl NotificationSink for RecordingNotifier {
        fn notify(&self, kind: NotificationKind, title: &str, description: &str) {
            self.notes
                .lock()
                .unwrap()
                .push((kind, title.to_string(), description.to_string()));
        }
    }

    /// Deterministic id source; the prefix keeps generated ids disjoint
    /// from the seed id spaces.
    struct SeqIds(AtomicU64);

    impl SeqIds {
        fn new() -> Self {
            SeqIds(AtomicU64::new(1))
        }
    }

    impl IdGenerator for SeqIds {
        fn next_id(&self) -> String {
            format!("gen-{}", self.0.fetch_add(1, Ordering::Relaxed))
        }
    }

    struct Harness {
        storage: Arc<MemoryStore>,
        notifier: Arc<RecordingNotifier>,
        store: CatalogStore,
    }

    async fn open_store() -> Harness {
        open_with(Arc::new(MemoryStore::default())).await
    }

    async fn open_with(storage: Arc<MemoryStore>) -> Harness {
        let notifier = Arc::new(RecordingNotifier::default());
        let store = CatalogStore::open(
            storage.clone(),
            notifier.clone(),
            Arc::new(SeqIds::new()),
            Duration::ZERO,
        )
        .await;
        Harness {
            storage,
            notifier,
            store,
        }
    }

    fn sample_book(title: &str) -> NewBook {
        NewBook {
            title: title.to_string(),
            author: "Jane Tester".to_string(),
            year: "2024".to_string(),
            cover_url: "https://example.com/cover.jpg".to_string(),
            genre: "Fiction".to_string(),
            description: "A book used by the tests.".to_string(),
        }
    }

    fn sample_review(user_name: &str, rating: u8) -> NewReview {
        NewReview {
            user_name: user_name.to_string(),
            rating,
            comment: "Good".to_string(),
        }
    }

    #[tokio::test]
    async fn first_run_seeds_the_catalog_and_persists_it() {
        let harness = open_store().await;
        assert_eq!(harness.store.books().len(), 8);
        assert!(harness.store.favorite_book_ids().is_empty());
        // The first-run writes make both keys exist for later sessions.
        assert_eq!(
            harness.storage.saved_keys(),
            vec![BOOKS_KEY.to_string(), FAVORITES_KEY.to_string()]
        );
    }

    #[tokio::test]
    async fn open_prefers_persisted_state_over_the_seed() {
        let storage = Arc::new(MemoryStore::default());
        {
            let first = open_with(storage.clone()).await;
            first.store.add_book(sample_book("Persisted Before Restart")).await.unwrap();
            first.store.toggle_favorite("2").await;
        }
        let second = open_with(storage).await;
        assert_eq!(second.store.books().len(), 9);
        assert!(second.store.get_book_by_id("gen-1").is_some());
        assert_eq!(second.store.favorite_book_ids(), vec!["2".to_string()]);
    }

    #[tokio::test]
    async fn add_book_appends_with_fresh_id_and_notifies() {
        let harness = open_store().await;
        let added = harness.store.add_book(sample_book("Snow Crash")).await.unwrap();

        assert_eq!(added.id, "gen-1");
        assert!(added.reviews.is_empty());
        let books = harness.store.books();
        assert_eq!(books.last().unwrap().title, "Snow Crash");

        let notes = harness.notifier.notes();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].0, NotificationKind::Info);
        assert_eq!(notes[0].1, "Book added");
        assert!(notes[0].2.contains("Snow Crash"));
        // two first-run writes + the mutation write
        assert_eq!(harness.storage.saved_keys().len(), 3);
    }

    #[tokio::test]
    async fn add_book_rejects_blank_required_fields_and_bad_years() {
        let harness = open_store().await;
        let saves_before = harness.storage.saved_keys().len();

        let mut blank_title = sample_book("ignored");
        blank_title.title = "   ".to_string();
        assert!(matches!(
            harness.store.add_book(blank_title).await,
            Err(CatalogError::Invalid(_))
        ));

        let mut blank_author = sample_book("Valid Title");
        blank_author.author = String::new();
        assert!(matches!(
            harness.store.add_book(blank_author).await,
            Err(CatalogError::Invalid(_))
        ));

        let mut bad_year = sample_book("Valid Title");
        bad_year.year = "MCMLXXXIV".to_string();
        assert!(matches!(
            harness.store.add_book(bad_year).await,
            Err(CatalogError::Invalid(_))
        ));

        // Nothing was persisted or announced for any rejected input.
        assert_eq!(harness.storage.saved_keys().len(), saves_before);
        assert!(harness.notifier.notes().is_empty());
        assert_eq!(harness.store.books().len(), 8);
    }

    #[tokio::test]
    async fn ids_stay_pairwise_distinct_across_books_and_reviews() {
        let harness = open_store().await;
        for i in 0..4 {
            harness.store.add_book(sample_book(&format!("Book {}", i))).await.unwrap();
        }
        for book_id in ["1", "3", "gen-1", "gen-2"] {
            harness
                .store
                .add_review(book_id, sample_review("Reader", 4))
                .await
                .unwrap();
        }

        let mut seen = HashSet::new();
        for book in harness.store.books() {
            assert!(seen.insert(book.id.clone()), "duplicate book id {}", book.id);
            for review in &book.reviews {
                assert!(seen.insert(review.id.clone()), "duplicate review id {}", review.id);
            }
        }
    }

    #[tokio::test]
    async fn add_review_appends_at_the_end_and_leaves_prior_reviews_alone() {
        let harness = open_store().await;
        let before = harness.store.get_book_by_id("1").unwrap().reviews;

        let added = harness
            .store
            .add_review("1", sample_review("Reader", 3))
            .await
            .unwrap();

        let after = harness.store.get_book_by_id("1").unwrap().reviews;
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after[..before.len()], before[..]);
        assert_eq!(after.last().unwrap(), &added);
        assert_eq!(added.date, Utc::now().format("%Y-%m-%d").to_string());
    }

    #[tokio::test]
    async fn add_review_to_a_missing_book_reports_not_found_quietly() {
        let harness = open_store().await;
        let saves_before = harness.storage.saved_keys().len();

        let result = harness.store.add_review("999", sample_review("Reader", 4)).await;
        assert!(matches!(result, Err(CatalogError::NotFound(_))));

        // The failure is reported to the caller only: no write, no toast.
        assert_eq!(harness.storage.saved_keys().len(), saves_before);
        assert!(harness.notifier.notes().is_empty());
    }

    #[tokio::test]
    async fn add_review_rejects_out_of_range_ratings_and_blank_names() {
        let harness = open_store().await;
        for rating in [0, 6] {
            assert!(matches!(
                harness.store.add_review("1", sample_review("Reader", rating)).await,
                Err(CatalogError::Invalid(_))
            ));
        }
        assert!(matches!(
            harness.store.add_review("1", sample_review("  ", 4)).await,
            Err(CatalogError::Invalid(_))
        ));
        assert_eq!(harness.store.get_book_by_id("1").unwrap().reviews.len(), 2);
    }

    #[tokio::test]
    async fn toggle_favorite_twice_is_an_involution() {
        let harness = open_store().await;
        let before = harness.store.favorite_book_ids();

        assert!(harness.store.toggle_favorite("3").await);
        assert!(harness.store.is_favorite("3"));
        assert!(!harness.store.toggle_favorite("3").await);
        assert!(!harness.store.is_favorite("3"));

        assert_eq!(harness.store.favorite_book_ids(), before);
        let notes = harness.notifier.notes();
        assert_eq!(notes[0].1, "Added to favorites");
        assert_eq!(notes[1].1, "Removed from favorites");
    }

    #[tokio::test]
    async fn favorites_may_reference_ids_with_no_matching_book() {
        let harness = open_store().await;
        assert!(harness.store.toggle_favorite("does-not-exist").await);
        assert_eq!(
            harness.store.favorite_book_ids(),
            vec!["does-not-exist".to_string()]
        );
        assert!(harness.store.get_book_by_id("does-not-exist").is_none());
    }

    #[tokio::test]
    async fn blank_queries_return_the_whole_collection_unchanged() {
        let harness = open_store().await;
        let all = harness.store.books();
        assert_eq!(harness.store.search_books(""), all);
        assert_eq!(harness.store.search_books("   "), all);
    }

    #[tokio::test]
    async fn search_matches_title_author_and_genre_case_insensitively() {
        let harness = open_store().await;

        let by_title = harness.store.search_books("hobbit");
        assert!(by_title.iter().any(|b| b.title == "The Hobbit"));

        let by_author = harness.store.search_books("TOLKIEN");
        assert!(by_author.iter().any(|b| b.title == "The Hobbit"));

        let by_genre = harness.store.search_books("fantasy");
        assert!(by_genre.iter().any(|b| b.title == "The Hobbit"));

        let by_seed_author = harness.store.search_books("orwell");
        assert_eq!(by_seed_author.len(), 1);
        assert_eq!(by_seed_author[0].id, "3");

        assert!(harness.store.search_books("nonexistent-zzz").is_empty());
    }

    #[tokio::test]
    async fn search_trims_the_query_and_preserves_collection_order() {
        let harness = open_store().await;
        let hits = harness.store.search_books("  computer science  ");
        let ids: Vec<&str> = hits.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "6", "7", "8"]);
    }

    #[tokio::test]
    async fn browse_filters_then_sorts_without_touching_the_collection() {
        let harness = open_store().await;
        let cs = harness.store.browse(Some("Computer Science"), SortKey::YearAsc);
        let years: Vec<i64> = cs.iter().map(|b| b.year.parse().unwrap()).collect();
        assert_eq!(years, vec![2016, 2019, 2020, 2021]);

        // The underlying collection keeps insertion order.
        let ids: Vec<String> = harness.store.books().iter().map(|b| b.id.clone()).collect();
        assert_eq!(ids, (1..=8).map(|n| n.to_string()).collect::<Vec<_>>());
    }

    #[tokio::test(start_paused = true)]
    async fn loading_flag_flips_to_false_exactly_once_after_the_delay() {
        let store = CatalogStore::open(
            Arc::new(MemoryStore::default()),
            Arc::new(RecordingNotifier::default()),
            Arc::new(SeqIds::new()),
            Duration::from_millis(1000),
        )
        .await;

        assert!(store.is_loading());
        // Let the timer task register its sleep before moving the clock.
        tokio::task::yield_now().await;
        assert!(store.is_loading());

        tokio::time::advance(Duration::from_millis(1001)).await;
        tokio::task::yield_now().await;
        assert!(!store.is_loading());

        // Never reverts.
        tokio::time::advance(Duration::from_secs(10)).await;
        tokio::task::yield_now().await;
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn failed_saves_keep_the_in_memory_state_and_warn_the_user() {
        let harness = open_with(Arc::new(MemoryStore::failing())).await;
        // Opening against a failing store already warns about the seed write.
        let notes_before = harness.notifier.notes().len();

        let added = harness.store.add_book(sample_book("Unsaved")).await.unwrap();
        assert!(harness.store.get_book_by_id(&added.id).is_some());

        let notes = harness.notifier.notes();
        // The success toast still fires, alongside the sync warning.
        assert!(notes[notes_before..]
            .iter()
            .any(|(kind, title, _)| *kind == NotificationKind::Error && title == "Storage sync failed"));
        assert!(notes[notes_before..]
            .iter()
            .any(|(kind, title, _)| *kind == NotificationKind::Info && title == "Book added"));
    }

    #[tokio::test]
    async fn undecodable_books_payload_falls_back_to_seed_without_overwriting() {
        let storage = Arc::new(MemoryStore::default());
        storage
            .values
            .lock()
            .unwrap()
            .insert(BOOKS_KEY.to_string(), Value::String("not a list".to_string()));

        let harness = open_with(storage.clone()).await;
        assert_eq!(harness.store.books().len(), 8);
        // The broken payload is left in place for inspection; only the
        // absent favorites key gets its first-run write.
        assert_eq!(harness.storage.saved_keys(), vec![FAVORITES_KEY.to_string()]);
        assert!(harness
            .notifier
            .notes()
            .iter()
            .any(|(kind, _, _)| *kind == NotificationKind::Error));
    }

    // The concrete end-to-end scenario: favorite book "3", review it,
    // search for its author.
    #[tokio::test]
    async fn dystopian_scenario_round_trip() {
        let harness = open_store().await;
        let book = harness.store.get_book_by_id("3").unwrap();
        assert_eq!(book.title, "1984");
        assert_eq!(book.genre, "Dystopian");
        let reviews_before = book.reviews.len();

        harness.store.toggle_favorite("3").await;
        assert!(harness.store.favorite_book_ids().contains(&"3".to_string()));

        let review = harness
            .store
            .add_review("3", sample_review("Ayesha", 4))
            .await
            .unwrap();
        let reviews = harness.store.get_book_by_id("3").unwrap().reviews;
        assert_eq!(reviews.len(), reviews_before + 1);
        assert_eq!(reviews.last().unwrap().rating, 4);
        assert_eq!(reviews.last().unwrap().user_name, "Ayesha");
        assert_eq!(review.id, "gen-1");
        assert_eq!(review.date, Utc::now().format("%Y-%m-%d").to_string());

        let hits = harness.store.search_books("orwell");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "3");
    }
}
