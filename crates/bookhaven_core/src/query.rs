//! crates/bookhaven_core/src/query.rs
//!
//! Pure filter/sort queries over a book collection. These are functions of
//! (collection, genre, sort key) with no access to the store's mutable
//! state, so the browse behavior can be tested without any UI harness.

use crate::domain::Book;

/// The orderings the browse surface offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    TitleAsc,
    AuthorAsc,
    YearAsc,
    YearDesc,
}

/// Filters `books` by exact genre match (`None` means "all genres"), then
/// returns a stably sorted copy ordered by `key`. The input slice is never
/// reordered.
pub fn filter_and_sort(books: &[Book], genre: Option<&str>, key: SortKey) -> Vec<Book> {
    let mut selected: Vec<Book> = match genre {
        Some(genre) => books.iter().filter(|b| b.genre == genre).cloned().collect(),
        None => books.to_vec(),
    };

    match key {
        SortKey::TitleAsc => {
            selected.sort_by(|a, b| caseless(&a.title).cmp(&caseless(&b.title)))
        }
        SortKey::AuthorAsc => {
            selected.sort_by(|a, b| caseless(&a.author).cmp(&caseless(&b.author)))
        }
        SortKey::YearAsc => selected.sort_by_key(|b| year_value(&b.year)),
        SortKey::YearDesc => {
            selected.sort_by(|a, b| year_value(&b.year).cmp(&year_value(&a.year)))
        }
    }

    selected
}

fn caseless(s: &str) -> String {
    s.to_lowercase()
}

/// Numeric value of a year string for sorting. Unparsable years order
/// before every real year so a malformed legacy record cannot panic or
/// scramble an otherwise valid ordering.
fn year_value(year: &str) -> i64 {
    year.trim().parse::<i64>().unwrap_or(i64::MIN)
}
