//! Scalar stage: title, rating, page and date bounds.
//!
//! The predicate is compiled once from the [`ScalarFilter`] and handed to the
//! store's scan, so only ids of matching books come back.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::filter::{RatingFilter, RatingMode, ScalarFilter};
use crate::model::Book;
use crate::store::{BookSet, EntityStore};

/// A scalar filter with unset bounds and sentinels already stripped.
#[derive(Debug, Clone, Default)]
pub struct ScalarPredicate {
    title: Option<String>,
    rating: Option<RatingFilter>,
    pages_low: Option<u32>,
    pages_high: Option<u32>,
    date_low: Option<DateTime<Utc>>,
    date_high: Option<DateTime<Utc>>,
}

impl ScalarPredicate {
    pub fn compile(filter: &ScalarFilter) -> Self {
        Self {
            title: filter.title_needle(),
            rating: filter.effective_rating(),
            pages_low: filter.effective_pages_low(),
            pages_high: filter.effective_pages_high(),
            date_low: filter.effective_date_low(),
            date_high: filter.effective_date_high(),
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        if let Some(needle) = &self.title {
            if !book.title_contains(needle) {
                return false;
            }
        }
        if let Some(rating) = &self.rating {
            if !rating_matches(rating, book.rating) {
                return false;
            }
        }
        if self.pages_low.is_some_and(|low| book.pages < low) {
            return false;
        }
        if self.pages_high.is_some_and(|high| book.pages > high) {
            return false;
        }
        if self.date_low.is_some_and(|low| book.date_added < low) {
            return false;
        }
        if self.date_high.is_some_and(|high| book.date_added > high) {
            return false;
        }
        true
    }
}

fn rating_matches(filter: &RatingFilter, rating: Option<u8>) -> bool {
    match (filter.mode, filter.value) {
        (RatingMode::Exact, Some(value)) => rating == Some(value),
        // The unrated sentinel.
        (RatingMode::Exact, None) => rating.is_none(),
        (RatingMode::AtLeast, Some(value)) => rating.is_some_and(|r| r >= value),
        (RatingMode::AtLeast, None) => true,
    }
}

/// Ids of every book passing the scalar block. An empty block returns the
/// whole library.
pub fn apply<S: EntityStore + ?Sized>(store: &S, filter: &ScalarFilter) -> Result<BookSet> {
    let predicate = ScalarPredicate::compile(filter);
    store.scan_books(&|book| predicate.matches(book))
}
