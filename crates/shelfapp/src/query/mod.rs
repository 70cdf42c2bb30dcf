//! # Faceted Query Compiler
//!
//! Turns a [`FilterSpec`] into the ordered list of books it selects. The
//! compiler is a pipeline of typed stages over explicit sets of book ids:
//!
//! 1. **Validate**: malformed specifications fail before the store is touched.
//! 2. **Scalar** ([`scalar`]): title, rating, pages and date-added bounds,
//!    pushed down into the store scan.
//! 3. **Category** ([`category`]): per-category AND (and `unlinked`), then the
//!    NOT pool, then the OR pool.
//! 4. **Character** ([`character`]): each pattern must be met by a single
//!    character; patterns are ANDed.
//! 5. **Assembly** ([`sort`]): fetch full records and order them.
//!
//! An empty intermediate set short-circuits the remaining stages. A missing
//! or unconstrained specification skips the pipeline entirely: every book is
//! returned, sorted, without any link lookup.
//!
//! Evaluation reads through [`EntityStore`] only and keeps no state between
//! calls, so the same store and specification always give the same list
//! (the random key aside).

use rand::Rng;
use tracing::debug;

use crate::error::Result;
use crate::filter::FilterSpec;
use crate::model::Book;
use crate::store::{BookSet, EntityStore};

pub mod category;
pub mod character;
pub mod scalar;
pub mod sort;

pub use sort::SortKey;

/// Evaluates `spec` against `store` and returns the matching books ordered
/// by `sort`. `None` selects every book.
pub fn evaluate<S: EntityStore + ?Sized>(
    store: &S,
    spec: Option<&FilterSpec>,
    sort: SortKey,
) -> Result<Vec<Book>> {
    evaluate_with_rng(store, spec, sort, &mut rand::thread_rng())
}

/// [`evaluate`] with an explicit source of randomness for [`SortKey::Random`].
pub fn evaluate_with_rng<S, R>(
    store: &S,
    spec: Option<&FilterSpec>,
    sort: SortKey,
    rng: &mut R,
) -> Result<Vec<Book>>
where
    S: EntityStore + ?Sized,
    R: Rng + ?Sized,
{
    if let Some(spec) = spec {
        spec.validate()?;
    }

    let mut books = match spec.filter(|s| !s.is_unconstrained()) {
        None => {
            let books = store.all_books()?;
            debug!(books = books.len(), "no constraints, returning every book");
            books
        }
        Some(spec) => {
            let ids = matching_ids(store, spec)?;
            store.books(&ids)?
        }
    };

    sort::sort_books(&mut books, sort, rng);
    Ok(books)
}

/// Runs the filtering stages and returns the surviving ids, unordered.
/// The specification is assumed valid.
pub fn matching_ids<S: EntityStore + ?Sized>(store: &S, spec: &FilterSpec) -> Result<BookSet> {
    let candidates = scalar::apply(store, &spec.scalar)?;
    debug!(stage = "scalar", candidates = candidates.len());
    if candidates.is_empty() {
        return Ok(candidates);
    }

    let candidates = category::apply(store, spec, candidates)?;
    if candidates.is_empty() {
        return Ok(candidates);
    }

    character::apply(store, spec.patterns(), candidates)
}
