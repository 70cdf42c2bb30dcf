//! Category stage.
//!
//! Per category, AND values narrow the candidates by exact link counting and
//! an `unlinked` facet keeps books with no link at all. NOT and OR values are
//! pooled over every category and applied once each, NOT first.

use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::error::Result;
use crate::filter::FilterSpec;
use crate::model::{Category, ValueId};
use crate::store::{BookSet, EntityStore};

pub fn apply<S: EntityStore + ?Sized>(
    store: &S,
    spec: &FilterSpec,
    mut candidates: BookSet,
) -> Result<BookSet> {
    for (category, facet) in &spec.categories {
        let required = &facet.values.must_have_all;
        if !required.is_empty() {
            candidates = require_all(store, *category, required, &candidates)?;
        }
        if facet.unlinked {
            let bare = store.books_without_links(*category)?;
            candidates.retain(|id| bare.contains(id));
        }
        debug!(stage = "and", %category, candidates = candidates.len());
        if candidates.is_empty() {
            return Ok(candidates);
        }
    }

    let excluded = spec.pooled_not();
    if !excluded.is_empty() {
        let hit = linked_to_pooled(store, &excluded)?;
        candidates.retain(|id| !hit.contains(id));
        debug!(stage = "not", pooled = excluded.len(), candidates = candidates.len());
        if candidates.is_empty() {
            return Ok(candidates);
        }
    }

    let optional = spec.pooled_any();
    if !optional.is_empty() {
        let hit = linked_to_pooled(store, &optional)?;
        candidates.retain(|id| hit.contains(id));
        debug!(stage = "or", pooled = optional.len(), candidates = candidates.len());
    }

    Ok(candidates)
}

/// Candidates linked to every one of `values`.
fn require_all<S: EntityStore + ?Sized>(
    store: &S,
    category: Category,
    values: &BTreeSet<ValueId>,
    candidates: &BookSet,
) -> Result<BookSet> {
    let counts = store.linked_value_counts(category, values, candidates)?;
    Ok(counts
        .into_iter()
        .filter(|(book, count)| *count == values.len() && candidates.contains(book))
        .map(|(book, _)| book)
        .collect())
}

/// Books linked to at least one pooled `(category, value)` pair.
fn linked_to_pooled<S: EntityStore + ?Sized>(
    store: &S,
    pooled: &BTreeSet<(Category, ValueId)>,
) -> Result<BookSet> {
    let mut by_category: BTreeMap<Category, BTreeSet<ValueId>> = BTreeMap::new();
    for (category, value) in pooled {
        by_category.entry(*category).or_default().insert(*value);
    }

    let mut books = BookSet::new();
    for (category, values) in &by_category {
        books.extend(store.books_linked_to_any(*category, values)?);
    }
    Ok(books)
}
