//! Character stage.
//!
//! Each pattern must be met by one character on its own: a book whose traits
//! are spread over two characters does not satisfy a pattern requiring both.
//! Separate patterns may be met by separate characters.

use std::collections::HashSet;
use tracing::debug;

use crate::error::Result;
use crate::filter::CharacterPattern;
use crate::model::TraitId;
use crate::store::{BookSet, EntityStore};

/// Whether one character's traits satisfy `pattern`. An empty pattern matches
/// any character.
pub fn pattern_matches(pattern: &CharacterPattern, traits: &HashSet<TraitId>) -> bool {
    let sets = &pattern.traits;
    sets.must_have_all.iter().all(|t| traits.contains(t))
        && !sets.must_not_have.iter().any(|t| traits.contains(t))
        && (sets.must_have_any_of.is_empty()
            || sets.must_have_any_of.iter().any(|t| traits.contains(t)))
}

pub fn apply<S: EntityStore + ?Sized>(
    store: &S,
    patterns: &[CharacterPattern],
    candidates: BookSet,
) -> Result<BookSet> {
    if patterns.is_empty() || candidates.is_empty() {
        return Ok(candidates);
    }

    let characters = store.character_traits(&candidates)?;
    let mut remaining = candidates;
    for (idx, pattern) in patterns.iter().enumerate() {
        remaining = characters
            .iter()
            .filter(|c| remaining.contains(&c.book) && pattern_matches(pattern, &c.traits))
            .map(|c| c.book)
            .collect();
        debug!(stage = "character", pattern = idx, candidates = remaining.len());
        if remaining.is_empty() {
            break;
        }
    }
    Ok(remaining)
}
