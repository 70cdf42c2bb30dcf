//! Specification validation.
//!
//! The UI builds mode sets through [`super::FilterMode`], which cannot produce
//! overlaps. Anything else that reaches the compiler malformed is a caller bug
//! and is reported against the offending field instead of being coerced.

use std::collections::BTreeSet;
use std::fmt::Display;

use super::{FacetFilter, FilterSpec, ModeSet, ScalarFilter};
use crate::error::ValidationError;

/// Highest rating a book can carry.
pub const MAX_RATING: u8 = 10;

pub(super) fn validate_spec(spec: &FilterSpec) -> Result<(), ValidationError> {
    validate_scalar(&spec.scalar)?;

    for (category, facet) in &spec.categories {
        validate_facet(&format!("categories.{}", category), facet)?;
    }

    for (idx, pattern) in spec.patterns().iter().enumerate() {
        check_disjoint(&format!("characters[{}]", idx), &pattern.traits, "trait")?;
    }

    Ok(())
}

fn validate_scalar(scalar: &ScalarFilter) -> Result<(), ValidationError> {
    if let Some(value) = scalar.rating.and_then(|r| r.value) {
        if value > MAX_RATING {
            return Err(ValidationError::new(
                "scalar.rating",
                format!("rating {} is above the maximum of {}", value, MAX_RATING),
            ));
        }
    }

    if let (Some(low), Some(high)) = (scalar.effective_pages_low(), scalar.effective_pages_high()) {
        if low > high {
            return Err(ValidationError::new(
                "scalar.pages",
                format!("low bound {} is above high bound {}", low, high),
            ));
        }
    }

    if let (Some(low), Some(high)) = (scalar.effective_date_low(), scalar.effective_date_high()) {
        if low > high {
            return Err(ValidationError::new(
                "scalar.date",
                format!("low bound {} is after high bound {}", low, high),
            ));
        }
    }

    Ok(())
}

fn validate_facet(field: &str, facet: &FacetFilter) -> Result<(), ValidationError> {
    check_disjoint(field, &facet.values, "value")?;

    if facet.unlinked {
        if !facet.values.must_have_all.is_empty() {
            return Err(ValidationError::new(
                field,
                "an unlinked facet cannot require values",
            ));
        }
        if !facet.values.must_have_any_of.is_empty() {
            return Err(ValidationError::new(
                field,
                "an unlinked facet cannot offer optional values",
            ));
        }
    }

    Ok(())
}

/// Fails on the first id found in more than one mode set.
fn check_disjoint<T>(field: &str, sets: &ModeSet<T>, noun: &str) -> Result<(), ValidationError>
where
    T: Ord + Copy + Display,
{
    let pairs: [(&BTreeSet<T>, &BTreeSet<T>, &str); 3] = [
        (
            &sets.must_have_all,
            &sets.must_not_have,
            "must-have and must-not-have",
        ),
        (
            &sets.must_have_all,
            &sets.must_have_any_of,
            "must-have and may-have",
        ),
        (
            &sets.must_not_have,
            &sets.must_have_any_of,
            "must-not-have and may-have",
        ),
    ];

    for (left, right, modes) in pairs {
        if let Some(id) = left.intersection(right).next() {
            return Err(ValidationError::new(
                field,
                format!("{} {} is both {}", noun, id, modes),
            ));
        }
    }

    Ok(())
}
