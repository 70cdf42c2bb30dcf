//! # Filter Specification
//!
//! The structure a UI builds from user interaction and hands to
//! [`crate::query::evaluate`]. It has three blocks:
//!
//! | Block | Type | Meaning |
//! |-------|------|---------|
//! | scalar | [`ScalarFilter`] | title substring, rating, page and date bounds |
//! | categories | [`FacetFilter`] per [`Category`] | AND / NOT / OR value sets |
//! | characters | list of [`CharacterPattern`] | per-character trait constraints |
//!
//! ## Modes
//!
//! Every facet value and every trait sits in at most one of three sets:
//!
//! - **must have all** (`AND`): the book (or character) must carry every one.
//! - **must not have** (`NOT`): it must carry none.
//! - **must have any of** (`OR`): it must carry at least one, when non-empty.
//!
//! Builders that work from per-item UI state use [`FilterMode`] and
//! [`ModeSet::set_mode`], which moves an id between sets so the three stay
//! disjoint. Specifications assembled by hand (or decoded from JSON) are
//! checked by [`FilterSpec::validate`] before evaluation.
//!
//! ## Absent vs. empty
//!
//! A category missing from `categories` and a category present with three
//! empty sets both impose no constraint. Requiring a book to have *no* links
//! in a category is spelled explicitly with [`FacetFilter::unlinked`].

mod validate;

pub use validate::MAX_RATING;

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::Result;
use crate::model::{Category, TraitId, ValueId};

/// Date bounds at or before this instant mean "no constraint".
pub static DATE_SENTINEL: Lazy<DateTime<Utc>> = Lazy::new(|| {
    Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
});

/// The filter state a single value or trait can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    #[default]
    Unset,
    MustHave,
    MustNotHave,
    MayHave,
}

impl FilterMode {
    /// Cycles through the modes the way a list widget toggles on click.
    pub fn next(self) -> Self {
        match self {
            FilterMode::Unset => FilterMode::MustHave,
            FilterMode::MustHave => FilterMode::MustNotHave,
            FilterMode::MustNotHave => FilterMode::MayHave,
            FilterMode::MayHave => FilterMode::Unset,
        }
    }
}

/// Three disjoint id sets: AND, NOT and OR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de> + Ord"
))]
pub struct ModeSet<T: Ord> {
    #[serde(default)]
    pub must_have_all: BTreeSet<T>,
    #[serde(default)]
    pub must_not_have: BTreeSet<T>,
    #[serde(default)]
    pub must_have_any_of: BTreeSet<T>,
}

impl<T: Ord> Default for ModeSet<T> {
    fn default() -> Self {
        Self {
            must_have_all: BTreeSet::new(),
            must_not_have: BTreeSet::new(),
            must_have_any_of: BTreeSet::new(),
        }
    }
}

impl<T: Ord + Copy> ModeSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the sets from `(id, mode)` pairs. Later pairs win.
    pub fn from_modes<I>(modes: I) -> Self
    where
        I: IntoIterator<Item = (T, FilterMode)>,
    {
        let mut set = Self::default();
        for (id, mode) in modes {
            set.set_mode(id, mode);
        }
        set
    }

    pub fn all<I: IntoIterator<Item = T>>(mut self, ids: I) -> Self {
        for id in ids {
            self.set_mode(id, FilterMode::MustHave);
        }
        self
    }

    pub fn none<I: IntoIterator<Item = T>>(mut self, ids: I) -> Self {
        for id in ids {
            self.set_mode(id, FilterMode::MustNotHave);
        }
        self
    }

    pub fn any<I: IntoIterator<Item = T>>(mut self, ids: I) -> Self {
        for id in ids {
            self.set_mode(id, FilterMode::MayHave);
        }
        self
    }

    /// Puts `id` in the set for `mode`, removing it from the other two.
    pub fn set_mode(&mut self, id: T, mode: FilterMode) {
        self.must_have_all.remove(&id);
        self.must_not_have.remove(&id);
        self.must_have_any_of.remove(&id);
        match mode {
            FilterMode::Unset => {}
            FilterMode::MustHave => {
                self.must_have_all.insert(id);
            }
            FilterMode::MustNotHave => {
                self.must_not_have.insert(id);
            }
            FilterMode::MayHave => {
                self.must_have_any_of.insert(id);
            }
        }
    }

    pub fn mode_of(&self, id: &T) -> FilterMode {
        if self.must_have_all.contains(id) {
            FilterMode::MustHave
        } else if self.must_not_have.contains(id) {
            FilterMode::MustNotHave
        } else if self.must_have_any_of.contains(id) {
            FilterMode::MayHave
        } else {
            FilterMode::Unset
        }
    }

    pub fn is_empty(&self) -> bool {
        self.must_have_all.is_empty()
            && self.must_not_have.is_empty()
            && self.must_have_any_of.is_empty()
    }
}

/// The AND/NOT/OR sets for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetFilter {
    #[serde(flatten)]
    pub values: ModeSet<ValueId>,
    /// Keep only books with no link at all in this category.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub unlinked: bool,
}

impl FacetFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all<I: IntoIterator<Item = u64>>(mut self, ids: I) -> Self {
        self.values = self.values.all(ids.into_iter().map(ValueId));
        self
    }

    pub fn none<I: IntoIterator<Item = u64>>(mut self, ids: I) -> Self {
        self.values = self.values.none(ids.into_iter().map(ValueId));
        self
    }

    pub fn any<I: IntoIterator<Item = u64>>(mut self, ids: I) -> Self {
        self.values = self.values.any(ids.into_iter().map(ValueId));
        self
    }

    pub fn unlinked() -> Self {
        Self {
            unlinked: true,
            ..Self::default()
        }
    }

    pub fn set_mode(&mut self, id: ValueId, mode: FilterMode) {
        self.values.set_mode(id, mode);
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && !self.unlinked
    }
}

/// Trait constraints that a single character must satisfy on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPattern {
    #[serde(flatten)]
    pub traits: ModeSet<TraitId>,
}

impl CharacterPattern {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all<I: IntoIterator<Item = u64>>(mut self, ids: I) -> Self {
        self.traits = self.traits.all(ids.into_iter().map(TraitId));
        self
    }

    pub fn none<I: IntoIterator<Item = u64>>(mut self, ids: I) -> Self {
        self.traits = self.traits.none(ids.into_iter().map(TraitId));
        self
    }

    pub fn any<I: IntoIterator<Item = u64>>(mut self, ids: I) -> Self {
        self.traits = self.traits.any(ids.into_iter().map(TraitId));
        self
    }

    pub fn set_mode(&mut self, id: TraitId, mode: FilterMode) {
        self.traits.set_mode(id, mode);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingMode {
    #[default]
    Exact,
    AtLeast,
}

/// Rating constraint. A `None` value is the "unrated" sentinel: with
/// [`RatingMode::Exact`] it matches books without a rating, with
/// [`RatingMode::AtLeast`] it imposes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingFilter {
    pub value: Option<u8>,
    #[serde(default)]
    pub mode: RatingMode,
}

impl RatingFilter {
    pub fn exact(value: u8) -> Self {
        Self {
            value: Some(value),
            mode: RatingMode::Exact,
        }
    }

    pub fn at_least(value: u8) -> Self {
        Self {
            value: Some(value),
            mode: RatingMode::AtLeast,
        }
    }

    pub fn unrated() -> Self {
        Self {
            value: None,
            mode: RatingMode::Exact,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.value.is_none() && self.mode == RatingMode::AtLeast
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScalarFilter {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub rating: Option<RatingFilter>,
    #[serde(default)]
    pub pages_low: Option<u32>,
    #[serde(default)]
    pub pages_high: Option<u32>,
    #[serde(default)]
    pub date_low: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_high: Option<DateTime<Utc>>,
}

impl ScalarFilter {
    /// Lowercased title needle, `None` when blank.
    pub fn title_needle(&self) -> Option<String> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }

    pub fn effective_rating(&self) -> Option<RatingFilter> {
        self.rating.filter(|r| !r.is_noop())
    }

    pub fn effective_pages_low(&self) -> Option<u32> {
        self.pages_low.filter(|p| *p > 0)
    }

    pub fn effective_pages_high(&self) -> Option<u32> {
        self.pages_high.filter(|p| *p > 0)
    }

    pub fn effective_date_low(&self) -> Option<DateTime<Utc>> {
        self.date_low.filter(|d| *d > *DATE_SENTINEL)
    }

    pub fn effective_date_high(&self) -> Option<DateTime<Utc>> {
        self.date_high.filter(|d| *d > *DATE_SENTINEL)
    }

    pub fn is_empty(&self) -> bool {
        self.title_needle().is_none()
            && self.effective_rating().is_none()
            && self.effective_pages_low().is_none()
            && self.effective_pages_high().is_none()
            && self.effective_date_low().is_none()
            && self.effective_date_high().is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default)]
    pub scalar: ScalarFilter,
    #[serde(default)]
    pub categories: BTreeMap<Category, FacetFilter>,
    #[serde(default)]
    pub characters: Option<Vec<CharacterPattern>>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.scalar.title = Some(title.into());
        self
    }

    pub fn with_rating(mut self, rating: RatingFilter) -> Self {
        self.scalar.rating = Some(rating);
        self
    }

    pub fn with_pages(mut self, low: Option<u32>, high: Option<u32>) -> Self {
        self.scalar.pages_low = low;
        self.scalar.pages_high = high;
        self
    }

    pub fn with_dates(mut self, low: Option<DateTime<Utc>>, high: Option<DateTime<Utc>>) -> Self {
        self.scalar.date_low = low;
        self.scalar.date_high = high;
        self
    }

    pub fn with_facet(mut self, category: Category, facet: FacetFilter) -> Self {
        self.categories.insert(category, facet);
        self
    }

    pub fn with_character(mut self, pattern: CharacterPattern) -> Self {
        self.characters.get_or_insert_with(Vec::new).push(pattern);
        self
    }

    /// The facet for `category`, created empty (present) if missing.
    pub fn facet_mut(&mut self, category: Category) -> &mut FacetFilter {
        self.categories.entry(category).or_default()
    }

    /// `(category, value)` pairs marked NOT in any facet.
    pub fn pooled_not(&self) -> BTreeSet<(Category, ValueId)> {
        self.categories
            .iter()
            .flat_map(|(cat, facet)| facet.values.must_not_have.iter().map(move |v| (*cat, *v)))
            .collect()
    }

    /// `(category, value)` pairs marked OR in any facet.
    pub fn pooled_any(&self) -> BTreeSet<(Category, ValueId)> {
        self.categories
            .iter()
            .flat_map(|(cat, facet)| {
                facet
                    .values
                    .must_have_any_of
                    .iter()
                    .map(move |v| (*cat, *v))
            })
            .collect()
    }

    pub fn patterns(&self) -> &[CharacterPattern] {
        self.characters.as_deref().unwrap_or(&[])
    }

    /// True when no block carries a constraint.
    pub fn is_unconstrained(&self) -> bool {
        self.scalar.is_empty()
            && self.categories.values().all(FacetFilter::is_empty)
            && self.patterns().is_empty()
    }

    /// Rejects malformed specifications: overlapping mode sets, `unlinked`
    /// facets that also require values, ratings above 10, inverted bounds.
    pub fn validate(&self) -> Result<()> {
        validate::validate_spec(self)?;
        Ok(())
    }
}
