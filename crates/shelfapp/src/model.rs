//! # Domain Model
//!
//! The persisted entity graph the library is made of:
//!
//! - [`Book`]: one paginated image set, with its scalar fields and an optional
//!   single series reference.
//! - [`CategoricalValue`]: a named artist, genre, tag or series. Value ids are
//!   scoped by [`Category`]; artist 3 and tag 3 are unrelated.
//! - [`Character`]: an in-story character owned by exactly one book.
//! - [`Trait`]: a named trait shared across characters.
//!
//! Links (book ↔ value, character ↔ trait) carry no payload and live in the
//! [`crate::store::Library`] tables, not on these records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }
    };
}

id_type!(
    /// Stable identifier of a book.
    BookId
);
id_type!(
    /// Identifier of a categorical value, unique within its category.
    ValueId
);
id_type!(CharacterId);
id_type!(TraitId);

/// The named facets a book can be filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Artists,
    Genres,
    Tags,
    /// Single-valued: a book references at most one series.
    Series,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Artists,
        Category::Genres,
        Category::Tags,
        Category::Series,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Artists => "artists",
            Category::Genres => "genres",
            Category::Tags => "tags",
            Category::Series => "series",
        }
    }

    /// Singular noun, used in messages ("artist not found: 4").
    pub fn singular(self) -> &'static str {
        match self {
            Category::Artists => "artist",
            Category::Genres => "genre",
            Category::Tags => "tag",
            Category::Series => "series",
        }
    }

    pub fn is_single_valued(self) -> bool {
        matches!(self, Category::Series)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Accepts plural or singular names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "artists" | "artist" => Ok(Category::Artists),
            "genres" | "genre" => Ok(Category::Genres),
            "tags" | "tag" => Ok(Category::Tags),
            "series" => Ok(Category::Series),
            other => Err(format!(
                "unknown category '{}' (expected artists, genres, tags or series)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    #[serde(default)]
    pub alt_title: Option<String>,
    #[serde(default)]
    pub series: Option<ValueId>,
    #[serde(default)]
    pub series_order: Option<f64>,
    pub pages: u32,
    /// 0..=10, `None` when the book has not been rated.
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub notes: Option<String>,
    pub date_added: DateTime<Utc>,
    /// Where the page images live, relative to the library root.
    pub directory: String,
}

impl Book {
    pub fn new(id: BookId, title: impl Into<String>, directory: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            alt_title: None,
            series: None,
            series_order: None,
            pages: 0,
            rating: None,
            notes: None,
            date_added: Utc::now(),
            directory: directory.into(),
        }
    }

    /// Case-insensitive substring match against the title or the alternate title.
    pub fn title_contains(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self
                .alt_title
                .as_deref()
                .is_some_and(|alt| alt.to_lowercase().contains(needle_lower))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalValue {
    pub id: ValueId,
    pub category: Category,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub book: BookId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trait {
    pub id: TraitId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// The editable fields of a book, as submitted by a metadata editor.
///
/// Links and characters are replaced wholesale on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookEdit {
    pub title: String,
    #[serde(default)]
    pub alt_title: Option<String>,
    #[serde(default)]
    pub series: Option<ValueId>,
    #[serde(default)]
    pub series_order: Option<f64>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub artists: Vec<ValueId>,
    #[serde(default)]
    pub genres: Vec<ValueId>,
    #[serde(default)]
    pub tags: Vec<ValueId>,
    /// One trait list per character. Empty lists are dropped.
    #[serde(default)]
    pub characters: Vec<Vec<TraitId>>,
}
