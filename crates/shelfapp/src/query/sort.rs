use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::model::Book;

/// Result ordering. Every key except `Random` breaks ties by book id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "title", alias = "title-asc")]
    TitleAsc,
    #[serde(rename = "title-desc")]
    TitleDesc,
    #[serde(rename = "rating", alias = "rating-asc")]
    RatingAsc,
    #[serde(rename = "rating-desc")]
    RatingDesc,
    #[serde(rename = "pages", alias = "pages-asc")]
    PagesAsc,
    #[serde(rename = "pages-desc")]
    PagesDesc,
    #[serde(rename = "date", alias = "date-asc")]
    DateAsc,
    #[serde(rename = "date-desc")]
    DateDesc,
    #[serde(rename = "random")]
    Random,
}

impl SortKey {
    pub const ALL: [SortKey; 9] = [
        SortKey::TitleAsc,
        SortKey::TitleDesc,
        SortKey::RatingAsc,
        SortKey::RatingDesc,
        SortKey::PagesAsc,
        SortKey::PagesDesc,
        SortKey::DateAsc,
        SortKey::DateDesc,
        SortKey::Random,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::TitleAsc => "title",
            SortKey::TitleDesc => "title-desc",
            SortKey::RatingAsc => "rating",
            SortKey::RatingDesc => "rating-desc",
            SortKey::PagesAsc => "pages",
            SortKey::PagesDesc => "pages-desc",
            SortKey::DateAsc => "date",
            SortKey::DateDesc => "date-desc",
            SortKey::Random => "random",
        }
    }

    fn compare(self, a: &Book, b: &Book) -> Ordering {
        let primary = match self {
            SortKey::TitleAsc | SortKey::TitleDesc => {
                a.title.to_lowercase().cmp(&b.title.to_lowercase())
            }
            // None < Some(_): unrated books sort below any rating.
            SortKey::RatingAsc | SortKey::RatingDesc => a.rating.cmp(&b.rating),
            SortKey::PagesAsc | SortKey::PagesDesc => a.pages.cmp(&b.pages),
            SortKey::DateAsc | SortKey::DateDesc => a.date_added.cmp(&b.date_added),
            SortKey::Random => Ordering::Equal,
        };
        let primary = if self.is_descending() {
            primary.reverse()
        } else {
            primary
        };
        primary.then(a.id.cmp(&b.id))
    }

    fn is_descending(self) -> bool {
        matches!(
            self,
            SortKey::TitleDesc | SortKey::RatingDesc | SortKey::PagesDesc | SortKey::DateDesc
        )
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        let wanted = wanted.strip_suffix("-asc").unwrap_or(wanted.as_str());
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = SortKey::ALL.iter().map(|k| k.as_str()).collect();
                format!("unknown sort key '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

pub fn sort_books<R: Rng + ?Sized>(books: &mut [Book], key: SortKey, rng: &mut R) {
    match key {
        SortKey::Random => books.shuffle(rng),
        _ => books.sort_by(|a, b| key.compare(a, b)),
    }
}
