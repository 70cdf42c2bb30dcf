//! In-memory entity graph.
//!
//! [`Library`] owns every table and keeps referential integrity on its own
//! mutations: removing a book, value or trait cascades to the rows that
//! point at it. On disk it is stored as [`LibraryTables`], flat row lists
//! that are checked for dangling references when loaded.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

use super::{BookSet, CharacterTraits, EntityStore};
use crate::error::{Result, ShelfError};
use crate::filter::MAX_RATING;
use crate::model::{
    Book, BookId, CategoricalValue, Category, Character, CharacterId, Trait, TraitId, ValueId,
};

/// Next free id per table. Ids are never reused after deletion.
///
/// Values count per category; a category missing from `values` starts at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequences {
    pub book: u64,
    #[serde(default)]
    pub values: BTreeMap<Category, u64>,
    pub character: u64,
    #[serde(rename = "trait")]
    pub trait_: u64,
}

impl Default for Sequences {
    fn default() -> Self {
        Self {
            book: 1,
            values: BTreeMap::new(),
            character: 1,
            trait_: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookLink {
    pub book: BookId,
    pub category: Category,
    pub value: ValueId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterTraitLink {
    pub character: CharacterId,
    #[serde(rename = "trait")]
    pub trait_id: TraitId,
}

/// Serialized form of a [`Library`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryTables {
    #[serde(default)]
    pub sequences: Sequences,
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub values: Vec<CategoricalValue>,
    #[serde(default)]
    pub links: Vec<BookLink>,
    #[serde(default)]
    pub characters: Vec<Character>,
    #[serde(default)]
    pub traits: Vec<Trait>,
    #[serde(default)]
    pub character_traits: Vec<CharacterTraitLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LibraryTables", into = "LibraryTables")]
pub struct Library {
    seq: Sequences,
    books: BTreeMap<BookId, Book>,
    values: BTreeMap<Category, BTreeMap<ValueId, CategoricalValue>>,
    // Series is not stored here: it is the book's own `series` field.
    links: BTreeMap<Category, BTreeMap<BookId, BTreeSet<ValueId>>>,
    characters: BTreeMap<CharacterId, Character>,
    traits: BTreeMap<TraitId, Trait>,
    character_traits: BTreeMap<CharacterId, BTreeSet<TraitId>>,
}

fn bump(counter: &mut u64) -> u64 {
    let id = *counter;
    *counter += 1;
    id
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Books ---

    pub fn add_book(&mut self, title: impl Into<String>, directory: impl Into<String>) -> BookId {
        let id = BookId(bump(&mut self.seq.book));
        self.books.insert(id, Book::new(id, title, directory));
        id
    }

    /// Inserts a fully formed record, keeping its id. Used by importers and
    /// fixtures that need control over every field.
    pub fn insert_book(&mut self, book: Book) {
        if book.id.0 >= self.seq.book {
            self.seq.book = book.id.0 + 1;
        }
        self.books.insert(book.id, book);
    }

    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.get(&id)
    }

    pub fn book_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.books.get_mut(&id)
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn iter_books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    /// Removes a book with its links and characters.
    pub fn remove_book(&mut self, id: BookId) -> Option<Book> {
        let book = self.books.remove(&id)?;
        for per_book in self.links.values_mut() {
            per_book.remove(&id);
        }
        self.remove_characters_of(id);
        Some(book)
    }

    // --- Categorical values ---

    pub fn add_value(&mut self, category: Category, name: impl Into<String>) -> ValueId {
        let id = ValueId(bump(self.seq.values.entry(category).or_insert(1)));
        self.values.entry(category).or_default().insert(
            id,
            CategoricalValue {
                id,
                category,
                name: name.into(),
            },
        );
        id
    }

    pub fn value(&self, category: Category, id: ValueId) -> Option<&CategoricalValue> {
        self.values.get(&category).and_then(|vals| vals.get(&id))
    }

    pub fn value_mut(&mut self, category: Category, id: ValueId) -> Option<&mut CategoricalValue> {
        self.values.get_mut(&category).and_then(|vals| vals.get_mut(&id))
    }

    pub fn iter_values(&self, category: Category) -> impl Iterator<Item = &CategoricalValue> {
        self.values.get(&category).into_iter().flat_map(|vals| vals.values())
    }

    /// Removes a value and every reference to it: link rows for
    /// multi-valued categories, the `series` field of books for series.
    pub fn remove_value(&mut self, category: Category, id: ValueId) -> Option<CategoricalValue> {
        let removed = self.values.get_mut(&category)?.remove(&id)?;
        if category.is_single_valued() {
            for book in self.books.values_mut() {
                if book.series == Some(id) {
                    book.series = None;
                }
            }
        } else if let Some(per_book) = self.links.get_mut(&category) {
            for values in per_book.values_mut() {
                values.remove(&id);
            }
            per_book.retain(|_, values| !values.is_empty());
        }
        Some(removed)
    }

    // --- Links ---

    /// Values `book` is linked to in `category`.
    pub fn links_of(&self, book: BookId, category: Category) -> BTreeSet<ValueId> {
        if category.is_single_valued() {
            return self
                .books
                .get(&book)
                .and_then(|b| b.series)
                .into_iter()
                .collect();
        }
        self.links
            .get(&category)
            .and_then(|per_book| per_book.get(&book))
            .cloned()
            .unwrap_or_default()
    }

    /// Replaces every link of `book` in `category`.
    ///
    /// For series at most one value may be given; it becomes the book's
    /// series reference.
    pub fn set_links(
        &mut self,
        book: BookId,
        category: Category,
        values: impl IntoIterator<Item = ValueId>,
    ) -> Result<()> {
        if !self.books.contains_key(&book) {
            return Err(ShelfError::NotFound {
                kind: "book",
                id: book.0,
            });
        }
        let values: BTreeSet<ValueId> = values.into_iter().collect();
        if let Some(missing) = values.iter().find(|v| self.value(category, **v).is_none()) {
            return Err(ShelfError::NotFound {
                kind: category.singular(),
                id: missing.0,
            });
        }

        if category.is_single_valued() {
            if values.len() > 1 {
                return Err(ShelfError::Api(format!(
                    "a book belongs to at most one series, got {}",
                    values.len()
                )));
            }
            if let Some(b) = self.books.get_mut(&book) {
                b.series = values.into_iter().next();
            }
            return Ok(());
        }

        let per_book = self.links.entry(category).or_default();
        if values.is_empty() {
            per_book.remove(&book);
        } else {
            per_book.insert(book, values);
        }
        Ok(())
    }

    /// Every `(book, value)` pair in `category`, series included.
    fn link_pairs(&self, category: Category) -> Box<dyn Iterator<Item = (BookId, ValueId)> + '_> {
        if category.is_single_valued() {
            Box::new(
                self.books
                    .values()
                    .filter_map(|b| b.series.map(|s| (b.id, s))),
            )
        } else {
            Box::new(
                self.links
                    .get(&category)
                    .into_iter()
                    .flat_map(|per_book| per_book.iter())
                    .flat_map(|(book, values)| values.iter().map(move |v| (*book, *v))),
            )
        }
    }

    // --- Characters & traits ---

    pub fn add_trait(&mut self, name: impl Into<String>, description: Option<String>) -> TraitId {
        let id = TraitId(bump(&mut self.seq.trait_));
        self.traits.insert(
            id,
            Trait {
                id,
                name: name.into(),
                description,
            },
        );
        id
    }

    pub fn trait_(&self, id: TraitId) -> Option<&Trait> {
        self.traits.get(&id)
    }

    pub fn trait_mut(&mut self, id: TraitId) -> Option<&mut Trait> {
        self.traits.get_mut(&id)
    }

    pub fn iter_traits(&self) -> impl Iterator<Item = &Trait> {
        self.traits.values()
    }

    /// Removes a trait from every character, then drops the characters that
    /// are left with no traits at all.
    pub fn remove_trait(&mut self, id: TraitId) -> Option<Trait> {
        let removed = self.traits.remove(&id)?;
        for traits in self.character_traits.values_mut() {
            traits.remove(&id);
        }
        let emptied: Vec<CharacterId> = self
            .characters
            .keys()
            .filter(|c| self.character_traits.get(*c).map_or(true, |t| t.is_empty()))
            .copied()
            .collect();
        for character in &emptied {
            self.characters.remove(character);
            self.character_traits.remove(character);
        }
        if !emptied.is_empty() {
            debug!(trait_id = %id, dropped = emptied.len(), "removed characters left without traits");
        }
        Some(removed)
    }

    pub fn add_character(
        &mut self,
        book: BookId,
        traits: impl IntoIterator<Item = TraitId>,
    ) -> Result<CharacterId> {
        if !self.books.contains_key(&book) {
            return Err(ShelfError::NotFound {
                kind: "book",
                id: book.0,
            });
        }
        let traits: BTreeSet<TraitId> = traits.into_iter().collect();
        if let Some(missing) = traits.iter().find(|t| !self.traits.contains_key(*t)) {
            return Err(ShelfError::NotFound {
                kind: "trait",
                id: missing.0,
            });
        }
        let id = CharacterId(bump(&mut self.seq.character));
        self.characters.insert(id, Character { id, book });
        self.character_traits.insert(id, traits);
        Ok(id)
    }

    pub fn remove_characters_of(&mut self, book: BookId) -> usize {
        let owned: Vec<CharacterId> = self
            .characters
            .values()
            .filter(|c| c.book == book)
            .map(|c| c.id)
            .collect();
        for id in &owned {
            self.characters.remove(id);
            self.character_traits.remove(id);
        }
        owned.len()
    }

    /// Characters of `book` with their trait ids, in id order.
    pub fn characters_of(&self, book: BookId) -> Vec<(CharacterId, BTreeSet<TraitId>)> {
        self.characters
            .values()
            .filter(|c| c.book == book)
            .map(|c| {
                (
                    c.id,
                    self.character_traits.get(&c.id).cloned().unwrap_or_default(),
                )
            })
            .collect()
    }

    pub fn sequences(&self) -> &Sequences {
        &self.seq
    }
}

impl EntityStore for Library {
    fn all_books(&self) -> Result<Vec<Book>> {
        Ok(self.books.values().cloned().collect())
    }

    fn scan_books(&self, predicate: &dyn Fn(&Book) -> bool) -> Result<BookSet> {
        Ok(self
            .books
            .values()
            .filter(|b| predicate(b))
            .map(|b| b.id)
            .collect())
    }

    fn books(&self, ids: &BookSet) -> Result<Vec<Book>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.books.get(id))
            .cloned()
            .collect())
    }

    fn linked_value_counts(
        &self,
        category: Category,
        values: &BTreeSet<ValueId>,
        candidates: &BookSet,
    ) -> Result<HashMap<BookId, usize>> {
        let mut counts: HashMap<BookId, usize> = HashMap::new();
        // Link rows are unique per (book, value), so counting rows counts
        // distinct values.
        for (book, value) in self.link_pairs(category) {
            if candidates.contains(&book) && values.contains(&value) {
                *counts.entry(book).or_default() += 1;
            }
        }
        Ok(counts)
    }

    fn books_linked_to_any(
        &self,
        category: Category,
        values: &BTreeSet<ValueId>,
    ) -> Result<BookSet> {
        Ok(self
            .link_pairs(category)
            .filter(|(_, value)| values.contains(value))
            .map(|(book, _)| book)
            .collect())
    }

    fn books_without_links(&self, category: Category) -> Result<BookSet> {
        let linked: BookSet = self.link_pairs(category).map(|(book, _)| book).collect();
        Ok(self
            .books
            .keys()
            .filter(|id| !linked.contains(*id))
            .copied()
            .collect())
    }

    fn character_traits(&self, candidates: &BookSet) -> Result<Vec<CharacterTraits>> {
        Ok(self
            .characters
            .values()
            .filter(|c| candidates.contains(&c.book))
            .map(|c| CharacterTraits {
                character: c.id,
                book: c.book,
                traits: self
                    .character_traits
                    .get(&c.id)
                    .map(|t| t.iter().copied().collect())
                    .unwrap_or_default(),
            })
            .collect())
    }
}

impl From<Library> for LibraryTables {
    fn from(lib: Library) -> Self {
        let links = lib
            .links
            .iter()
            .flat_map(|(category, per_book)| {
                per_book.iter().flat_map(move |(book, values)| {
                    values.iter().map(move |value| BookLink {
                        book: *book,
                        category: *category,
                        value: *value,
                    })
                })
            })
            .collect();
        let character_traits = lib
            .character_traits
            .iter()
            .flat_map(|(character, traits)| {
                traits.iter().map(move |t| CharacterTraitLink {
                    character: *character,
                    trait_id: *t,
                })
            })
            .collect();

        LibraryTables {
            sequences: lib.seq,
            books: lib.books.into_values().collect(),
            values: lib
                .values
                .into_values()
                .flat_map(|vals| vals.into_values())
                .collect(),
            links,
            characters: lib.characters.into_values().collect(),
            traits: lib.traits.into_values().collect(),
            character_traits,
        }
    }
}

impl TryFrom<LibraryTables> for Library {
    type Error = String;

    /// Rebuilds the graph, rejecting rows that point at missing records.
    fn try_from(tables: LibraryTables) -> std::result::Result<Self, Self::Error> {
        let mut lib = Library {
            seq: tables.sequences,
            ..Library::default()
        };

        for book in tables.books {
            if let Some(rating) = book.rating.filter(|r| *r > MAX_RATING) {
                return Err(format!(
                    "book {} has rating {} above the maximum of {}",
                    book.id, rating, MAX_RATING
                ));
            }
            if lib.books.insert(book.id, book).is_some() {
                return Err("duplicate book id".to_string());
            }
        }
        for value in tables.values {
            let (category, id) = (value.category, value.id);
            if lib
                .values
                .entry(category)
                .or_default()
                .insert(id, value)
                .is_some()
            {
                return Err(format!("duplicate {} id {}", category.singular(), id));
            }
        }
        for book in lib.books.values() {
            if let Some(series) = book.series {
                if lib.value(Category::Series, series).is_none() {
                    return Err(format!("book {} references unknown series {}", book.id, series));
                }
            }
        }
        for link in tables.links {
            if link.category.is_single_valued() {
                return Err(format!(
                    "book {} has a series link row; series is stored on the book",
                    link.book
                ));
            }
            if !lib.books.contains_key(&link.book) {
                return Err(format!("link references unknown book {}", link.book));
            }
            if lib.value(link.category, link.value).is_none() {
                return Err(format!(
                    "book {} links unknown {} {}",
                    link.book,
                    link.category.singular(),
                    link.value
                ));
            }
            lib.links
                .entry(link.category)
                .or_default()
                .entry(link.book)
                .or_default()
                .insert(link.value);
        }
        for tr in tables.traits {
            if lib.traits.insert(tr.id, tr).is_some() {
                return Err("duplicate trait id".to_string());
            }
        }
        for character in tables.characters {
            if !lib.books.contains_key(&character.book) {
                return Err(format!(
                    "character {} belongs to unknown book {}",
                    character.id, character.book
                ));
            }
            if lib.characters.insert(character.id, character).is_some() {
                return Err(format!("duplicate character id {}", character.id));
            }
            lib.character_traits.entry(character.id).or_default();
        }
        for link in tables.character_traits {
            if !lib.traits.contains_key(&link.trait_id) {
                return Err(format!("character links unknown trait {}", link.trait_id));
            }
            lib.character_traits
                .get_mut(&link.character)
                .ok_or_else(|| format!("trait link references unknown character {}", link.character))?
                .insert(link.trait_id);
        }

        // Keep sequences ahead of every stored id, even if the file lagged.
        let seq = &mut lib.seq;
        let next = |max: Option<u64>| max.map_or(1, |m| m + 1);
        seq.book = seq.book.max(next(lib.books.keys().map(|k| k.0).max()));
        for (category, vals) in &lib.values {
            let counter = seq.values.entry(*category).or_insert(1);
            *counter = (*counter).max(next(vals.keys().map(|k| k.0).max()));
        }
        seq.character = seq.character.max(next(lib.characters.keys().map(|k| k.0).max()));
        seq.trait_ = seq.trait_.max(next(lib.traits.keys().map(|k| k.0).max()));

        Ok(lib)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[u64]) -> BTreeSet<ValueId> {
        ids.iter().copied().map(ValueId).collect()
    }

    fn library() -> (Library, BookId, BookId, ValueId, ValueId) {
        let mut lib = Library::new();
        let b1 = lib.add_book("Alpha", "alpha");
        let b2 = lib.add_book("Beta", "beta");
        let t1 = lib.add_value(Category::Tags, "t1");
        let t2 = lib.add_value(Category::Tags, "t2");
        lib.set_links(b1, Category::Tags, [t1, t2]).unwrap();
        lib.set_links(b2, Category::Tags, [t1]).unwrap();
        (lib, b1, b2, t1, t2)
    }

    #[test]
    fn ids_are_never_reused() {
        let mut lib = Library::new();
        let a = lib.add_book("A", "a");
        lib.remove_book(a);
        let b = lib.add_book("B", "b");
        assert_ne!(a, b);
    }

    #[test]
    fn value_ids_count_per_category() {
        let mut lib = Library::new();
        assert_eq!(lib.add_value(Category::Genres, "drama"), ValueId(1));
        assert_eq!(lib.add_value(Category::Tags, "color"), ValueId(1));
        assert_eq!(lib.add_value(Category::Tags, "oneshot"), ValueId(2));
        assert_eq!(lib.sequences().values.get(&Category::Tags), Some(&3));
    }

    #[test]
    fn counts_distinct_requested_values_only() {
        let (mut lib, b1, b2, t1, t2) = library();
        let extra = lib.add_value(Category::Tags, "extra");
        lib.set_links(b1, Category::Tags, [t1, t2, extra]).unwrap();

        let candidates: BookSet = [b1, b2].into_iter().collect();
        let counts = lib
            .linked_value_counts(Category::Tags, &set(&[t1.0, t2.0]), &candidates)
            .unwrap();
        assert_eq!(counts.get(&b1), Some(&2));
        assert_eq!(counts.get(&b2), Some(&1));
    }

    #[test]
    fn series_goes_through_link_lookups() {
        let (mut lib, b1, b2, _, _) = library();
        let s = lib.add_value(Category::Series, "Saga");
        lib.set_links(b1, Category::Series, [s]).unwrap();

        assert_eq!(lib.book(b1).unwrap().series, Some(s));
        let linked = lib.books_linked_to_any(Category::Series, &set(&[s.0])).unwrap();
        assert_eq!(linked, [b1].into_iter().collect());
        let unlinked = lib.books_without_links(Category::Series).unwrap();
        assert_eq!(unlinked, [b2].into_iter().collect());
    }

    #[test]
    fn series_rejects_two_values() {
        let (mut lib, b1, _, _, _) = library();
        let s1 = lib.add_value(Category::Series, "One");
        let s2 = lib.add_value(Category::Series, "Two");
        assert!(lib.set_links(b1, Category::Series, [s1, s2]).is_err());
    }

    #[test]
    fn set_links_rejects_unknown_value() {
        let (mut lib, b1, _, _, _) = library();
        let err = lib
            .set_links(b1, Category::Genres, [ValueId(99)])
            .unwrap_err();
        assert!(matches!(err, ShelfError::NotFound { kind: "genre", id: 99 }));
    }

    #[test]
    fn removing_value_cascades_links() {
        let (mut lib, b1, b2, t1, t2) = library();
        lib.remove_value(Category::Tags, t1);
        assert_eq!(lib.links_of(b1, Category::Tags), set(&[t2.0]));
        assert!(lib.links_of(b2, Category::Tags).is_empty());
        assert_eq!(
            lib.books_without_links(Category::Tags).unwrap(),
            [b2].into_iter().collect()
        );
    }

    #[test]
    fn removing_series_clears_book_reference() {
        let (mut lib, b1, _, _, _) = library();
        let s = lib.add_value(Category::Series, "Saga");
        lib.set_links(b1, Category::Series, [s]).unwrap();
        lib.remove_value(Category::Series, s);
        assert_eq!(lib.book(b1).unwrap().series, None);
    }

    #[test]
    fn removing_trait_drops_emptied_characters() {
        let (mut lib, b1, _, _, _) = library();
        let brave = lib.add_trait("brave", None);
        let tall = lib.add_trait("tall", None);
        let only_brave = lib.add_character(b1, [brave]).unwrap();
        let both = lib.add_character(b1, [brave, tall]).unwrap();

        lib.remove_trait(brave);

        let chars = lib.characters_of(b1);
        assert_eq!(chars.len(), 1);
        assert_eq!(chars[0].0, both);
        assert_ne!(chars[0].0, only_brave);
        assert_eq!(chars[0].1, [tall].into_iter().collect());
    }

    #[test]
    fn removing_book_cascades() {
        let (mut lib, b1, _, t1, _) = library();
        let brave = lib.add_trait("brave", None);
        lib.add_character(b1, [brave]).unwrap();
        lib.remove_book(b1);

        let all: BookSet = lib.iter_books().map(|b| b.id).collect();
        assert!(lib.character_traits(&all).unwrap().is_empty());
        assert!(!lib
            .books_linked_to_any(Category::Tags, &set(&[t1.0]))
            .unwrap()
            .contains(&b1));
    }

    #[test]
    fn tables_roundtrip_preserves_graph() {
        let (mut lib, b1, _, _, _) = library();
        let brave = lib.add_trait("brave", Some("fearless".into()));
        lib.add_character(b1, [brave]).unwrap();

        let json = serde_json::to_string(&lib).unwrap();
        let loaded: Library = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, lib);
    }

    #[test]
    fn dangling_link_is_a_corrupt_record() {
        let tables = LibraryTables {
            links: vec![BookLink {
                book: BookId(5),
                category: Category::Tags,
                value: ValueId(1),
            }],
            ..Default::default()
        };
        let err = Library::try_from(tables).unwrap_err();
        assert!(err.contains("unknown book 5"));
    }

    #[test]
    fn duplicate_character_id_is_a_corrupt_record() {
        let tables = LibraryTables {
            books: vec![
                Book::new(BookId(1), "One", "one"),
                Book::new(BookId(2), "Two", "two"),
            ],
            characters: vec![
                Character {
                    id: CharacterId(1),
                    book: BookId(1),
                },
                Character {
                    id: CharacterId(1),
                    book: BookId(2),
                },
            ],
            ..Default::default()
        };
        let err = Library::try_from(tables).unwrap_err();
        assert!(err.contains("duplicate character id 1"));
    }

    #[test]
    fn stored_rating_above_ten_is_a_corrupt_record() {
        let mut book = Book::new(BookId(1), "One", "one");
        book.rating = Some(42);
        let tables = LibraryTables {
            books: vec![book.clone()],
            ..Default::default()
        };
        let err = Library::try_from(tables).unwrap_err();
        assert!(err.contains("rating 42"));

        book.rating = Some(MAX_RATING);
        let tables = LibraryTables {
            books: vec![book],
            ..Default::default()
        };
        assert!(Library::try_from(tables).is_ok());
    }

    #[test]
    fn lagging_sequences_are_repaired_on_load() {
        let mut tables = LibraryTables::default();
        tables.books.push(Book::new(BookId(10), "Ten", "ten"));
        tables.values.push(CategoricalValue {
            id: ValueId(4),
            category: Category::Genres,
            name: "drama".into(),
        });
        let mut lib = Library::try_from(tables).unwrap();
        assert_eq!(lib.add_book("Next", "next"), BookId(11));
        assert_eq!(lib.add_value(Category::Genres, "epic"), ValueId(5));
        assert_eq!(lib.add_value(Category::Tags, "color"), ValueId(1));
    }
}
