//! # Storage Layer
//!
//! Two abstractions live here, split the same way reads and writes are split
//! in the rest of the crate:
//!
//! - [`EntityStore`]: the **read-only** lookups the query compiler needs.
//!   The compiler never sees anything else, so any persistence layer that can
//!   answer these questions can be filtered over.
//! - [`backend::StorageBackend`]: raw load/save of a whole [`Library`]
//!   snapshot (filesystem or memory). [`catalog::Catalog`] wraps a backend and
//!   is what editing commands go through.
//!
//! ## Snapshot Model
//!
//! A [`Library`] is the complete entity graph held in memory: books,
//! categorical values, book↔value links, characters, traits and
//! character↔trait links. Searches run against a loaded snapshot, so an
//! evaluation is a pure function of (snapshot, specification, sort key).
//! Edits load a snapshot, mutate it and save it back atomically.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── library.json   # LibraryTables: flat rows for every table
//! └── shelf.toml     # Optional configuration
//! ```
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: JSON file, written through a temp file + rename.
//! - [`mem_backend::MemBackend`]: for tests, with injectable failures.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::error::Result;
use crate::model::{Book, BookId, Category, CharacterId, TraitId, ValueId};

pub mod backend;
pub mod catalog;
pub mod fs_backend;
pub mod library;
pub mod mem_backend;
pub mod memory;

pub use catalog::Catalog;
pub use library::{Library, LibraryTables};

/// A working set of book ids.
pub type BookSet = HashSet<BookId>;

/// One character with its full trait set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterTraits {
    pub character: CharacterId,
    pub book: BookId,
    pub traits: HashSet<TraitId>,
}

/// Read-only lookups over the entity graph.
///
/// Every method is fallible so that stores backed by real I/O can surface
/// read failures; the compiler aborts on the first one.
///
/// Ids that do not exist are not errors: they simply match nothing.
pub trait EntityStore {
    /// Full table scan of books.
    fn all_books(&self) -> Result<Vec<Book>>;

    /// Ids of books matching `predicate`, evaluated inside the store.
    fn scan_books(&self, predicate: &dyn Fn(&Book) -> bool) -> Result<BookSet>;

    /// Full records for `ids`. Unknown ids are skipped.
    fn books(&self, ids: &BookSet) -> Result<Vec<Book>>;

    /// For each candidate linked to at least one of `values` in `category`,
    /// the number of *distinct* requested values it links to.
    fn linked_value_counts(
        &self,
        category: Category,
        values: &BTreeSet<ValueId>,
        candidates: &BookSet,
    ) -> Result<HashMap<BookId, usize>>;

    /// Books linked to at least one of `values` in `category`.
    fn books_linked_to_any(&self, category: Category, values: &BTreeSet<ValueId>)
        -> Result<BookSet>;

    /// Books with no link at all in `category`.
    fn books_without_links(&self, category: Category) -> Result<BookSet>;

    /// Every character owned by one of `candidates`, with its traits.
    fn character_traits(&self, candidates: &BookSet) -> Result<Vec<CharacterTraits>>;
}
