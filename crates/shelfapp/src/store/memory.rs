use super::catalog::Catalog;
use super::mem_backend::MemBackend;

pub type InMemoryCatalog = Catalog<MemBackend>;

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Catalog::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Book, BookId, Category, TraitId, ValueId};
    use crate::store::Library;

    /// Builds a library step by step. Ids are handed out from 1 in insertion
    /// order per table, so tests can refer to records by number.
    #[derive(Default)]
    pub struct LibraryFixture {
        pub library: Library,
    }

    impl LibraryFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn book(self, title: &str) -> Self {
            self.book_with(title, |_| {})
        }

        pub fn book_with(mut self, title: &str, tweak: impl FnOnce(&mut Book)) -> Self {
            let dir = title.to_lowercase().replace(' ', "-");
            let id = self.library.add_book(title, dir);
            if let Some(book) = self.library.book_mut(id) {
                tweak(book);
            }
            self
        }

        pub fn values(mut self, category: Category, names: &[&str]) -> Self {
            for name in names {
                self.library.add_value(category, *name);
            }
            self
        }

        pub fn link(mut self, book: u64, category: Category, values: &[u64]) -> Self {
            self.library
                .set_links(
                    BookId(book),
                    category,
                    values.iter().copied().map(ValueId),
                )
                .unwrap();
            self
        }

        pub fn traits(mut self, names: &[&str]) -> Self {
            for name in names {
                self.library.add_trait(*name, None);
            }
            self
        }

        pub fn character(mut self, book: u64, traits: &[u64]) -> Self {
            self.library
                .add_character(BookId(book), traits.iter().copied().map(TraitId))
                .unwrap();
            self
        }

        pub fn build(self) -> Library {
            self.library
        }

        pub fn catalog(self) -> InMemoryCatalog {
            Catalog::with_backend(MemBackend::with_library(self.library))
        }
    }
}
