use super::backend::StorageBackend;
use super::Library;
use crate::error::Result;
use std::path::PathBuf;
use tracing::debug;

/// A library behind a storage backend.
///
/// Reads go through [`Catalog::snapshot`]; every edit loads the current
/// library, applies the change and saves it back. A failed edit leaves the
/// stored library untouched.
pub struct Catalog<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> Catalog<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn snapshot(&self) -> Result<Library> {
        self.backend.load_library()
    }

    pub fn edit<T, F>(&mut self, change: F) -> Result<T>
    where
        F: FnOnce(&mut Library) -> Result<T>,
    {
        let mut library = self.backend.load_library()?;
        let out = change(&mut library)?;
        self.backend.save_library(&library)?;
        debug!(location = %self.backend.location().display(), "library saved");
        Ok(out)
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location()
    }

    pub fn available(&self) -> bool {
        self.backend.available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn edit_persists_changes() {
        let mut catalog = Catalog::with_backend(MemBackend::new());
        let id = catalog.edit(|lib| Ok(lib.add_book("Dune", "dune"))).unwrap();

        let snapshot = catalog.snapshot().unwrap();
        assert_eq!(snapshot.book(id).map(|b| b.title.as_str()), Some("Dune"));
    }

    #[test]
    fn failed_edit_is_not_saved() {
        let mut catalog = Catalog::with_backend(MemBackend::new());
        let result: Result<()> = catalog.edit(|lib| {
            lib.add_book("Half done", "half");
            Err(ShelfError::Api("abort".into()))
        });

        assert!(result.is_err());
        assert_eq!(catalog.snapshot().unwrap().book_count(), 0);
    }

    #[test]
    fn write_error_surfaces_as_store_error() {
        let mut catalog = Catalog::with_backend(MemBackend::new());
        catalog.backend.set_simulate_write_error(true);

        let err = catalog
            .edit(|lib| Ok(lib.add_book("Lost", "lost")))
            .unwrap_err();
        assert!(err.is_store_error());
    }
}
