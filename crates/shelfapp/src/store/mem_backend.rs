use super::backend::StorageBackend;
use crate::error::{Result, ShelfError};
use crate::store::Library;
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since shelf is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    library: RefCell<Library>,
    simulate_read_error: Cell<bool>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_library(library: Library) -> Self {
        Self {
            library: RefCell::new(library),
            ..Self::default()
        }
    }

    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }
}

impl StorageBackend for MemBackend {
    fn load_library(&self) -> Result<Library> {
        if self.simulate_read_error.get() {
            return Err(ShelfError::Store("Simulated read error".to_string()));
        }
        Ok(self.library.borrow().clone())
    }

    fn save_library(&self, library: &Library) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ShelfError::Store("Simulated write error".to_string()));
        }
        *self.library.borrow_mut() = library.clone();
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://library.json")
    }

    fn available(&self) -> bool {
        true
    }
}
