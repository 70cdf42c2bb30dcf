use super::backend::StorageBackend;
use crate::error::{Result, ShelfError};
use crate::store::{Library, LibraryTables};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub const DEFAULT_LIBRARY_FILE: &str = "library.json";

pub struct FsBackend {
    root: PathBuf,
    file_name: String,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_name: DEFAULT_LIBRARY_FILE.to_string(),
        }
    }

    pub fn with_file_name(mut self, name: &str) -> Self {
        if !name.trim().is_empty() {
            self.file_name = name.trim().to_string();
        }
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn library_path(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(ShelfError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_library(&self) -> Result<Library> {
        let path = self.library_path();
        if !path.exists() {
            debug!(path = %path.display(), "no library file yet, starting empty");
            return Ok(Library::new());
        }
        let content = fs::read_to_string(&path).map_err(ShelfError::Io)?;
        // Parse the rows first so a dangling reference is reported as a store
        // error rather than a generic JSON one.
        let tables: LibraryTables =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Library::try_from(tables).map_err(|reason| {
            ShelfError::Store(format!("corrupt library {}: {}", path.display(), reason))
        })
    }

    fn save_library(&self, library: &Library) -> Result<()> {
        self.ensure_dir(&self.root)?;

        let tables = LibraryTables::from(library.clone());
        let content = serde_json::to_string_pretty(&tables).map_err(ShelfError::Serialization)?;

        // Atomic write
        let tmp_file = self.root.join(format!(".library-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(ShelfError::Io)?;
        fs::rename(&tmp_file, self.library_path()).map_err(ShelfError::Io)?;

        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.library_path()
    }

    fn available(&self) -> bool {
        self.library_path().is_file()
    }
}
