use crate::error::Result;
use crate::store::Library;
use std::path::PathBuf;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while [`super::Catalog`] handles the "what" (loading, editing, saving).
pub trait StorageBackend {
    /// Load the whole library.
    /// A backend that has never been written to yields an empty library.
    fn load_library(&self) -> Result<Library>;

    /// Replace the stored library.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_library(&self, library: &Library) -> Result<()>;

    /// Where the library lives. For FsBackend, the real path.
    /// For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;

    /// Whether a stored library exists yet.
    fn available(&self) -> bool;
}
