//! # Data Directory and Startup
//!
//! The library lives in one data directory:
//!
//! 1. An explicit override (the CLI's `--data` flag), if given.
//! 2. Else the `SHELF_DATA` environment variable, used mainly by tests to
//!    isolate state.
//! 3. Else the OS-appropriate data directory (via the `directories` crate).
//!
//! Configuration is merged from the OS data directory's `shelf.toml` and the
//! library's own `shelf.toml`, the latter winning.

use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::api::ShelfApi;
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::store::fs_backend::FsBackend;
use crate::store::Catalog;

pub const DATA_ENV: &str = "SHELF_DATA";

pub struct ShelfContext {
    pub api: ShelfApi<FsBackend>,
    pub config: ShelfConfig,
    pub data_dir: PathBuf,
}

fn os_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "shelf", "shelf").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Resolves the data directory, see the module docs for the order.
pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    os_data_dir()
        .ok_or_else(|| ShelfError::Store("could not determine a data directory".to_string()))
}

pub fn load_config(data_dir: &Path) -> ShelfConfig {
    let mut search_paths = Vec::new();
    if let Some(global) = os_data_dir().filter(|g| g.as_path() != data_dir) {
        search_paths.push(SearchPath::Path(global));
    }
    search_paths.push(SearchPath::Path(data_dir.to_path_buf()));

    Clapfig::builder()
        .app_name("shelf")
        .file_name("shelf.toml")
        .search_paths(search_paths)
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_default()
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<ShelfContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let config = load_config(&data_dir);
    debug!(data_dir = %data_dir.display(), ?config, "initialized");

    let backend = FsBackend::new(data_dir.clone()).with_file_name(&config.library_file);
    let api = ShelfApi::new(Catalog::with_backend(backend), config.clone());

    Ok(ShelfContext {
        api,
        config,
        data_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn override_wins() {
        let dir = PathBuf::from("/tmp/some/library");
        assert_eq!(resolve_data_dir(Some(dir.clone())).unwrap(), dir);
    }

    #[test]
    fn library_config_is_loaded() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("shelf.toml"),
            "default_sort = \"pages-desc\"\nlibrary_file = \"books.json\"\n",
        )
        .unwrap();

        let ctx = initialize(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(ctx.config.default_sort, "pages-desc");
        assert_eq!(ctx.api.location(), temp.path().join("books.json"));
    }

    #[test]
    fn missing_config_uses_defaults() {
        let temp = tempdir().unwrap();
        let ctx = initialize(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(ctx.config.library_file, "library.json");
        assert_eq!(ctx.data_dir, temp.path());
    }
}
