//! # Configuration
//!
//! Shelf configuration is managed by [`clapfig`], which handles layered
//! loading from TOML files and environment variables on top of the compiled
//! defaults declared here with [`confique`].
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `SHELF__DEFAULT_SORT`, `SHELF__LOG_LEVEL`, ...
//! 2. **Library config**: `shelf.toml` next to the library file.
//! 3. **Global config**: `shelf.toml` in the OS data directory.
//! 4. **Compiled defaults**: `#[config(default = ...)]` below.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default_sort` | `title` | Sort key used when a search names none |
//! | `log_level` | `warn` | Log filter when `SHELF_LOG` / `RUST_LOG` are unset |
//! | `library_file` | `library.json` | File name of the library inside the data dir |

use confique::Config;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::query::SortKey;

/// Configuration for shelf, stored in `shelf.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Sort key used when a search does not pick one (e.g. "title", "rating-desc").
    #[config(default = "title")]
    pub default_sort: String,

    /// Log filter directive, e.g. "warn" or "shelfapp=debug".
    #[config(default = "warn")]
    pub log_level: String,

    /// Library file name, relative to the data directory.
    #[config(default = "library.json")]
    pub library_file: String,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            default_sort: "title".to_string(),
            log_level: "warn".to_string(),
            library_file: "library.json".to_string(),
        }
    }
}

impl ShelfConfig {
    pub const KEYS: [&'static str; 3] = ["default_sort", "log_level", "library_file"];

    /// The configured default sort. An unknown name falls back to title order.
    pub fn sort_key(&self) -> SortKey {
        self.default_sort.parse().unwrap_or_else(|e| {
            warn!("ignoring default_sort: {}", e);
            SortKey::default()
        })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default_sort" => Some(self.default_sort.clone()),
            "log_level" => Some(self.log_level.clone()),
            "library_file" => Some(self.library_file.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::default();
        assert_eq!(config.default_sort, "title");
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.library_file, "library.json");
        assert_eq!(config.sort_key(), SortKey::TitleAsc);
    }

    #[test]
    fn test_sort_key_parses_configured_name() {
        let config = ShelfConfig {
            default_sort: "rating-desc".to_string(),
            ..Default::default()
        };
        assert_eq!(config.sort_key(), SortKey::RatingDesc);
    }

    #[test]
    fn test_unknown_sort_falls_back() {
        let config = ShelfConfig {
            default_sort: "by-colour".to_string(),
            ..Default::default()
        };
        assert_eq!(config.sort_key(), SortKey::TitleAsc);
    }

    #[test]
    fn test_get_known_and_unknown_keys() {
        let config = ShelfConfig::default();
        for key in ShelfConfig::KEYS {
            assert!(config.get(key).is_some());
        }
        assert_eq!(config.get("colour"), None);
    }

    #[test]
    fn test_config_from_toml() {
        let config: ShelfConfig = toml::from_str(
            r#"
default_sort = "date-desc"
log_level = "debug"
library_file = "books.json"
"#,
        )
        .unwrap();
        assert_eq!(config.sort_key(), SortKey::DateDesc);
        assert_eq!(config.library_file, "books.json");
    }
}
