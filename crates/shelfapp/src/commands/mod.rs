//! # Command Layer
//!
//! The business logic behind every shelf operation. Each command lives in its
//! own submodule as plain functions over a [`Catalog`](crate::store::Catalog)
//! and returns a structured [`CmdResult`].
//!
//! Commands do no terminal I/O, parse no arguments and pick no exit codes.
//! The UI layer decides how to render what they return.
//!
//! ## Command Modules
//!
//! - [`search`]: run the filter compiler over the current library
//! - [`info`]: one book with its linked names and characters
//! - [`series`]: the books sharing a book's series, in reading order
//! - [`books`]: add, update and delete books
//! - [`values`]: artists, genres, tags and series
//! - [`traits`]: character traits
//! - [`config`]: inspect the loaded configuration
//!
//! Command tests use the in-memory catalog and live next to each command.

use serde::Serialize;

use crate::config::ShelfConfig;
use crate::model::{Book, CategoricalValue, Trait};

pub mod books;
pub mod config;
pub mod info;
pub mod search;
pub mod series;
pub mod traits;
pub mod values;

pub use info::{BookInfo, CharacterInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    /// Books the command created, changed or removed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affected_books: Vec<Book>,
    /// Books to display, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed_books: Vec<Book>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<CategoricalValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub traits: Vec<Trait>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<BookInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ShelfConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_values(mut self, values: Vec<CategoricalValue>) -> Self {
        self.values = values;
        self
    }

    pub fn with_traits(mut self, traits: Vec<Trait>) -> Self {
        self.traits = traits;
        self
    }

    pub fn with_info(mut self, info: BookInfo) -> Self {
        self.info = Some(info);
        self
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// "1 book", "3 books".
pub(crate) fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Names compare case-insensitively, ignoring surrounding whitespace.
pub(crate) fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Trims a user-supplied name, rejecting blank ones.
pub(crate) fn clean_name(kind: &str, name: &str) -> crate::error::Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(crate::error::ShelfError::Api(format!(
            "{} name cannot be empty",
            kind
        )));
    }
    Ok(trimmed.to_string())
}
