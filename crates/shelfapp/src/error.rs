use thiserror::Error;

/// A malformed filter specification.
///
/// `field` is a dotted path into the specification (e.g. `categories.tags`,
/// `characters[1]`, `scalar.rating`) so the caller can point at the control
/// that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid filter at `{field}`: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: u64 },

    #[error("{kind} already exists: {name}")]
    Duplicate { kind: &'static str, name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl ShelfError {
    /// True for failures that originate in the persistence layer.
    pub fn is_store_error(&self) -> bool {
        matches!(
            self,
            ShelfError::Io(_) | ShelfError::Serialization(_) | ShelfError::Store(_)
        )
    }

    pub fn is_validation_error(&self) -> bool {
        matches!(self, ShelfError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
