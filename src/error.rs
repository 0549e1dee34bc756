//! SecondBrain error types

use thiserror::Error;

/// SecondBrain error type
#[derive(Error, Debug)]
pub enum Error {
    /// Category filter outside `all` and the three content kinds
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Two items in one collection share an id
    #[error("Duplicate item id: {0}")]
    DuplicateId(String),

    /// Malformed content item
    #[error("Content error: {0}")]
    Content(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for SecondBrain operations
pub type Result<T> = std::result::Result<T, Error>;
