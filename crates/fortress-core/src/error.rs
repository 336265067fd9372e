//! Error types for HP Fortress

use thiserror::Error;

/// Main error type for HP Fortress operations
///
/// Nothing on the page is fatal. These errors surface at the edges
/// (config loading, clipboard) where they get logged and dropped.
#[derive(Error, Debug)]
pub enum FortressError {
    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file was not valid JSON for [`crate::FortressConfig`]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config parsed but holds values that make no sense
    #[error("Invalid config: {0}")]
    Config(String),

    /// System clipboard unavailable or the write was refused
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Result type alias using FortressError
pub type FortressResult<T> = Result<T, FortressError>;
