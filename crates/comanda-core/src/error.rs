//! Error types for the comanda-core library.
//!
//! Order extraction itself cannot fail; these errors come from loading and
//! saving configuration.

use thiserror::Error;

/// Main error type for the comanda library.
#[derive(Error, Debug)]
pub enum ComandaError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the comanda library.
pub type Result<T> = std::result::Result<T, ComandaError>;
