//! Error types for the country explorer.
//!
//! This module defines the centralized error type [`ExplorerError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Fetch failures never escape the directory store: they are rendered through
//! `Display` into the store's `error` field. Storage and configuration errors are
//! returned to the caller.

use thiserror::Error;

/// The main error type for country explorer operations.
///
/// # Examples
///
/// ```
/// use country_explorer::ExplorerError;
///
/// let err = ExplorerError::Status(500);
/// assert_eq!(err.to_string(), "Failed to fetch countries: 500");
/// ```
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    ///
    /// The message is the transport's own description.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The data source answered with a non-success HTTP status.
    #[error("Failed to fetch countries: {0}")]
    Status(u16),

    /// The response body was not a JSON array of country records.
    ///
    /// The message is the decoder's own description.
    #[error("{0}")]
    Decode(String),

    /// Preference storage operation failed.
    ///
    /// Occurs when reading from or writing to the preference backend fails.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for country explorer operations.
pub type Result<T> = std::result::Result<T, ExplorerError>;
