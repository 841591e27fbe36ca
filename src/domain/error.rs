//! Error types for the Bookfinder plugin.
//!
//! This module defines the centralized error type [`BookfinderError`], the
//! catalog-specific [`FetchError`], and a [`Result`] alias used throughout the
//! crate. All errors are implemented with the `thiserror` crate.

use thiserror::Error;

/// Failure of a single catalog request.
///
/// The surrounding application does not distinguish between transport
/// failures, non-success status codes and undecodable bodies: every catalog
/// failure is the same kind. The `reason` is kept for logs only and is never
/// shown to the user.
///
/// # Examples
///
/// ```
/// use bookfinder::domain::FetchError;
///
/// let err = FetchError::status(500);
/// assert_eq!(err.to_string(), "catalog fetch failed: status 500");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("catalog fetch failed: {reason}")]
pub struct FetchError {
    reason: String,
}

impl FetchError {
    /// Creates a fetch error with a free-form reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Creates a fetch error for a non-success HTTP status code.
    #[must_use]
    pub fn status(code: u16) -> Self {
        Self::new(format!("status {code}"))
    }

    /// Returns the log-only description of the failure.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// The main error type for Bookfinder operations.
///
/// Consolidates every error condition that can occur inside the library, from
/// key-value storage I/O to theme loading. Most variants wrap underlying errors
/// from external crates using `#[from]` for automatic conversion.
///
/// # Examples
///
/// ```
/// use bookfinder::domain::BookfinderError;
///
/// fn validate() -> Result<(), BookfinderError> {
///     Err(BookfinderError::Config("page_size must be positive".to_string()))
/// }
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum BookfinderError {
    /// Storage operation failed.
    ///
    /// Occurs when the key-value backend cannot read or write its data.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A catalog request failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// A specialized `Result` type for Bookfinder operations.
pub type Result<T> = std::result::Result<T, BookfinderError>;
