//! Domain layer for the Bookfinder plugin.
//!
//! Holds the catalog entry type, the saved-books collection and the error
//! types, independent of Zellij APIs, storage backends and rendering.
//!
//! # Organization
//!
//! - [`book`]: `BookRecord`, one catalog search result
//! - [`saved`]: `SavedSet`, the key-unique saved-books list
//! - [`error`]: error types and result alias
//!
//! # Examples
//!
//! ```
//! use bookfinder::domain::{BookRecord, SavedSet};
//!
//! let mut saved = SavedSet::new();
//! saved.toggle(&BookRecord::new("/works/OL1W", "Dune"));
//! assert!(saved.contains("/works/OL1W"));
//! ```

pub mod book;
pub mod error;
pub mod saved;

pub use book::BookRecord;
pub use error::{BookfinderError, FetchError, Result};
pub use saved::{SavedSet, Toggle};
