//! Storage layer for durable user preferences.
//!
//! Persists the saved-books list and the dark-mode preference across plugin
//! sessions in a string key-value store shaped like browser local storage.
//!
//! # Modules
//!
//! - `backend`: `KeyValueStore` trait and the volatile `MemoryStore`
//! - `json`: JSON file-backed store with atomic writes
//! - `persistence`: best-effort adapter for the saved set and theme

pub mod backend;
pub mod json;
pub mod persistence;

pub use backend::{KeyValueStore, MemoryStore};
pub use json::JsonFileStore;
pub use persistence::{Persistence, DARK_MODE_KEY, SAVED_BOOKS_KEY};
