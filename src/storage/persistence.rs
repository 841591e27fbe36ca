//! Best-effort persistence of the saved-books list and theme preference.
//!
//! [`Persistence`] wraps a [`KeyValueStore`] with the two durable values the
//! plugin keeps between sessions:
//!
//! | Key          | Value                                   |
//! |--------------|-----------------------------------------|
//! | `savedBooks` | JSON array of `BookRecord`              |
//! | `darkMode`   | `"true"` or `"false"`                   |
//!
//! The `try_*` methods report failures. The plain methods never fail: a read
//! that fails or finds malformed data yields the default, and a failed write
//! is logged and dropped.

use crate::domain::error::Result;
use crate::domain::{BookRecord, SavedSet};
use crate::storage::backend::KeyValueStore;

/// Storage key of the saved-books list.
pub const SAVED_BOOKS_KEY: &str = "savedBooks";

/// Storage key of the dark-mode preference.
pub const DARK_MODE_KEY: &str = "darkMode";

/// The only stored value that means "dark mode on".
const TRUE_MARKER: &str = "true";

/// Durable home of the [`SavedSet`] and the theme preference.
///
/// # Examples
///
/// ```
/// use bookfinder::domain::{BookRecord, SavedSet};
/// use bookfinder::storage::{MemoryStore, Persistence};
///
/// let mut persistence = Persistence::new(MemoryStore::default());
/// assert!(persistence.load_saved_set().is_empty());
/// assert!(!persistence.load_theme());
///
/// let saved = SavedSet::from_records(vec![BookRecord::new("/works/OL1W", "Dune")]);
/// persistence.store_saved_set(&saved);
/// persistence.store_theme(true);
///
/// assert_eq!(persistence.load_saved_set(), saved);
/// assert!(persistence.load_theme());
/// ```
#[derive(Debug)]
pub struct Persistence<S> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    const fn store(&self) -> &S {
        &self.store
    }

    /// Reads the saved-books list, failing on storage or decoding errors.
    ///
    /// An absent key is an empty set, not an error. Duplicate keys in stored
    /// data are collapsed to their first occurrence.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the stored value is not
    /// a JSON array of records.
    pub fn try_load_saved_set(&self) -> Result<SavedSet> {
        let Some(raw) = self.store.get(SAVED_BOOKS_KEY)? else {
            return Ok(SavedSet::new());
        };
        let records: Vec<BookRecord> = serde_json::from_str(&raw)?;
        Ok(SavedSet::from_records(records))
    }

    /// Reads the saved-books list, degrading to an empty set on any failure.
    pub fn load_saved_set(&self) -> SavedSet {
        self.try_load_saved_set().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "saved books unreadable, starting empty");
            SavedSet::new()
        })
    }

    /// Writes the saved-books list.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the store write fails.
    pub fn try_store_saved_set(&mut self, saved: &SavedSet) -> Result<()> {
        let json = serde_json::to_string(saved)?;
        self.store.set(SAVED_BOOKS_KEY, &json)
    }

    /// Writes the saved-books list, logging and discarding failures.
    pub fn store_saved_set(&mut self, saved: &SavedSet) {
        match self.try_store_saved_set(saved) {
            Ok(()) => tracing::debug!(count = saved.len(), "saved books persisted"),
            Err(e) => tracing::warn!(error = %e, "failed to persist saved books"),
        }
    }

    /// Reads the dark-mode preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn try_load_theme(&self) -> Result<bool> {
        Ok(self.store.get(DARK_MODE_KEY)?.as_deref() == Some(TRUE_MARKER))
    }

    /// Reads the dark-mode preference; anything but the literal `"true"` is light.
    pub fn load_theme(&self) -> bool {
        self.try_load_theme().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "theme preference unreadable, using light");
            false
        })
    }

    /// Writes the dark-mode preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub fn try_store_theme(&mut self, dark: bool) -> Result<()> {
        self.store.set(DARK_MODE_KEY, if dark { "true" } else { "false" })
    }

    /// Writes the dark-mode preference, logging and discarding failures.
    pub fn store_theme(&mut self, dark: bool) {
        if let Err(e) = self.try_store_theme(dark) {
            tracing::warn!(error = %e, dark, "failed to persist theme preference");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookfinderError;
    use crate::storage::MemoryStore;

    /// Store whose every operation fails.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(BookfinderError::Storage("disk on fire".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(BookfinderError::Storage("disk on fire".to_string()))
        }
    }

    #[test]
    fn malformed_saved_books_degrade_to_empty() {
        let mut store = MemoryStore::default();
        store.set(SAVED_BOOKS_KEY, "{\"oops\":").unwrap();
        let persistence = Persistence::new(store);

        assert!(persistence.try_load_saved_set().is_err());
        assert!(persistence.load_saved_set().is_empty());
    }

    #[test]
    fn one_odd_record_does_not_empty_the_saved_set() {
        let mut store = MemoryStore::default();
        store
            .set(
                SAVED_BOOKS_KEY,
                r#"[{"key":"/works/OL1W","title":"A","cover_id":-1},{"key":"/works/OL2W","title":"B","cover_id":9}]"#,
            )
            .unwrap();
        let saved = Persistence::new(store).load_saved_set();

        assert_eq!(saved.len(), 2);
        assert_eq!(saved.as_slice()[0].cover_id, None);
        assert_eq!(saved.as_slice()[1].cover_id, Some(9));
    }

    #[test]
    fn stored_duplicates_are_collapsed() {
        let mut store = MemoryStore::default();
        store
            .set(
                SAVED_BOOKS_KEY,
                r#"[{"key":"/works/OL1W","title":"A"},{"key":"/works/OL1W","title":"B"}]"#,
            )
            .unwrap();
        let saved = Persistence::new(store).load_saved_set();

        assert_eq!(saved.len(), 1);
        assert_eq!(saved.as_slice()[0].title, "A");
    }

    #[test]
    fn only_literal_true_means_dark() {
        for (raw, expected) in [("true", true), ("false", false), ("TRUE", false), ("1", false), ("", false)] {
            let mut store = MemoryStore::default();
            store.set(DARK_MODE_KEY, raw).unwrap();
            assert_eq!(Persistence::new(store).load_theme(), expected, "value {raw:?}");
        }
    }

    #[test]
    fn theme_is_written_as_string_marker() {
        let mut persistence = Persistence::new(MemoryStore::default());
        persistence.store_theme(false);
        assert_eq!(persistence.store().get(DARK_MODE_KEY).unwrap().as_deref(), Some("false"));
        persistence.store_theme(true);
        assert_eq!(persistence.store().get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn broken_store_never_fails_observably() {
        let mut persistence = Persistence::new(BrokenStore);

        assert!(persistence.load_saved_set().is_empty());
        assert!(!persistence.load_theme());

        persistence.store_saved_set(&SavedSet::from_records(vec![BookRecord::new("/works/OL1W", "Dune")]));
        persistence.store_theme(true);

        assert!(persistence.try_store_theme(true).is_err());
    }
}
