//! The user's saved-books list.
//!
//! [`SavedSet`] is an insertion-ordered list of [`BookRecord`]s that never holds
//! two records with the same key. It is mutated only through
//! [`SavedSet::toggle`], which removes a present record or appends an absent
//! one, so two consecutive toggles of the same record restore the original
//! membership.

use super::BookRecord;
use serde::Serialize;

/// Outcome of [`SavedSet::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The record was appended.
    Added,
    /// The record was removed.
    Removed,
}

/// Ordered, key-unique collection of saved records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SavedSet {
    books: Vec<BookRecord>,
}

impl SavedSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Builds a set from records, keeping the first occurrence of each key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookfinder::domain::{BookRecord, SavedSet};
    ///
    /// let set = SavedSet::from_records(vec![
    ///     BookRecord::new("/works/OL1W", "Dune"),
    ///     BookRecord::new("/works/OL1W", "Dune again"),
    /// ]);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn from_records(records: impl IntoIterator<Item = BookRecord>) -> Self {
        let mut set = Self::new();
        for record in records {
            if !set.contains(&record.key) {
                set.books.push(record);
            }
        }
        set
    }

    /// Returns whether a record with `key` is saved.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.books.iter().any(|b| b.key == key)
    }

    /// Removes `book` if its key is present, otherwise appends it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookfinder::domain::{BookRecord, SavedSet, Toggle};
    ///
    /// let mut set = SavedSet::new();
    /// let book = BookRecord::new("/works/OL1W", "Dune");
    /// assert_eq!(set.toggle(&book), Toggle::Added);
    /// assert_eq!(set.toggle(&book), Toggle::Removed);
    /// assert!(set.is_empty());
    /// ```
    pub fn toggle(&mut self, book: &BookRecord) -> Toggle {
        if let Some(pos) = self.books.iter().position(|b| b.key == book.key) {
            self.books.remove(pos);
            Toggle::Removed
        } else {
            self.books.push(book.clone());
            Toggle::Added
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Returns the saved records in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BookRecord> {
        self.books.iter()
    }
}

impl<'a> IntoIterator for &'a SavedSet {
    type Item = &'a BookRecord;
    type IntoIter = std::slice::Iter<'a, BookRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(n: u32) -> BookRecord {
        BookRecord::new(format!("/works/OL{n}W"), format!("Book {n}"))
    }

    #[test]
    fn toggle_pairs_restore_membership() {
        let mut set = SavedSet::from_records(vec![book(1), book(2)]);
        let original = set.clone();

        set.toggle(&book(3));
        set.toggle(&book(3));
        assert_eq!(set, original);

        set.toggle(&book(1));
        set.toggle(&book(1));
        let keys: Vec<&str> = set.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, vec!["/works/OL2W", "/works/OL1W"]);
    }

    #[test]
    fn keys_stay_unique_under_arbitrary_toggles() {
        let mut set = SavedSet::new();
        for n in [1, 2, 1, 3, 3, 3, 2, 4, 1] {
            set.toggle(&book(n));
            let mut keys: Vec<&str> = set.iter().map(|b| b.key.as_str()).collect();
            let before = keys.len();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), before);
        }
    }

    #[test]
    fn toggle_matches_on_key_not_metadata() {
        let mut set = SavedSet::new();
        set.toggle(&BookRecord::new("/works/OL1W", "Dune"));
        let outcome = set.toggle(&BookRecord::new("/works/OL1W", "Dune (Reissue)").with_cover(7));

        assert_eq!(outcome, Toggle::Removed);
        assert!(set.is_empty());
    }

    #[test]
    fn serializes_as_plain_array() {
        let set = SavedSet::from_records(vec![book(1)]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"[{"key":"/works/OL1W","title":"Book 1"}]"#);
    }
}
