//! Book record domain model.
//!
//! A [`BookRecord`] is one normalized catalog search result. Records are
//! immutable once decoded from a catalog response and are identified solely by
//! their `key`, so two records with the same key compare equal even if the
//! catalog returned slightly different metadata for them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::hash::{Hash, Hasher};

/// Author label shown when the catalog did not return any author.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// One catalog entry.
///
/// # Fields
///
/// - `key`: stable catalog identifier such as `/works/OL1W`, used for equality
/// - `title`: display title, empty when the catalog omitted it
/// - `author_name`: first listed author, if any
/// - `cover_id`: numeric cover reference used to build the cover image URL
///
/// Decoding is tolerant field by field: a title, author or cover of an
/// unexpected type is treated as absent rather than rejecting the record.
/// `author_name` accepts the catalog's list form and keeps the first name.
/// Cover references that are not positive integers mean "no cover".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRecord {
    pub key: String,
    #[serde(default, deserialize_with = "lenient_title")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_author", skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(
        default,
        alias = "cover_i",
        deserialize_with = "lenient_cover",
        skip_serializing_if = "Option::is_none"
    )]
    pub cover_id: Option<u64>,
}

fn lenient_title<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(title) => title,
        _ => String::new(),
    })
}

fn lenient_author<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let name = match value {
        Value::String(name) => Some(name),
        Value::Array(names) => names.into_iter().next().and_then(|first| match first {
            Value::String(name) => Some(name),
            _ => None,
        }),
        _ => None,
    };
    Ok(name.filter(|name| !name.is_empty()))
}

fn lenient_cover<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_u64().filter(|id| *id > 0))
}

impl BookRecord {
    /// Creates a record with a key and title and no author or cover.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookfinder::domain::BookRecord;
    ///
    /// let book = BookRecord::new("/works/OL45804W", "Fantastic Mr Fox");
    /// assert_eq!(book.key, "/works/OL45804W");
    /// assert!(book.cover_id.is_none());
    /// ```
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            author_name: None,
            cover_id: None,
        }
    }

    /// Sets the first author.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author_name = Some(author.into());
        self
    }

    /// Sets the cover reference.
    #[must_use]
    pub const fn with_cover(mut self, cover_id: u64) -> Self {
        self.cover_id = Some(cover_id);
        self
    }

    /// Returns the author label, falling back to [`UNKNOWN_AUTHOR`].
    #[must_use]
    pub fn author_display(&self) -> &str {
        self.author_name.as_deref().unwrap_or(UNKNOWN_AUTHOR)
    }
}

impl PartialEq for BookRecord {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for BookRecord {}

impl Hash for BookRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_everything_but_key() {
        let a = BookRecord::new("/works/OL1W", "Dune").with_author("Frank Herbert");
        let b = BookRecord::new("/works/OL1W", "Dune (Deluxe Edition)").with_cover(42);
        let c = BookRecord::new("/works/OL2W", "Dune");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn author_falls_back_to_unknown() {
        let book = BookRecord::new("/works/OL1W", "Anonymous Poems");
        assert_eq!(book.author_display(), "Unknown Author");

        let book = book.with_author("Sappho");
        assert_eq!(book.author_display(), "Sappho");
    }

    #[test]
    fn deserializes_catalog_cover_alias_and_missing_title() {
        let json = r#"{"key":"/works/OL9W","cover_i":8739161}"#;
        let book: BookRecord = serde_json::from_str(json).unwrap();

        assert_eq!(book.cover_id, Some(8_739_161));
        assert_eq!(book.title, "");
        assert!(book.author_name.is_none());
    }

    #[test]
    fn odd_field_types_are_treated_as_absent() {
        let json = r#"[
            {"key":"/works/OL1W","title":"No Cover","cover_id":-1},
            {"key":"/works/OL2W","title":42,"author_name":{"name":"Jane"},"cover_id":"12"},
            {"key":"/works/OL3W","title":"Listed","author_name":["Jane Doe","John Roe"],"cover_i":7}
        ]"#;
        let books: Vec<BookRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(books.len(), 3);
        assert_eq!(books[0].cover_id, None);
        assert_eq!(books[1].title, "");
        assert_eq!(books[1].author_display(), UNKNOWN_AUTHOR);
        assert_eq!(books[1].cover_id, None);
        assert_eq!(books[2].author_display(), "Jane Doe");
        assert_eq!(books[2].cover_id, Some(7));
    }

    #[test]
    fn stored_record_round_trips_through_json() {
        let book = BookRecord::new("/works/OL1W", "Dune").with_author("Frank Herbert").with_cover(11);
        let json = serde_json::to_string(&book).unwrap();
        let back: BookRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(back.author_name.as_deref(), Some("Frank Herbert"));
        assert_eq!(back.cover_id, Some(11));
    }
}
