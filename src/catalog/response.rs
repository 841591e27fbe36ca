//! Catalog response decoding.
//!
//! Turns a host `(status, body)` pair into normalized [`BookRecord`]s. Any
//! non-2xx status or undecodable body becomes a [`FetchError`]. A body whose
//! `docs` field is missing or is not an array decodes to an empty list.

use crate::domain::{BookRecord, FetchError};
use serde::Deserialize;
use std::collections::HashSet;

/// Top-level search response. Only `docs` is used.
#[derive(Debug, Deserialize)]
struct SearchBody {
    #[serde(default)]
    docs: serde_json::Value,
}

/// Decodes a catalog search response.
///
/// Entries are kept even when fields are missing or oddly typed: each such
/// field falls back on its own (empty title, unknown author, placeholder
/// cover). Entries without a string `key` cannot be identified and are
/// dropped. The number of entries is not
/// limited here; the request's `limit` already bounds it.
///
/// # Errors
///
/// Returns [`FetchError`] when `status` is outside `200..300` or the body is
/// not a JSON object.
///
/// # Examples
///
/// ```
/// use bookfinder::catalog::decode_search;
///
/// let body = br#"{"docs":[{"key":"/works/OL1W","title":"Dune","author_name":["Frank Herbert","Brian Herbert"],"cover_i":12}]}"#;
/// let books = decode_search(200, body)?;
/// assert_eq!(books[0].author_display(), "Frank Herbert");
/// assert!(decode_search(503, b"").is_err());
/// # Ok::<(), bookfinder::domain::FetchError>(())
/// ```
pub fn decode_search(status: u16, body: &[u8]) -> Result<Vec<BookRecord>, FetchError> {
    let _span = tracing::debug_span!("decode_search", status, body_len = body.len()).entered();

    if !(200..300).contains(&status) {
        tracing::debug!("catalog returned non-success status");
        return Err(FetchError::status(status));
    }

    let parsed: SearchBody = serde_json::from_slice(body)
        .map_err(|e| FetchError::new(format!("invalid response body: {e}")))?;

    let serde_json::Value::Array(docs) = parsed.docs else {
        tracing::debug!("response has no docs array");
        return Ok(vec![]);
    };

    let total = docs.len();
    let books: Vec<BookRecord> = docs
        .into_iter()
        .filter_map(|doc| match serde_json::from_value::<BookRecord>(doc) {
            Ok(book) if !book.key.is_empty() => Some(book),
            Ok(_) => {
                tracing::debug!("skipping doc with empty key");
                None
            }
            Err(e) => {
                tracing::debug!(error = %e, "skipping unidentifiable doc");
                None
            }
        })
        .collect();

    if books.len() < total {
        tracing::debug!(dropped = total - books.len(), "skipped unidentifiable docs");
    }
    tracing::debug!(count = books.len(), "decoded catalog docs");

    Ok(books)
}

/// Extracts suggestion titles from decoded records.
///
/// Keeps non-empty titles in catalog order, drops repeats (first occurrence
/// wins) and truncates to `limit`.
///
/// # Examples
///
/// ```
/// use bookfinder::catalog::suggestion_titles;
/// use bookfinder::domain::BookRecord;
///
/// let books = vec![
///     BookRecord::new("/works/OL1W", "Dune"),
///     BookRecord::new("/works/OL2W", "Dune"),
///     BookRecord::new("/works/OL3W", "Dune Messiah"),
/// ];
/// assert_eq!(suggestion_titles(&books, 7), vec!["Dune", "Dune Messiah"]);
/// ```
#[must_use]
pub fn suggestion_titles(books: &[BookRecord], limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    books
        .iter()
        .map(|book| book.title.as_str())
        .filter(|title| !title.is_empty())
        .filter(|title| seen.insert(*title))
        .take(limit)
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_success_status_is_fetch_error() {
        let body = br#"{"docs":[{"key":"/works/OL1W","title":"Dune"}]}"#;
        for status in [301, 404, 429, 500, 503] {
            assert_eq!(decode_search(status, body), Err(FetchError::status(status)));
        }
    }

    #[test]
    fn garbage_body_is_fetch_error() {
        assert!(decode_search(200, b"<html>oops</html>").is_err());
        assert!(decode_search(200, b"").is_err());
    }

    #[test]
    fn missing_or_malformed_docs_decode_to_empty() {
        assert_eq!(decode_search(200, br#"{"numFound":0}"#), Ok(vec![]));
        assert_eq!(decode_search(200, br#"{"docs":"nope"}"#), Ok(vec![]));
    }

    #[test]
    fn untitled_docs_are_kept_and_keyless_docs_dropped() {
        let body = br#"{"docs":[
            {"key":"/works/OL1W"},
            {"title":"No Key"},
            {"key":"/works/OL3W","title":"Third","author_name":[]}
        ]}"#;
        let books = decode_search(200, body).unwrap();

        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title, "");
        assert_eq!(books[1].title, "Third");
        assert_eq!(books[1].author_display(), "Unknown Author");
    }

    #[test]
    fn oddly_typed_fields_fall_back_without_dropping_the_doc() {
        let body = br#"{"docs":[
            {"key":"/works/OL1W","title":"No Cover","cover_i":-1},
            {"key":"/works/OL2W","title":"Single Author","author_name":"Jane Doe"},
            {"key":"/works/OL3W","title":"Fine"},
            {"key":17,"title":"Numeric Key"}
        ]}"#;
        let books = decode_search(200, body).unwrap();

        let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["No Cover", "Single Author", "Fine"]);
        assert_eq!(books[0].cover_id, None);
        assert_eq!(books[1].author_display(), "Jane Doe");
    }

    #[test]
    fn suggestions_are_capped_distinct_and_ordered() {
        let books: Vec<BookRecord> = (0..12)
            .map(|i| BookRecord::new(format!("/works/OL{i}W"), format!("Title {}", i / 2)))
            .collect();

        let titles = suggestion_titles(&books, 7);
        assert_eq!(titles.len(), 6);
        assert_eq!(titles[0], "Title 0");
        assert_eq!(titles[5], "Title 5");

        let many: Vec<BookRecord> = (0..20)
            .map(|i| BookRecord::new(format!("/works/OL{i}W"), format!("Title {i}")))
            .collect();
        assert_eq!(suggestion_titles(&many, 7).len(), 7);
    }

    #[test]
    fn empty_titles_never_become_suggestions() {
        let books = vec![
            BookRecord::new("/works/OL1W", ""),
            BookRecord::new("/works/OL2W", "Emma"),
        ];
        assert_eq!(suggestion_titles(&books, 7), vec!["Emma"]);
    }
}
