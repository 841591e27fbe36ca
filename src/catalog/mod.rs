//! Catalog client for the Open Library search service.
//!
//! The plugin never performs network I/O itself: Zellij's `web_request` host
//! call is the transport. The client therefore splits one catalog search into
//! two pure halves that bracket the host round trip:
//!
//! ```text
//! CatalogClient::search_request ──► web_request ──► WebRequestResult
//!                                                        │
//! CatalogClient::complete  ◄─────────────────────────────┘
//! ```
//!
//! Each request carries a [`RequestPurpose`] that is round-tripped through the
//! host as the request context, so responses can be routed back to the main
//! search or to the suggestion dropdown and fenced against newer requests.
//!
//! # Modules
//!
//! - [`request`]: URL construction and correlation context
//! - [`response`]: status classification and body decoding
//!
//! # Example
//!
//! ```
//! use bookfinder::catalog::{CatalogClient, RequestPurpose};
//!
//! let client = CatalogClient::default();
//! let request = client.search_request("harry potter", 24, RequestPurpose::Search { generation: 1 });
//! assert_eq!(
//!     request.url,
//!     "https://openlibrary.org/search.json?q=harry%20potter&limit=24"
//! );
//!
//! let books = client.complete(200, br#"{"docs":[{"key":"/works/OL82563W","title":"Harry Potter"}]}"#)?;
//! assert_eq!(books.len(), 1);
//! # Ok::<(), bookfinder::domain::FetchError>(())
//! ```

pub mod request;
pub mod response;

pub use request::{CatalogRequest, RequestPurpose};
pub use response::{decode_search, suggestion_titles};

use crate::domain::{BookRecord, FetchError};

/// Default catalog host.
pub const DEFAULT_CATALOG_URL: &str = "https://openlibrary.org";

/// Default cover image host.
pub const DEFAULT_COVERS_URL: &str = "https://covers.openlibrary.org";

/// Image shown for records without a cover reference.
pub const PLACEHOLDER_COVER_URL: &str = "https://via.placeholder.com/320x480?text=No+Cover";

/// Number of entries requested for a committed search.
pub const DEFAULT_PAGE_SIZE: usize = 24;

/// Number of entries requested for, and titles kept from, a suggestion lookup.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 7;

/// Builds catalog requests and decodes their responses.
///
/// Holds only the configured hosts. There is no cache and no retry policy:
/// identical queries produce identical requests and every request is a single
/// attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogClient {
    catalog_url: String,
    covers_url: String,
}

impl CatalogClient {
    /// Creates a client for the given catalog and cover hosts.
    ///
    /// Trailing slashes are stripped so URLs can be joined with fixed paths.
    pub fn new(catalog_url: impl Into<String>, covers_url: impl Into<String>) -> Self {
        Self {
            catalog_url: catalog_url.into().trim_end_matches('/').to_string(),
            covers_url: covers_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Builds a search request for `text`, asking for at most `limit` entries.
    ///
    /// `text` is used verbatim; callers trim and validate it beforehand.
    #[must_use]
    pub fn search_request(&self, text: &str, limit: usize, purpose: RequestPurpose) -> CatalogRequest {
        CatalogRequest {
            url: request::search_url(&self.catalog_url, text, limit),
            purpose,
        }
    }

    /// Decodes the host's response to a request built by [`search_request`](Self::search_request).
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] for non-2xx statuses and undecodable bodies.
    pub fn complete(&self, status: u16, body: &[u8]) -> Result<Vec<BookRecord>, FetchError> {
        decode_search(status, body)
    }

    /// Returns the medium-size cover image URL for a record, or the placeholder.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookfinder::catalog::CatalogClient;
    /// use bookfinder::domain::BookRecord;
    ///
    /// let client = CatalogClient::default();
    /// let book = BookRecord::new("/works/OL1W", "Dune").with_cover(8_739_161);
    /// assert_eq!(client.cover_url(&book), "https://covers.openlibrary.org/b/id/8739161-M.jpg");
    /// ```
    #[must_use]
    pub fn cover_url(&self, book: &BookRecord) -> String {
        book.cover_id.map_or_else(
            || PLACEHOLDER_COVER_URL.to_string(),
            |cover| format!("{}/b/id/{cover}-M.jpg", self.covers_url),
        )
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL, DEFAULT_COVERS_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hosts_lose_trailing_slashes() {
        let client = CatalogClient::new("http://localhost:8080/", "http://covers.local/");
        let request = client.search_request("dune", 7, RequestPurpose::Suggest { ticket: 3 });

        assert_eq!(request.url, "http://localhost:8080/search.json?q=dune&limit=7");
        assert_eq!(
            client.cover_url(&BookRecord::new("/works/OL1W", "Dune").with_cover(5)),
            "http://covers.local/b/id/5-M.jpg"
        );
    }

    #[test]
    fn missing_cover_uses_placeholder() {
        let client = CatalogClient::default();
        let book = BookRecord::new("/works/OL1W", "Dune");
        assert_eq!(client.cover_url(&book), PLACEHOLDER_COVER_URL);
    }
}
