//! Catalog request construction.
//!
//! Builds `GET <host>/search.json?q=<query>&limit=<n>` URLs and the
//! correlation context that travels with each request through the host.

use std::collections::BTreeMap;

const CONTEXT_PURPOSE: &str = "purpose";
const CONTEXT_ID: &str = "id";
const PURPOSE_SEARCH: &str = "search";
const PURPOSE_SUGGEST: &str = "suggest";

/// Why a catalog request was issued.
///
/// The embedded counter lets the state machine discard responses that belong
/// to a superseded search or suggestion schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPurpose {
    /// A committed search. `generation` is the search generation at issue time.
    Search { generation: u64 },
    /// A debounced suggestion lookup. `ticket` is the debouncer ticket that fired.
    Suggest { ticket: u64 },
}

impl RequestPurpose {
    /// Encodes the purpose as a host request context.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookfinder::catalog::RequestPurpose;
    ///
    /// let purpose = RequestPurpose::Suggest { ticket: 9 };
    /// let context = purpose.to_context();
    /// assert_eq!(RequestPurpose::from_context(&context), Some(purpose));
    /// ```
    #[must_use]
    pub fn to_context(&self) -> BTreeMap<String, String> {
        let (purpose, id) = match self {
            Self::Search { generation } => (PURPOSE_SEARCH, *generation),
            Self::Suggest { ticket } => (PURPOSE_SUGGEST, *ticket),
        };

        BTreeMap::from([
            (CONTEXT_PURPOSE.to_string(), purpose.to_string()),
            (CONTEXT_ID.to_string(), id.to_string()),
        ])
    }

    /// Decodes a purpose from a host request context.
    ///
    /// Returns `None` for contexts this plugin did not produce.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        let id = context.get(CONTEXT_ID)?.parse::<u64>().ok()?;

        match context.get(CONTEXT_PURPOSE).map(String::as_str) {
            Some(PURPOSE_SEARCH) => Some(Self::Search { generation: id }),
            Some(PURPOSE_SUGGEST) => Some(Self::Suggest { ticket: id }),
            _ => None,
        }
    }
}

/// A catalog request ready to hand to the host transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    /// Fully built request URL.
    pub url: String,
    /// Correlation data returned with the response.
    pub purpose: RequestPurpose,
}

/// Builds the search URL with a percent-encoded query.
pub(crate) fn search_url(base: &str, text: &str, limit: usize) -> String {
    format!(
        "{base}/search.json?q={}&limit={limit}",
        urlencoding::encode(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_percent_encoded() {
        let url = search_url("https://openlibrary.org", "Tolkien & Lewis/Inklings?", 24);
        assert_eq!(
            url,
            "https://openlibrary.org/search.json?q=Tolkien%20%26%20Lewis%2FInklings%3F&limit=24"
        );
    }

    #[test]
    fn search_context_round_trips() {
        let purpose = RequestPurpose::Search { generation: 41 };
        let context = purpose.to_context();

        assert_eq!(context.get("purpose").map(String::as_str), Some("search"));
        assert_eq!(context.get("id").map(String::as_str), Some("41"));
        assert_eq!(RequestPurpose::from_context(&context), Some(purpose));
    }

    #[test]
    fn foreign_context_is_rejected() {
        let mut context = BTreeMap::new();
        assert_eq!(RequestPurpose::from_context(&context), None);

        context.insert("purpose".to_string(), "upload".to_string());
        context.insert("id".to_string(), "1".to_string());
        assert_eq!(RequestPurpose::from_context(&context), None);

        context.insert("purpose".to_string(), "search".to_string());
        context.insert("id".to_string(), "not-a-number".to_string());
        assert_eq!(RequestPurpose::from_context(&context), None);
    }
}
