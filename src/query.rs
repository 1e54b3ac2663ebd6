//! Search query representation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Filter name carrying the free-text search terms.
pub const QUERY_FIELD: &str = "query";

/// Filter name selecting collection browsing instead of keyword search.
pub const COLLECTION_FIELD: &str = "collection";

/// A search request: filter name to value, plus a page number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Filter values keyed by filter name.
    #[serde(default)]
    pub filters: BTreeMap<String, String>,
    /// Page number (1-indexed).
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            filters: BTreeMap::new(),
            page: 1,
        }
    }
}

impl SearchQuery {
    /// Creates a new search query with the given terms.
    pub fn new(query: impl Into<String>) -> Self {
        Self::default().with_filter(QUERY_FIELD, query)
    }

    /// Sets a filter value.
    pub fn with_filter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(name.into(), value.into());
        self
    }

    /// Sets the collection to browse.
    pub fn with_collection(self, collection_id: impl Into<String>) -> Self {
        self.with_filter(COLLECTION_FIELD, collection_id)
    }

    /// Sets the page number.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Returns the free-text terms, or an empty string.
    pub fn terms(&self) -> &str {
        self.filter(QUERY_FIELD).unwrap_or_default()
    }

    /// Returns a filter value if set.
    pub fn filter(&self, name: &str) -> Option<&str> {
        self.filters.get(name).map(String::as_str)
    }

    /// Returns the collection id if collection browsing was requested.
    pub fn collection(&self) -> Option<&str> {
        self.filter(COLLECTION_FIELD).filter(|id| !id.is_empty())
    }

    /// Trims every value, drops empty filters and clamps the page to 1.
    pub fn normalized(&self) -> Self {
        let filters = self
            .filters
            .iter()
            .filter_map(|(name, value)| {
                let value = value.trim();
                (!value.is_empty()).then(|| (name.clone(), value.to_string()))
            })
            .collect();

        Self {
            filters,
            page: self.page.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_new() {
        let query = SearchQuery::new("mountain lake");
        assert_eq!(query.terms(), "mountain lake");
        assert_eq!(query.page, 1);
        assert!(query.collection().is_none());
    }

    #[test]
    fn test_search_query_default_has_no_terms() {
        let query = SearchQuery::default();
        assert_eq!(query.terms(), "");
        assert!(query.filters.is_empty());
    }

    #[test]
    fn test_search_query_builder_chain() {
        let query = SearchQuery::new("cat")
            .with_filter("orientation", "vertical")
            .with_filter("color", "grayscale")
            .with_page(3);
        assert_eq!(query.filter("orientation"), Some("vertical"));
        assert_eq!(query.filter("color"), Some("grayscale"));
        assert_eq!(query.page, 3);
    }

    #[test]
    fn test_search_query_with_collection() {
        let query = SearchQuery::default().with_collection("987");
        assert_eq!(query.collection(), Some("987"));
    }

    #[test]
    fn test_empty_collection_is_not_collection_mode() {
        let query = SearchQuery::default().with_collection("");
        assert!(query.collection().is_none());
    }

    #[test]
    fn test_normalized_drops_empty_and_trims() {
        let query = SearchQuery::new("  dog  ")
            .with_filter("color", "")
            .with_filter("orientation", "   ")
            .with_filter("image_type", "photo");
        let normalized = query.normalized();
        assert_eq!(normalized.terms(), "dog");
        assert!(normalized.filter("color").is_none());
        assert!(normalized.filter("orientation").is_none());
        assert_eq!(normalized.filter("image_type"), Some("photo"));
    }

    #[test]
    fn test_normalized_clamps_page() {
        let query = SearchQuery::new("dog").with_page(0);
        assert_eq!(query.normalized().page, 1);
    }

    #[test]
    fn test_search_query_deserialization_defaults() {
        let query: SearchQuery = serde_json::from_str(r#"{"filters":{"query":"sea"}}"#).unwrap();
        assert_eq!(query.terms(), "sea");
        assert_eq!(query.page, 1);
    }
}
