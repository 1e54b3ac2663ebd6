//! Host-facing result types.

use serde::{Deserialize, Serialize};

/// A single image returned by a search-like operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    /// Provider image id.
    pub id: String,
    /// Preview image URL, empty when the provider sent none.
    pub preview_url: String,
}

impl SearchResultItem {
    /// Creates a new result item.
    pub fn new(id: impl Into<String>, preview_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            preview_url: preview_url.into(),
        }
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Page number (1-indexed).
    pub page: u32,
    /// Total number of matches reported by the provider.
    pub total_count: u64,
    /// Images on this page, in provider order.
    items: Vec<SearchResultItem>,
    /// Filters the host must disable for this result.
    pub disabled_filters: Vec<String>,
    /// Whether the search succeeded.
    pub success: bool,
    /// Error text when `success` is false.
    pub message: Option<String>,
}

impl Default for SearchResult {
    fn default() -> Self {
        Self::new(1)
    }
}

impl SearchResult {
    /// Creates an empty, successful result for the given page.
    pub fn new(page: u32) -> Self {
        Self {
            page,
            total_count: 0,
            items: Vec::new(),
            disabled_filters: Vec::new(),
            success: true,
            message: None,
        }
    }

    /// Adds an item.
    pub fn add_item(&mut self, item: SearchResultItem) {
        self.items.push(item);
    }

    /// Returns the items.
    pub fn items(&self) -> &[SearchResultItem] {
        &self.items
    }

    /// Keeps at most `len` items.
    pub fn truncate(&mut self, len: usize) {
        self.items.truncate(len);
    }

    /// Marks the result as failed with the given message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.success = false;
        self.message = Some(message.into());
    }

    /// Sets the disabled filters.
    pub fn with_disabled_filters(mut self, filters: Vec<String>) -> Self {
        self.disabled_filters = filters;
        self
    }
}

/// Descriptive metadata of a licensed image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetMetadata {
    /// Image description as provided by the contributor.
    pub title: String,
    /// Attribution line, e.g. "Shutterstock #123".
    pub description: String,
    /// Width in pixels of the largest JPEG variant.
    pub width: u32,
    /// Height in pixels of the largest JPEG variant.
    pub height: u32,
}

/// Outcome of a licensing request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicensedAsset {
    /// Provider image id.
    pub id: String,
    /// Download URL of the licensed file.
    pub url: Option<String>,
    /// File extension derived from `url`, empty if unknown.
    pub extension: String,
    /// Descriptive metadata, defaulted when the detail fetch fails.
    pub metadata: AssetMetadata,
    /// Human-readable error messages from the provider.
    pub errors: Vec<String>,
}

impl LicensedAsset {
    /// Creates an empty licensing outcome for an image.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Returns whether a download URL is available.
    pub fn is_downloadable(&self) -> bool {
        self.url.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_new() {
        let result = SearchResult::new(2);
        assert_eq!(result.page, 2);
        assert_eq!(result.total_count, 0);
        assert!(result.items().is_empty());
        assert!(result.disabled_filters.is_empty());
        assert!(result.success);
        assert!(result.message.is_none());
    }

    #[test]
    fn test_search_result_default_is_first_page() {
        assert_eq!(SearchResult::default().page, 1);
    }

    #[test]
    fn test_search_result_add_item() {
        let mut result = SearchResult::new(1);
        result.add_item(SearchResultItem::new("1", "https://img/1.jpg"));
        result.add_item(SearchResultItem::new("2", ""));
        assert_eq!(result.items().len(), 2);
        assert_eq!(result.items()[1].preview_url, "");
    }

    #[test]
    fn test_search_result_fail() {
        let mut result = SearchResult::new(1);
        result.fail("HTTP 500");
        assert!(!result.success);
        assert_eq!(result.message.as_deref(), Some("HTTP 500"));
    }

    #[test]
    fn test_search_result_serialization() {
        let mut result = SearchResult::new(1)
            .with_disabled_filters(vec!["color".to_string()]);
        result.add_item(SearchResultItem::new("42", "https://img/42.jpg"));
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"disabled_filters\":[\"color\"]"));
        assert!(json.contains("\"preview_url\":\"https://img/42.jpg\""));
    }

    #[test]
    fn test_licensed_asset_new() {
        let asset = LicensedAsset::new("99");
        assert_eq!(asset.id, "99");
        assert!(!asset.is_downloadable());
        assert_eq!(asset.extension, "");
        assert_eq!(asset.metadata, AssetMetadata::default());
        assert!(asset.errors.is_empty());
    }
}
