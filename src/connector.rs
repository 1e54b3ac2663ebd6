//! Connector trait implemented by every image provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{FilterSet, LicensedAsset, SearchQuery, SearchResult};

/// Static description of a connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorInfo {
    /// Display name of the provider.
    pub name: String,
    /// Short identifier (e.g., "shutterstock").
    pub shortcut: String,
    /// Number of items per search page.
    pub page_size: u32,
}

/// Trait for image provider connectors.
///
/// Every operation degrades to a default value instead of returning an error:
/// failures are logged or carried inside the returned structure.
#[async_trait]
pub trait ImageProviderConnector: Send + Sync {
    /// Returns the connector description.
    fn info(&self) -> &ConnectorInfo;

    /// Searches the provider.
    async fn search(&self, query: &SearchQuery) -> SearchResult;

    /// Licenses an image and returns its download location and metadata.
    async fn get_file_url_and_extension(&self, image_id: &str) -> LicensedAsset;

    /// Returns the filter schema the host should render.
    async fn get_available_filters(&self) -> FilterSet;

    /// Label of the host's "add" button.
    fn add_button_label(&self) -> String;

    /// Icon identifier of the host's "add" button.
    fn add_button_icon(&self) -> String;

    /// Extra HTML attributes of the host's "add" button, in order.
    fn add_button_attributes(&self) -> Vec<(String, String)>;

    /// Returns the connector name.
    fn name(&self) -> &str {
        &self.info().name
    }

    /// Returns the connector shortcut.
    fn shortcut(&self) -> &str {
        &self.info().shortcut
    }
}
