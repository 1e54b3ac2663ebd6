//! # stock-connector
//!
//! A backend connector that lets an asset-management host search, filter and
//! license stock images from an image-licensing API.
//!
//! The host renders the UI, stores credentials and imports the files; this
//! library provides:
//!
//! - Keyword search and collection browsing mapped into one result shape
//! - License acquisition with download URL, extension and metadata
//! - A filter schema with localized labels
//! - A capability trait every provider implements uniformly
//!
//! ## Example
//!
//! ```rust,no_run
//! use stock_connector::{
//!     providers::Shutterstock, ConnectorConfig, ImageProviderConnector, SearchQuery,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let connector = Shutterstock::new(&ConnectorConfig::from_env())?;
//!
//!     let query = SearchQuery::new("mountain lake").with_filter("orientation", "horizontal");
//!     let result = connector.search(&query).await;
//!
//!     for item in result.items() {
//!         println!("{}: {}", item.id, item.preview_url);
//!     }
//!     Ok(())
//! }
//! ```

mod connector;
mod error;
mod filter;
mod query;
mod result;

pub mod config;
pub mod labels;
pub mod providers;
pub mod transport;
pub mod transport_http;

pub use config::{ConnectorConfig, Credentials, Endpoints};
pub use connector::{ConnectorInfo, ImageProviderConnector};
pub use error::{ConnectorError, Result};
pub use filter::{FilterDefinition, FilterOption, FilterSet};
pub use labels::{EnglishLabels, LabelCatalog};
pub use query::{SearchQuery, COLLECTION_FIELD, QUERY_FIELD};
pub use result::{AssetMetadata, LicensedAsset, SearchResult, SearchResultItem};
pub use transport::{ApiRequest, ApiTransport, Auth, Method};
