//! Shutterstock connector implementation.

mod filters;
mod wire;

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, warn};
use url::Url;

use crate::config::{ConnectorConfig, Endpoints};
use crate::connector::{ConnectorInfo, ImageProviderConnector};
use crate::labels::{EnglishLabels, LabelCatalog};
use crate::query::COLLECTION_FIELD;
use crate::transport::{ApiRequest, ApiTransport, Auth};
use crate::transport_http::HttpTransport;
use crate::{
    AssetMetadata, FilterDefinition, FilterOption, FilterSet, LicensedAsset, Result, SearchQuery,
    SearchResult, SearchResultItem,
};

pub use filters::{collection_disabled_filters, FILTER_NAMES};

use filters::{static_filter, CATEGORY_FILTER};
use wire::{Category, Collection, DataList, IdOnly, Image, ImageList, LicenseResponse};

/// Number of images per keyword search page.
pub const PAGE_SIZE: u32 = 20;

/// Upper bound on images fetched when browsing a collection.
const COLLECTION_FETCH_LIMIT: u32 = 500;

/// Search parameters the connector always sets itself.
const FIXED_SEARCH_PARAMS: [&str; 3] = ["sort", "per_page", "page"];

/// Icon identifier of the host's add button.
const ADD_BUTTON_ICON: &str = "actions-image-shutterstock";

/// Shutterstock image connector.
pub struct Shutterstock {
    info: ConnectorInfo,
    endpoints: Endpoints,
    transport: Arc<dyn ApiTransport>,
    labels: Arc<dyn LabelCatalog>,
}

impl Shutterstock {
    /// Creates a connector talking to the API over HTTPS.
    pub fn new(config: &ConnectorConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(config.endpoints.clone(), transport))
    }

    /// Creates a connector with a custom transport.
    pub fn with_transport<T: ApiTransport + 'static>(endpoints: Endpoints, transport: T) -> Self {
        Self {
            info: ConnectorInfo {
                name: "Shutterstock".to_string(),
                shortcut: "shutterstock".to_string(),
                page_size: PAGE_SIZE,
            },
            endpoints,
            transport: Arc::new(transport),
            labels: Arc::new(EnglishLabels),
        }
    }

    /// Sets the label catalog used for filter and button labels.
    pub fn with_labels<L: LabelCatalog + 'static>(mut self, labels: L) -> Self {
        self.labels = Arc::new(labels);
        self
    }

    async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let value = self.transport.execute(request).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Maps a raw image list into a host result.
    ///
    /// The page falls back to `requested_page` and the total count to the
    /// number of items when the response omits them.
    pub(crate) fn format_results(list: ImageList, requested_page: u32) -> SearchResult {
        let mut result = SearchResult::new(list.page.unwrap_or(requested_page));
        result.total_count = list.total_count.unwrap_or(list.data.len() as u64);
        for image in &list.data {
            result.add_item(SearchResultItem::new(image.id.clone(), image.preview_url()));
        }
        result
    }

    /// Runs a keyword search against `images/search`.
    async fn search_keyword(&self, query: &SearchQuery) -> Result<SearchResult> {
        let mut request = ApiRequest::get(&self.endpoints.search, Auth::Basic);
        for (name, value) in &query.filters {
            if name != COLLECTION_FIELD && !FIXED_SEARCH_PARAMS.contains(&name.as_str()) {
                request = request.param(name, value);
            }
        }
        let request = request
            .param("sort", "relevance")
            .param("per_page", PAGE_SIZE.to_string())
            .param("page", query.page.to_string());

        let list: ImageList = self.fetch(request).await?;
        let mut result = Self::format_results(list, query.page);
        result.truncate(PAGE_SIZE as usize);
        debug!(
            "Keyword search returned {} of {} images",
            result.items().len(),
            result.total_count
        );
        Ok(result)
    }

    /// Lists every image of a collection with full details.
    async fn search_collection(&self, collection_id: &str) -> Result<SearchResult> {
        let request = ApiRequest::get(self.endpoints.collection_items(collection_id), Auth::Bearer)
            .param("per_page", COLLECTION_FETCH_LIMIT.to_string());
        let members: DataList<IdOnly> = self.fetch(request).await?;

        let ids: Vec<String> = members
            .data
            .into_iter()
            .map(|m| m.id)
            .filter(|id| !id.is_empty())
            .collect();
        debug!("Collection {} has {} images", collection_id, ids.len());

        if ids.is_empty() {
            return Ok(SearchResult::new(1));
        }

        let request = ids
            .iter()
            .fold(ApiRequest::get(&self.endpoints.images, Auth::Bearer), |r, id| {
                r.param("id", id)
            })
            .param("view", "minimal");
        let mut list: ImageList = self.fetch(request).await?;
        list.page = Some(1);
        list.total_count = None;
        Ok(Self::format_results(list, 1))
    }

    /// Returns the id of the account's first subscription.
    ///
    /// Failures are logged and reported as `None`.
    pub async fn resolve_subscription(&self) -> Option<String> {
        let request = ApiRequest::get(&self.endpoints.subscriptions, Auth::Bearer);
        match self.fetch::<DataList<IdOnly>>(request).await {
            Ok(list) => {
                let id = list.data.into_iter().map(|s| s.id).find(|id| !id.is_empty());
                if id.is_none() {
                    warn!("No subscription found, HD download not possible");
                }
                id
            }
            Err(e) => {
                warn!("Subscription lookup failed, HD download not possible: {}", e);
                None
            }
        }
    }

    /// Licenses an image under a subscription.
    async fn license(&self, subscription_id: &str, image_id: &str) -> Result<LicenseResponse> {
        let body = json!({ "images": [{ "image_id": image_id }] });
        let request = ApiRequest::post(&self.endpoints.licenses, Auth::Bearer, body)
            .param("subscription_id", subscription_id);
        self.fetch(request).await
    }

    /// Fetches title, description and pixel size of an image.
    async fn fetch_metadata(&self, image_id: &str) -> Result<AssetMetadata> {
        let request = ApiRequest::get(self.endpoints.image(image_id), Auth::Bearer)
            .param("view", "full");
        let image: Image = self.fetch(request).await?;
        Ok(metadata_from_image(&image))
    }

    async fn category_options(&self) -> Result<Vec<FilterOption>> {
        let request = ApiRequest::get(&self.endpoints.categories, Auth::Basic);
        let list: DataList<Category> = self.fetch(request).await?;
        Ok(list
            .data
            .into_iter()
            .map(|c| FilterOption::new(c.name, c.id))
            .collect())
    }

    async fn collection_options(&self) -> Result<Vec<FilterOption>> {
        let request = ApiRequest::get(&self.endpoints.collections, Auth::Bearer);
        let list: DataList<Collection> = self.fetch(request).await?;
        Ok(list
            .data
            .into_iter()
            .map(|c| FilterOption::new(format!("{} ({})", c.name, c.total_item_count), c.id))
            .collect())
    }

    fn dynamic_filter(&self, name: &str, options: Result<Vec<FilterOption>>) -> FilterDefinition {
        let options = options.unwrap_or_else(|e| {
            warn!("Could not load options for filter '{}': {}", name, e);
            Vec::new()
        });
        FilterDefinition::new(name, self.labels.label(&format!("filter.{name}")))
            .with_options(options)
    }
}

fn metadata_from_image(image: &Image) -> AssetMetadata {
    let huge = image.huge_jpg();
    AssetMetadata {
        title: image.description.clone().unwrap_or_default(),
        description: image
            .contributor
            .as_ref()
            .filter(|c| !c.id.is_empty())
            .map(|c| format!("Shutterstock #{}", c.id))
            .unwrap_or_default(),
        width: huge.and_then(|a| a.width).unwrap_or(0),
        height: huge.and_then(|a| a.height).unwrap_or(0),
    }
}

/// Returns the file extension of a URL's path, or an empty string.
pub fn extension_from_url(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.path_segments()?.next_back().map(str::to_string))
        .and_then(|segment| {
            Path::new(&segment)
                .extension()
                .and_then(|e| e.to_str())
                .map(str::to_string)
        })
        .unwrap_or_default()
}

#[async_trait]
impl ImageProviderConnector for Shutterstock {
    fn info(&self) -> &ConnectorInfo {
        &self.info
    }

    async fn search(&self, query: &SearchQuery) -> SearchResult {
        let query = query.normalized();

        let outcome = match query.collection() {
            None => self.search_keyword(&query).await,
            Some(collection_id) => {
                let disabled = collection_disabled_filters();
                if query.page != 1 {
                    debug!("Collection browsing has no page {}, skipping fetch", query.page);
                    return SearchResult::new(query.page).with_disabled_filters(disabled);
                }
                self.search_collection(collection_id)
                    .await
                    .map(|result| result.with_disabled_filters(disabled))
            }
        };

        outcome.unwrap_or_else(|e| {
            warn!("Search failed: {}", e);
            let mut result = SearchResult::new(query.page);
            if query.collection().is_some() {
                result = result.with_disabled_filters(collection_disabled_filters());
            }
            result.fail(e.to_string());
            result
        })
    }

    async fn get_file_url_and_extension(&self, image_id: &str) -> LicensedAsset {
        let mut asset = LicensedAsset::new(image_id);

        match self.resolve_subscription().await {
            Some(subscription_id) => match self.license(&subscription_id, image_id).await {
                Ok(response) => {
                    asset.url = response.download_url().map(str::to_string);
                    asset.errors = response.error_messages();
                }
                Err(e) => {
                    warn!("Licensing image {} failed: {}", image_id, e);
                    asset.errors.push(e.to_string());
                }
            },
            None => debug!("Skipping license request for image {}", image_id),
        }

        asset.extension = asset
            .url
            .as_deref()
            .map(extension_from_url)
            .unwrap_or_default();

        asset.metadata = self.fetch_metadata(image_id).await.unwrap_or_else(|e| {
            warn!("Could not load details of image {}: {}", image_id, e);
            AssetMetadata::default()
        });

        asset
    }

    async fn get_available_filters(&self) -> FilterSet {
        let mut set = FilterSet::new();
        for name in FILTER_NAMES {
            let filter = match name {
                CATEGORY_FILTER => self.dynamic_filter(name, self.category_options().await),
                COLLECTION_FIELD => self.dynamic_filter(name, self.collection_options().await),
                _ => static_filter(name, self.labels.as_ref()),
            };
            set.insert(filter);
        }
        set
    }

    fn add_button_label(&self) -> String {
        self.labels.label("button.add")
    }

    fn add_button_icon(&self) -> String {
        ADD_BUTTON_ICON.to_string()
    }

    fn add_button_attributes(&self) -> Vec<(String, String)> {
        vec![
            ("data-connector".to_string(), self.info.shortcut.clone()),
            ("title".to_string(), self.add_button_label()),
        ]
    }
}
