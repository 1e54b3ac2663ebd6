//! Response bodies of the Shutterstock v2 API.
//!
//! Every field is optional or defaulted; the API omits fields depending on
//! the requested view and account.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts ids sent either as strings or as numbers.
fn lenient_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// `images/search` and `images` (bulk) responses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ImageList {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub data: Vec<Image>,
}

/// Image record, minimal or full view.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Image {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assets: Option<ImageAssets>,
    #[serde(default)]
    pub contributor: Option<Contributor>,
}

impl Image {
    pub fn preview_url(&self) -> &str {
        self.assets
            .as_ref()
            .and_then(|a| a.preview.as_ref())
            .and_then(|p| p.url.as_deref())
            .unwrap_or_default()
    }

    pub fn huge_jpg(&self) -> Option<&Asset> {
        self.assets.as_ref().and_then(|a| a.huge_jpg.as_ref())
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ImageAssets {
    #[serde(default)]
    pub preview: Option<Asset>,
    #[serde(default)]
    pub huge_jpg: Option<Asset>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Asset {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Contributor {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
}

/// Generic `{ "data": [...] }` envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct DataList<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Entry of `user/subscriptions` and `images/collections/{id}/items`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct IdOnly {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
}

/// Entry of `images/categories`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Category {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Entry of `images/collections`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Collection {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub total_item_count: u64,
}

/// `images/licenses` response.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LicenseResponse {
    #[serde(default)]
    pub data: Vec<LicenseEntry>,
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LicenseEntry {
    #[serde(default)]
    pub download: Option<Download>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Download {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiMessage {
    #[serde(default)]
    pub message: String,
}

impl LicenseResponse {
    /// Non-empty download URL of the first entry.
    pub fn download_url(&self) -> Option<&str> {
        self.data
            .first()
            .and_then(|e| e.download.as_ref())
            .and_then(|d| d.url.as_deref())
            .filter(|url| !url.is_empty())
    }

    /// Every error message in the body, top-level first.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|e| e.message.clone())
            .chain(self.data.iter().filter_map(|e| e.error.clone()))
            .filter(|m| !m.is_empty())
            .collect()
    }
}
