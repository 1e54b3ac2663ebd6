//! Connector configuration: credentials and the provider endpoint table.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConnectorError, Result};

/// Environment variable holding the consumer key.
pub const ENV_CONSUMER_KEY: &str = "SHUTTERSTOCK_CONSUMER_KEY";
/// Environment variable holding the consumer secret.
pub const ENV_CONSUMER_SECRET: &str = "SHUTTERSTOCK_CONSUMER_SECRET";
/// Environment variable holding the bearer token.
pub const ENV_TOKEN: &str = "SHUTTERSTOCK_TOKEN";

/// API credentials supplied by the host configuration store.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Consumer key, used for basic auth.
    pub consumer_key: String,
    /// Consumer secret, used for basic auth.
    pub consumer_secret: String,
    /// OAuth bearer token for account-scoped endpoints.
    pub token: String,
}

impl Credentials {
    /// Creates credentials from explicit values.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token: token.into(),
        }
    }

    /// Reads credentials from the environment. Missing variables stay empty.
    pub fn from_env() -> Self {
        Self {
            consumer_key: std::env::var(ENV_CONSUMER_KEY).unwrap_or_default(),
            consumer_secret: std::env::var(ENV_CONSUMER_SECRET).unwrap_or_default(),
            token: std::env::var(ENV_TOKEN).unwrap_or_default(),
        }
    }

    /// Replaces every field for which `other` carries a non-empty value.
    pub fn overlay(&mut self, other: Credentials) {
        if !other.consumer_key.is_empty() {
            self.consumer_key = other.consumer_key;
        }
        if !other.consumer_secret.is_empty() {
            self.consumer_secret = other.consumer_secret;
        }
        if !other.token.is_empty() {
            self.token = other.token;
        }
    }

    /// Returns whether key and secret are both present.
    pub fn has_basic(&self) -> bool {
        !self.consumer_key.is_empty() && !self.consumer_secret.is_empty()
    }

    /// Returns whether a bearer token is present.
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &redact(&self.consumer_secret))
            .field("token", &redact(&self.token))
            .finish()
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        ""
    } else {
        "***"
    }
}

/// Provider base URL plus every path suffix the connector calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// Base URL; must end with a slash so suffixes join beneath it.
    pub base_url: String,
    pub search: String,
    pub subscriptions: String,
    pub licenses: String,
    pub categories: String,
    pub collections: String,
    pub images: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            base_url: "https://api.shutterstock.com/v2/".to_string(),
            search: "images/search".to_string(),
            subscriptions: "user/subscriptions".to_string(),
            licenses: "images/licenses".to_string(),
            categories: "images/categories".to_string(),
            collections: "images/collections".to_string(),
            images: "images".to_string(),
        }
    }
}

impl Endpoints {
    /// Path listing the members of one collection.
    pub fn collection_items(&self, collection_id: &str) -> String {
        format!(
            "{}/{}/items",
            self.collections,
            urlencoding::encode(collection_id)
        )
    }

    /// Path of a single image detail record.
    pub fn image(&self, image_id: &str) -> String {
        format!("{}/{}", self.images, urlencoding::encode(image_id))
    }
}

/// Complete connector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorConfig {
    #[serde(default)]
    pub credentials: Credentials,
    #[serde(default)]
    pub endpoints: Endpoints,
    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    concat!("stock-connector/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            endpoints: Endpoints::default(),
            user_agent: default_user_agent(),
        }
    }
}

impl ConnectorConfig {
    /// Creates a configuration with the given credentials and default endpoints.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            ..Default::default()
        }
    }

    /// Parses a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConnectorError::Config(e.to_string()))
    }

    /// Reads a TOML file, then overlays credentials found in the environment.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConnectorError::Config(format!("{}: {}", path.as_ref().display(), e))
        })?;
        let mut config = Self::from_toml_str(&content)?;
        config.credentials.overlay(Credentials::from_env());
        Ok(config)
    }

    /// Builds a configuration purely from the environment.
    pub fn from_env() -> Self {
        Self::new(Credentials::from_env())
    }

    /// Sets the endpoint table.
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }
}
