//! HTTP transport using reqwest.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::{ConnectorConfig, Credentials};
use crate::transport::{ApiRequest, ApiTransport, Auth, Method};
use crate::{ConnectorError, Result};

/// A transport that sends requests to the provider over HTTPS.
///
/// Idle connections are not kept, so every call opens a fresh connection.
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    credentials: Credentials,
}

impl HttpTransport {
    /// Creates a transport from a connector configuration.
    pub fn new(config: &ConnectorConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .pool_max_idle_per_host(0)
            .build()?;
        Self::with_client(client, config)
    }

    /// Creates a transport with a custom reqwest client.
    pub fn with_client(client: Client, config: &ConnectorConfig) -> Result<Self> {
        Ok(Self {
            client,
            base_url: Url::parse(&config.endpoints.base_url)?,
            credentials: config.credentials.clone(),
        })
    }

    /// Resolves an endpoint path against the base URL.
    pub fn url_for(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint.trim_start_matches('/'))?)
    }

    fn authorize(&self, builder: RequestBuilder, auth: Auth) -> Result<RequestBuilder> {
        match auth {
            Auth::Basic => {
                if !self.credentials.has_basic() {
                    return Err(ConnectorError::MissingCredential("consumer key/secret"));
                }
                Ok(builder.basic_auth(
                    &self.credentials.consumer_key,
                    Some(&self.credentials.consumer_secret),
                ))
            }
            Auth::Bearer => {
                if !self.credentials.has_token() {
                    return Err(ConnectorError::MissingCredential("token"));
                }
                Ok(builder.bearer_auth(&self.credentials.token))
            }
        }
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Value> {
        let url = self.url_for(&request.endpoint)?;
        debug!("{:?} {}", request.method, url);

        let builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };
        let mut builder = self.authorize(builder, request.auth)?.query(&request.query);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ConnectorError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Endpoints;

    fn config(base_url: &str, credentials: Credentials) -> ConnectorConfig {
        ConnectorConfig::new(credentials).with_endpoints(Endpoints {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_http_transport_new() {
        let transport = HttpTransport::new(&ConnectorConfig::default()).unwrap();
        assert_eq!(
            transport.url_for("images/search").unwrap().as_str(),
            "https://api.shutterstock.com/v2/images/search"
        );
    }

    #[test]
    fn test_http_transport_url_for_strips_leading_slash() {
        let transport = HttpTransport::new(&ConnectorConfig::default()).unwrap();
        assert_eq!(
            transport.url_for("/user/subscriptions").unwrap().as_str(),
            "https://api.shutterstock.com/v2/user/subscriptions"
        );
    }

    #[test]
    fn test_http_transport_invalid_base_url() {
        let result = HttpTransport::new(&config("not a url", Credentials::default()));
        assert!(matches!(result, Err(ConnectorError::UrlParse(_))));
    }

    #[test]
    fn test_http_transport_with_client() {
        let client = Client::builder().user_agent("test-agent").build().unwrap();
        let transport =
            HttpTransport::with_client(client, &config("http://localhost:1/v2/", Credentials::default()))
                .unwrap();
        assert_eq!(
            transport.url_for("images").unwrap().as_str(),
            "http://localhost:1/v2/images"
        );
    }

    #[tokio::test]
    async fn test_http_transport_missing_basic_credentials() {
        let transport = HttpTransport::new(&config(
            "http://127.0.0.1:9/v2/",
            Credentials::new("", "", "token"),
        ))
        .unwrap();
        let err = transport
            .execute(ApiRequest::get("images/search", Auth::Basic))
            .await
            .unwrap_err();
        assert!(matches!(err, ConnectorError::MissingCredential(_)));
    }

    #[tokio::test]
    async fn test_http_transport_missing_token() {
        let transport = HttpTransport::new(&config(
            "http://127.0.0.1:9/v2/",
            Credentials::new("key", "secret", ""),
        ))
        .unwrap();
        let err = transport
            .execute(ApiRequest::get("user/subscriptions", Auth::Bearer))
            .await
            .unwrap_err();
        assert!(matches!(err, ConnectorError::MissingCredential("token")));
    }
}
