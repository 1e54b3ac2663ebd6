//! Transport abstraction for provider REST calls.

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;

/// HTTP method of a provider request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Authentication scheme for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// Consumer key and secret as HTTP basic auth.
    Basic,
    /// OAuth bearer token.
    Bearer,
}

/// A single request against the provider API.
///
/// `endpoint` is relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub endpoint: String,
    pub query: Vec<(String, String)>,
    pub auth: Auth,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Creates a GET request.
    pub fn get(endpoint: impl Into<String>, auth: Auth) -> Self {
        Self {
            method: Method::Get,
            endpoint: endpoint.into(),
            query: Vec::new(),
            auth,
            body: None,
        }
    }

    /// Creates a POST request with a JSON body.
    pub fn post(endpoint: impl Into<String>, auth: Auth, body: Value) -> Self {
        Self {
            method: Method::Post,
            endpoint: endpoint.into(),
            query: Vec::new(),
            auth,
            body: Some(body),
        }
    }

    /// Appends a query parameter. Repeated names are kept.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Returns the first value of a query parameter.
    pub fn param_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Trait for executing provider requests.
///
/// Implementations own credentials and the base URL; `execute` is a
/// request-in, JSON-out interface so connectors can be tested without a
/// network.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Executes a request and returns the decoded JSON body.
    async fn execute(&self, request: ApiRequest) -> Result<Value>;
}
