//! Error types for the connector library.

use thiserror::Error;

/// Result type alias for connector operations.
pub type Result<T> = std::result::Result<T, ConnectorError>;

/// Errors that can occur while talking to an image provider.
#[derive(Error, Debug)]
pub enum ConnectorError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status code.
    #[error("Provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Failed to decode a response body.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration could not be read or parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A credential required by the request is not configured.
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    /// Generic error.
    #[error("{0}")]
    Other(String),
}
