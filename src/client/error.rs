//! Error type for the raw HTTP layer.
//!
//! [`HttpClient`](crate::client::HttpClient) and the [`fetch`](crate::client::fetch)
//! helpers never inspect status codes. An HTTP 404 or 500 is a successful call that
//! yields a [`reqwest::Response`]; only failures that prevent a response from being
//! produced at all end up here.

use thiserror::Error;

/// Boxed error returned by custom body serializers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures raised while building or sending a request.
#[derive(Debug, Error)]
pub enum FetchError {
    /// A header name could not be used on the wire
    #[error("Invalid header name: {0}")]
    InvalidHeaderName(String),
    /// A header value contained bytes HTTP does not allow
    #[error("Invalid value for header {name}")]
    InvalidHeaderValue {
        /// Name of the offending header
        name: String,
    },
    /// The body serializer rejected the request body
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] BoxError),
    /// Error produced by reqwest, passed through untouched
    ///
    /// Covers malformed URLs as well as network-level failures such as an
    /// unreachable host.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Serialize(Box::new(err))
    }
}
