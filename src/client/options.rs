//! Per-call request options and body serialization.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use indexmap::IndexMap;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Request};
use serde::Serialize;

use crate::client::error::{BoxError, FetchError};

type SerializeFn =
    dyn Fn(&dyn erased_serde::Serialize) -> Result<String, BoxError> + Send + Sync;

/// Converts a request body into the text sent on the wire.
///
/// The closure receives the caller's body unchanged, as a type-erased
/// [`serde::Serialize`] value, so any serde data format can be plugged in.
/// [`Serializer::default`] produces compact JSON.
#[derive(Clone)]
pub struct Serializer(Arc<SerializeFn>);

impl Serializer {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&dyn erased_serde::Serialize) -> Result<String, BoxError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Compact JSON text, e.g. `{"n":1}`.
    pub fn json() -> Self {
        Self::new(|body| serde_json::to_string(body).map_err(Into::into))
    }

    pub fn serialize<B>(&self, body: &B) -> Result<String, FetchError>
    where
        B: Serialize + ?Sized,
    {
        let erased: &dyn erased_serde::Serialize = &body;
        (self.0)(erased).map_err(FetchError::Serialize)
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::json()
    }
}

impl fmt::Debug for Serializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Serializer")
    }
}

/// Options applied to a single request.
///
/// Defaults: no extra headers, no timeout, JSON body serialization.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Header overrides; these win over the client's headers on conflict
    pub headers: IndexMap<String, String>,
    /// Passed to reqwest as-is. `None` means the request may wait indefinitely.
    pub timeout: Option<Duration>,
    /// Body serializer for POST, PUT and PATCH
    pub serializer: Serializer,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        set_header(&mut self.headers, name.into(), value.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn serializer(mut self, serializer: Serializer) -> Self {
        self.serializer = serializer;
        self
    }
}

/// Sets a header, replacing any entry whose name matches case-insensitively.
///
/// The replaced entry keeps its position and takes the new spelling.
pub(crate) fn set_header(headers: &mut IndexMap<String, String>, name: String, value: String) {
    match headers.keys().position(|key| key.eq_ignore_ascii_case(&name)) {
        Some(index) => {
            headers.shift_remove_index(index);
            headers.shift_insert(index, name, value);
        }
        None => {
            headers.insert(name, value);
        }
    }
}

/// Converts an ordered header mapping into a [`HeaderMap`].
///
/// Later entries replace earlier ones; header names compare case-insensitively
/// on the wire.
pub(crate) fn to_header_map(headers: &IndexMap<String, String>) -> Result<HeaderMap, FetchError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| FetchError::InvalidHeaderName(name.clone()))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|_| FetchError::InvalidHeaderValue { name: name.clone() })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

/// Assembles a request without sending it.
pub(crate) fn build_request(
    client: &Client,
    method: Method,
    url: &str,
    headers: &IndexMap<String, String>,
    body: Option<String>,
    timeout: Option<Duration>,
) -> Result<Request, FetchError> {
    let mut builder = client.request(method, url).headers(to_header_map(headers)?);
    if let Some(body) = body {
        builder = builder.body(body);
    }
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}
