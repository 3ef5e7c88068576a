//! Base-URL bound HTTP client.

use indexmap::IndexMap;
use reqwest::{Client, Method, Request, Response};
use serde::Serialize;

use crate::client::error::FetchError;
use crate::client::options::{build_request, set_header, RequestOptions};
use crate::client::query::{create_query_string, Queries};

/// Header sent with every instance request unless overridden.
pub const DEFAULT_CONTENT_TYPE: (&str, &str) = ("Content-Type", "application/json");

/// # HTTP Client
///
/// Thin wrapper around [`reqwest::Client`] that prefixes every endpoint with a
/// base URL, appends a query string and sends a fixed set of default headers.
///
/// Responses are returned exactly as reqwest delivers them. A 404 or 500 is an
/// `Ok(Response)`; the caller checks the status and decodes the body. Only
/// failures that prevent a response (bad URL, unreachable host, invalid header)
/// are returned as [`FetchError`].
///
/// The client is immutable after construction and cheap to clone, so it can be
/// shared between concurrent tasks.
///
/// ```no_run
/// use cocktaildb_client::client::{HttpClient, Queries, RequestOptions};
///
/// # async fn example() -> Result<(), cocktaildb_client::client::FetchError> {
/// let client = HttpClient::new("https://www.thecocktaildb.com/api/json/v1/1");
/// let response = client
///     .get("/search.php", &Queries::new().with("s", "margarita"), &RequestOptions::default())
///     .await?;
/// println!("status: {}", response.status());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    headers: IndexMap<String, String>,
    client: Client,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl HttpClient {
    /// Creates a client with the default headers.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::builder().base_url(base_url).build()
    }

    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers sent with every request, defaults included.
    pub fn headers(&self) -> &IndexMap<String, String> {
        &self.headers
    }

    /// Issues a GET to `base_url + endpoint + query string`.
    pub async fn get(
        &self,
        endpoint: &str,
        queries: &Queries,
        options: &RequestOptions,
    ) -> Result<Response, FetchError> {
        let request = self.prepare(Method::GET, endpoint, queries, None, options)?;
        self.execute(request).await
    }

    /// Issues a POST carrying the serialized `body`.
    pub async fn post<B>(
        &self,
        endpoint: &str,
        body: &B,
        options: &RequestOptions,
        queries: &Queries,
    ) -> Result<Response, FetchError>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(Method::POST, endpoint, body, options, queries)
            .await
    }

    /// Issues a PUT carrying the serialized `body`.
    pub async fn put<B>(
        &self,
        endpoint: &str,
        body: &B,
        options: &RequestOptions,
        queries: &Queries,
    ) -> Result<Response, FetchError>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(Method::PUT, endpoint, body, options, queries)
            .await
    }

    /// Issues a PATCH carrying the serialized `body`.
    pub async fn patch<B>(
        &self,
        endpoint: &str,
        body: &B,
        options: &RequestOptions,
        queries: &Queries,
    ) -> Result<Response, FetchError>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(Method::PATCH, endpoint, body, options, queries)
            .await
    }

    /// Issues a DELETE without a body.
    pub async fn delete(
        &self,
        endpoint: &str,
        options: &RequestOptions,
        queries: &Queries,
    ) -> Result<Response, FetchError> {
        let request = self.prepare(Method::DELETE, endpoint, queries, None, options)?;
        self.execute(request).await
    }

    /// Full URL for `endpoint` with `queries` appended.
    pub fn url_for(&self, endpoint: &str, queries: &Queries) -> String {
        format!("{}{}{}", self.base_url, endpoint, create_query_string(queries))
    }

    /// Instance headers with the call-site overrides applied on top.
    ///
    /// Names match case-insensitively, so `content-type` replaces
    /// `Content-Type` in place instead of adding a second entry.
    pub fn merged_headers(&self, options: &RequestOptions) -> IndexMap<String, String> {
        let mut headers = self.headers.clone();
        for (name, value) in &options.headers {
            set_header(&mut headers, name.clone(), value.clone());
        }
        headers
    }

    /// Builds the request an instance call would send, without sending it.
    pub fn prepare(
        &self,
        method: Method,
        endpoint: &str,
        queries: &Queries,
        body: Option<String>,
        options: &RequestOptions,
    ) -> Result<Request, FetchError> {
        let url = self.url_for(endpoint, queries);
        let headers = self.merged_headers(options);
        build_request(&self.client, method, &url, &headers, body, options.timeout)
    }

    async fn send_with_body<B>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
        options: &RequestOptions,
        queries: &Queries,
    ) -> Result<Response, FetchError>
    where
        B: Serialize + ?Sized,
    {
        let body = options.serializer.serialize(body)?;
        let request = self.prepare(method, endpoint, queries, Some(body), options)?;
        self.execute(request).await
    }

    async fn execute(&self, request: Request) -> Result<Response, FetchError> {
        tracing::debug!("{} {}", request.method(), request.url());
        Ok(self.client.execute(request).await?)
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    base_url: String,
    headers: IndexMap<String, String>,
    client: Option<Client>,
}

impl HttpClientBuilder {
    /// Prefix for every endpoint. Defaults to the empty string.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Adds a header, replacing a default with the same name in any case.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        set_header(&mut self.headers, name.into(), value.into());
        self
    }

    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in headers {
            set_header(&mut self.headers, name.into(), value.into());
        }
        self
    }

    /// Uses an existing reqwest client instead of a fresh one.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> HttpClient {
        let (name, value) = DEFAULT_CONTENT_TYPE;
        let mut headers = IndexMap::with_capacity(self.headers.len() + 1);
        headers.insert(name.to_string(), value.to_string());
        for (name, value) in self.headers {
            set_header(&mut headers, name, value);
        }

        HttpClient {
            base_url: self.base_url,
            headers,
            client: self.client.unwrap_or_default(),
        }
    }
}
