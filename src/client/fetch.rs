//! Stateless request helpers.
//!
//! These functions take an absolute target URL and apply only the per-call
//! [`RequestOptions`]: no base URL, no default headers. They share a single
//! lazily built [`reqwest::Client`].
//!
//! ```no_run
//! use cocktaildb_client::client::{fetch, RequestOptions};
//!
//! # async fn example() -> Result<(), cocktaildb_client::client::FetchError> {
//! let response = fetch::get(
//!     "https://www.thecocktaildb.com/api/json/v1/1/random.php",
//!     &RequestOptions::default(),
//! )
//! .await?;
//! assert!(response.status().is_success());
//! # Ok(())
//! # }
//! ```

use std::sync::OnceLock;

use reqwest::{Client, Method, Request, Response};
use serde::Serialize;

use crate::client::error::FetchError;
use crate::client::options::{build_request, RequestOptions};

static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(Client::new)
}

pub async fn get(target: &str, options: &RequestOptions) -> Result<Response, FetchError> {
    send(prepare(Method::GET, target, None, options)?).await
}

pub async fn post<B>(target: &str, body: &B, options: &RequestOptions) -> Result<Response, FetchError>
where
    B: Serialize + ?Sized,
{
    let body = options.serializer.serialize(body)?;
    send(prepare(Method::POST, target, Some(body), options)?).await
}

pub async fn put<B>(target: &str, body: &B, options: &RequestOptions) -> Result<Response, FetchError>
where
    B: Serialize + ?Sized,
{
    let body = options.serializer.serialize(body)?;
    send(prepare(Method::PUT, target, Some(body), options)?).await
}

/// PATCH with a serialized body, same contract as [`post`] and [`put`].
pub async fn patch<B>(target: &str, body: &B, options: &RequestOptions) -> Result<Response, FetchError>
where
    B: Serialize + ?Sized,
{
    let body = options.serializer.serialize(body)?;
    send(prepare(Method::PATCH, target, Some(body), options)?).await
}

pub async fn delete(target: &str, options: &RequestOptions) -> Result<Response, FetchError> {
    send(prepare(Method::DELETE, target, None, options)?).await
}

/// Builds the request one of the helpers would send.
pub fn prepare(
    method: Method,
    target: &str,
    body: Option<String>,
    options: &RequestOptions,
) -> Result<Request, FetchError> {
    build_request(
        shared_client(),
        method,
        target,
        &options.headers,
        body,
        options.timeout,
    )
}

async fn send(request: Request) -> Result<Response, FetchError> {
    tracing::debug!("{} {}", request.method(), request.url());
    Ok(shared_client().execute(request).await?)
}
