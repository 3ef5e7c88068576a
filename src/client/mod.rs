//! # CocktailDB HTTP Client
//!
//! This module provides a thin HTTP layer plus a typed client for TheCocktailDB API.
//!
//! ## Modules
//!
//! - [`http`] - [`HttpClient`], a base-URL bound wrapper that returns raw responses
//! - [`fetch`] - Stateless GET/POST/PUT/PATCH/DELETE helpers for absolute URLs
//! - [`query`] - Ordered query parameters and query-string rendering
//! - [`options`] - Per-call options and pluggable body serialization
//! - [`error`] - [`FetchError`] for requests that never produced a response
//! - [`client`] - [`CocktailDbClient`], typed search/lookup/filter operations
//! - [`types`] - Type definitions for API responses
//!
//! ## Quick Start
//!
//! ```no_run
//! use cocktaildb_client::client::CocktailDbClient;
//! use cocktaildb_client::config::ApiConfig;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = CocktailDbClient::new(&ApiConfig::from_env());
//!
//! let drinks = client.search_by_name("margarita").await?;
//! println!("Found {} drinks", drinks.len());
//! # Ok(())
//! # }
//! ```

#[allow(clippy::module_inception)]
pub mod client;
pub mod error;
pub mod fetch;
pub mod http;
pub mod options;
pub mod query;
pub mod types;

pub use client::CocktailDbClient;
pub use error::FetchError;
pub use http::{HttpClient, HttpClientBuilder};
pub use options::{RequestOptions, Serializer};
pub use query::{create_query_string, Queries};
pub use types::*;
