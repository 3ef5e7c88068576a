//! # CocktailDB Client Library
//!
//! HTTP client for TheCocktailDB public API, plus an MCP server exposing it as tools.
//!
//! ## Client Module
//!
//! The [`client`] module provides [`HttpClient`], a minimal wrapper that joins a base
//! URL, an endpoint and a query string, attaches default headers and hands back the
//! raw [`reqwest::Response`]. [`CocktailDbClient`] builds typed search and lookup
//! operations on top of it.
//!
//! ## Server Module
//!
//! The [`server`] module implements an MCP server that exposes cocktail lookups
//! as standardized tools that AI assistants can use.
//!
//! ## Quick Start
//!
//! ```no_run
//! use cocktaildb_client::{config::ApiConfig, CocktailDbClient, CocktailMcpServer, HttpClient};
//!
//! let config = ApiConfig::from_env();
//!
//! // Raw HTTP access
//! let http = HttpClient::new(config.api_base_url.clone());
//!
//! // Typed API access
//! let client = CocktailDbClient::new(&config);
//!
//! // Or create an MCP server
//! let server = CocktailMcpServer::new(&config);
//! ```

pub mod client;
pub mod config;
pub mod server;

pub use client::{CocktailDbClient, HttpClient};
pub use server::CocktailMcpServer;
