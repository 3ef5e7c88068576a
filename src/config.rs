//! Endpoint configuration for TheCocktailDB.
//!
//! Values are resolved once at startup and passed to the clients explicitly.

use std::env;

/// JSON API root used when `COCKTAILDB_API_BASE_URL` is unset.
pub const DEFAULT_API_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";
/// Public website root used when `COCKTAILDB_BASE_URL` is unset.
pub const DEFAULT_SITE_URL: &str = "https://www.thecocktaildb.com";

pub const API_BASE_URL_ENV: &str = "COCKTAILDB_API_BASE_URL";
pub const SITE_URL_ENV: &str = "COCKTAILDB_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix for every API endpoint, e.g. `/search.php`
    pub api_base_url: String,
    /// Prefix for links to drink pages on the website
    pub site_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(api_base_url: impl Into<String>, site_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            site_url: site_url.into(),
        }
    }

    /// Reads both URLs from the environment. Unset or empty variables fall
    /// back to the public endpoints.
    pub fn from_env() -> Self {
        Self {
            api_base_url: env_or(API_BASE_URL_ENV, DEFAULT_API_BASE_URL),
            site_url: env_or(SITE_URL_ENV, DEFAULT_SITE_URL),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
