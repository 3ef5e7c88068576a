use anyhow::Result;
use serde::de::DeserializeOwned;

use crate::client::{
    http::HttpClient,
    options::RequestOptions,
    query::Queries,
    types::*,
};
use crate::config::ApiConfig;

/// Typed client for TheCocktailDB JSON API.
#[derive(Debug, Clone)]
pub struct CocktailDbClient {
    http: HttpClient,
    site_url: String,
}

impl Default for CocktailDbClient {
    fn default() -> Self {
        Self::new(&ApiConfig::default())
    }
}

impl CocktailDbClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: HttpClient::new(config.api_base_url.clone()),
            site_url: config.site_url.clone(),
        }
    }

    /// Wraps an existing [`HttpClient`]; its base URL must point at the API root.
    pub fn with_http_client(http: HttpClient, site_url: impl Into<String>) -> Self {
        Self {
            http,
            site_url: site_url.into(),
        }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Link to the drink's page on the public website.
    pub fn drink_page_url(&self, id: &str, name: &str) -> String {
        let slug = name.split_whitespace().collect::<Vec<_>>().join("-");
        format!("{}/drink/{}-{}", self.site_url, id, urlencoding::encode(&slug))
    }

    // Search operations
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Drink>> {
        let response: DrinksResponse<Drink> = self
            .get_json("/search.php", Queries::new().with("s", name), "search drinks")
            .await?;
        Ok(response.drinks)
    }

    pub async fn search_by_first_letter(&self, letter: char) -> Result<Vec<Drink>> {
        if !letter.is_ascii_alphanumeric() {
            anyhow::bail!("First letter must be a letter or digit, got '{}'", letter);
        }

        let response: DrinksResponse<Drink> = self
            .get_json(
                "/search.php",
                Queries::new().with("f", letter.to_ascii_lowercase()),
                "list drinks by first letter",
            )
            .await?;
        Ok(response.drinks)
    }

    pub async fn search_ingredient(&self, name: &str) -> Result<Vec<Ingredient>> {
        let response: IngredientsResponse = self
            .get_json("/search.php", Queries::new().with("i", name), "search ingredients")
            .await?;
        Ok(response.ingredients)
    }

    // Lookup operations
    pub async fn lookup_drink(&self, id: &str) -> Result<Option<Drink>> {
        let response: DrinksResponse<Drink> = self
            .get_json("/lookup.php", Queries::new().with("i", id), "look up drink")
            .await?;
        Ok(response.drinks.into_iter().next())
    }

    pub async fn random_drink(&self) -> Result<Option<Drink>> {
        let response: DrinksResponse<Drink> = self
            .get_json("/random.php", Queries::new(), "get random drink")
            .await?;
        Ok(response.drinks.into_iter().next())
    }

    // Filter operations
    pub async fn filter(&self, kind: FilterKind, value: &str) -> Result<Vec<DrinkSummary>> {
        let response: DrinksResponse<DrinkSummary> = self
            .get_json(
                "/filter.php",
                Queries::new().with(kind.query_key(), value),
                "filter drinks",
            )
            .await?;
        Ok(response.drinks)
    }

    pub async fn filter_by_ingredient(&self, ingredient: &str) -> Result<Vec<DrinkSummary>> {
        self.filter(FilterKind::Ingredient, ingredient).await
    }

    pub async fn filter_by_category(&self, category: &str) -> Result<Vec<DrinkSummary>> {
        self.filter(FilterKind::Category, category).await
    }

    pub async fn filter_by_alcoholic(&self, alcoholic: &str) -> Result<Vec<DrinkSummary>> {
        self.filter(FilterKind::Alcoholic, alcoholic).await
    }

    pub async fn filter_by_glass(&self, glass: &str) -> Result<Vec<DrinkSummary>> {
        self.filter(FilterKind::Glass, glass).await
    }

    // Metadata
    pub async fn list(&self, kind: ListKind) -> Result<Vec<String>> {
        let response: DrinksResponse<serde_json::Map<String, serde_json::Value>> = self
            .get_json(
                "/list.php",
                Queries::new().with(kind.query_key(), "list"),
                "list metadata",
            )
            .await?;

        let values = response
            .drinks
            .into_iter()
            .filter_map(|entry| {
                entry
                    .get(kind.field())
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_string)
            })
            .collect();
        Ok(values)
    }

    async fn get_json<T>(&self, endpoint: &str, queries: Queries, action: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let url = self.http.url_for(endpoint, &queries);
        tracing::debug!("Making request to {}: {}", action, url);

        let response = self
            .http
            .get(endpoint, &queries, &RequestOptions::default())
            .await
            .map_err(|e| {
                tracing::error!("Network error trying to {}: {}", action, e);
                anyhow::anyhow!("Failed to connect to TheCocktailDB API: {}", e)
            })?;

        let status = response.status();
        tracing::debug!("Response status for {}: {}", action, status);

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            tracing::error!("Failed to {} with status {}: {}", action, status, error_body);

            match status.as_u16() {
                404 => anyhow::bail!("Endpoint not found: {}. Check the API base URL.", url),
                429 => anyhow::bail!("Rate limited by TheCocktailDB while trying to {}", action),
                500..=599 => anyhow::bail!("TheCocktailDB server error ({}): {}", status, error_body),
                _ => anyhow::bail!("Failed to {} with status {}: {}", action, status, error_body),
            }
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            tracing::debug!("Empty response body for {}, treating as no results", action);
            return Ok(T::default());
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse response for {}: {}", action, e);
            anyhow::anyhow!("Invalid response format from TheCocktailDB: {}", e)
        })
    }
}
