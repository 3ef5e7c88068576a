use std::sync::Arc;
use std::future::Future;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::*,
    schemars,
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use serde_json::json;

use crate::client::{CocktailDbClient, Drink, FilterKind, ListKind};
use crate::config::ApiConfig;

// Parameter structs for tools
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SearchCocktailsParams {
    /// Full or partial cocktail name
    #[serde(default)]
    pub query: Option<String>,
    /// Single letter or digit; lists every cocktail starting with it
    #[serde(default)]
    pub first_letter: Option<String>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetCocktailParams {
    pub id: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct FilterCocktailsParams {
    pub value: String,
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "ingredient".to_string()
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SearchIngredientParams {
    pub name: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ListMetadataParams {
    #[serde(default = "default_list_kind")]
    pub kind: String,
}

fn default_list_kind() -> String {
    "categories".to_string()
}

fn parse_filter(filter: &str) -> Option<FilterKind> {
    match filter.to_ascii_lowercase().as_str() {
        "ingredient" | "i" => Some(FilterKind::Ingredient),
        "category" | "c" => Some(FilterKind::Category),
        "alcoholic" | "a" => Some(FilterKind::Alcoholic),
        "glass" | "g" => Some(FilterKind::Glass),
        _ => None,
    }
}

fn parse_list_kind(kind: &str) -> Option<ListKind> {
    match kind.to_ascii_lowercase().as_str() {
        "categories" | "category" | "c" => Some(ListKind::Categories),
        "glasses" | "glass" | "g" => Some(ListKind::Glasses),
        "ingredients" | "ingredient" | "i" => Some(ListKind::Ingredients),
        "alcoholic" | "a" => Some(ListKind::Alcoholic),
        _ => None,
    }
}

fn pretty(value: &serde_json::Value) -> Result<String, McpError> {
    serde_json::to_string_pretty(value).map_err(|e| McpError::internal_error(e.to_string(), None))
}

fn success(value: serde_json::Value) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(pretty(&value)?)]))
}

fn failure(error: &str, details: impl std::fmt::Display) -> Result<CallToolResult, McpError> {
    let error = json!({
        "error": error,
        "details": details.to_string()
    });
    Ok(CallToolResult::error(vec![Content::text(error.to_string())]))
}

#[derive(Clone)]
pub struct CocktailMcpServer {
    client: Arc<CocktailDbClient>,
    tool_router: ToolRouter<CocktailMcpServer>,
}

#[tool_router]
impl CocktailMcpServer {
    pub fn new(config: &ApiConfig) -> Self {
        Self::from_client(CocktailDbClient::new(config))
    }

    pub fn from_client(client: CocktailDbClient) -> Self {
        Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        }
    }

    pub async fn test_api_access(&self) -> Result<(), anyhow::Error> {
        tracing::debug!("Testing API access by listing categories...");
        match self.client.list(ListKind::Categories).await {
            Ok(categories) => {
                tracing::info!("API access test successful - found {} categories", categories.len());
                Ok(())
            }
            Err(e) => {
                tracing::error!("API access test failed: {}", e);
                Err(e)
            }
        }
    }

    fn drink_json(&self, drink: &Drink) -> serde_json::Value {
        json!({
            "id": drink.id,
            "name": drink.name,
            "category": drink.category,
            "alcoholic": drink.alcoholic,
            "glass": drink.glass,
            "tags": drink.tags(),
            "ingredients": drink.ingredients,
            "instructions": drink.instructions,
            "thumbnail": drink.thumbnail,
            "page_url": self.client.drink_page_url(&drink.id, &drink.name),
        })
    }

    #[tool(description = "Search cocktails by name, or list cocktails starting with a letter")]
    pub async fn search_cocktails(
        &self,
        Parameters(params): Parameters<SearchCocktailsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!("MCP tool call: search_cocktails {:?}", params);

        let result = match (params.query.as_deref(), params.first_letter.as_deref()) {
            (Some(query), _) => self.client.search_by_name(query).await,
            (None, Some(letter)) => {
                let mut chars = letter.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => self.client.search_by_first_letter(c).await,
                    _ => return failure("Invalid first_letter", "expected exactly one character"),
                }
            }
            (None, None) => return failure("Missing search input", "provide query or first_letter"),
        };

        match result {
            Ok(drinks) => {
                let drinks_json: Vec<serde_json::Value> =
                    drinks.iter().map(|drink| self.drink_json(drink)).collect();
                success(json!({
                    "cocktails": drinks_json,
                    "total_count": drinks.len()
                }))
            }
            Err(e) => {
                tracing::error!("search_cocktails tool failed: {}", e);
                failure("Failed to search cocktails", e)
            }
        }
    }

    #[tool(description = "Get full cocktail details including ingredients and instructions")]
    pub async fn get_cocktail(
        &self,
        Parameters(params): Parameters<GetCocktailParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.client.lookup_drink(&params.id).await {
            Ok(Some(drink)) => success(self.drink_json(&drink)),
            Ok(None) => failure("Cocktail not found", format!("no cocktail with id {}", params.id)),
            Err(e) => failure("Failed to get cocktail", e),
        }
    }

    #[tool(description = "Get a random cocktail")]
    pub async fn random_cocktail(&self) -> Result<CallToolResult, McpError> {
        match self.client.random_drink().await {
            Ok(Some(drink)) => success(self.drink_json(&drink)),
            Ok(None) => failure("No cocktail returned", "the API returned an empty result"),
            Err(e) => failure("Failed to get random cocktail", e),
        }
    }

    #[tool(description = "Find cocktails by ingredient, category, alcoholic flag or glass")]
    pub async fn filter_cocktails(
        &self,
        Parameters(params): Parameters<FilterCocktailsParams>,
    ) -> Result<CallToolResult, McpError> {
        let Some(kind) = parse_filter(&params.filter) else {
            return failure(
                "Invalid filter",
                format!("'{}' is not one of ingredient, category, alcoholic, glass", params.filter),
            );
        };

        match self.client.filter(kind, &params.value).await {
            Ok(drinks) => {
                let drinks_json: Vec<serde_json::Value> = drinks
                    .iter()
                    .map(|drink| {
                        json!({
                            "id": drink.id,
                            "name": drink.name,
                            "thumbnail": drink.thumbnail,
                            "page_url": self.client.drink_page_url(&drink.id, &drink.name),
                        })
                    })
                    .collect();
                success(json!({
                    "cocktails": drinks_json,
                    "total_count": drinks.len()
                }))
            }
            Err(e) => failure("Failed to filter cocktails", e),
        }
    }

    #[tool(description = "Look up ingredient details such as type and alcohol content")]
    pub async fn search_ingredient(
        &self,
        Parameters(params): Parameters<SearchIngredientParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.client.search_ingredient(&params.name).await {
            Ok(ingredients) => success(json!({
                "ingredients": ingredients,
                "total_count": ingredients.len()
            })),
            Err(e) => failure("Failed to search ingredients", e),
        }
    }

    #[tool(description = "List cocktail categories, glasses, ingredients or alcoholic filters")]
    pub async fn list_cocktail_metadata(
        &self,
        Parameters(params): Parameters<ListMetadataParams>,
    ) -> Result<CallToolResult, McpError> {
        let Some(kind) = parse_list_kind(&params.kind) else {
            return failure(
                "Invalid list kind",
                format!("'{}' is not one of categories, glasses, ingredients, alcoholic", params.kind),
            );
        };

        match self.client.list(kind).await {
            Ok(values) => success(json!({
                "kind": kind,
                "values": values,
                "total_count": values.len()
            })),
            Err(e) => failure("Failed to list metadata", e),
        }
    }
}

#[tool_handler]
impl ServerHandler for CocktailMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some("This server looks up cocktail recipes from TheCocktailDB. Available tools: search by name or first letter, full recipe lookup by id, random cocktail, filtering by ingredient/category/glass/alcoholic flag, ingredient details, and metadata lists.".to_string()),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, McpError> {
        Ok(self.get_info())
    }
}
