#![allow(dead_code)]

use cocktaildb_client::config::ApiConfig;
use cocktaildb_client::CocktailDbClient;
use mockito::{Mock, Matcher, ServerGuard};
use serde_json::{json, Value};

/// Port nothing listens on, for connection failure tests.
pub const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:1";

pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Config pointing both API and site roots at the mock server.
pub fn mock_config(server: &ServerGuard) -> ApiConfig {
    ApiConfig::new(format!("{}/api/json/v1/1", server.url()), server.url())
}

pub fn mock_client(server: &ServerGuard) -> CocktailDbClient {
    CocktailDbClient::new(&mock_config(server))
}

/// Registers a GET on an API endpoint with an exact raw query string.
pub async fn mock_api(
    server: &mut ServerGuard,
    endpoint: &str,
    query: &str,
    status: usize,
    body: &str,
) -> Mock {
    let mock = server
        .mock("GET", format!("/api/json/v1/1{endpoint}").as_str())
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body);

    let mock = if query.is_empty() {
        mock.match_query(Matcher::Missing)
    } else {
        mock.match_query(Matcher::Exact(query.to_string()))
    };

    mock.create_async().await
}

pub fn margarita() -> Value {
    json!({
        "idDrink": "11007",
        "strDrink": "Margarita",
        "strDrinkAlternate": null,
        "strTags": "IBA,ContemporaryClassic",
        "strCategory": "Ordinary Drink",
        "strIBA": "Contemporary Classics",
        "strAlcoholic": "Alcoholic",
        "strGlass": "Cocktail glass",
        "strInstructions": "Rub the rim of the glass with the lime slice to make the salt stick to it.",
        "strDrinkThumb": "https://www.thecocktaildb.com/images/media/drink/5noda61589575158.jpg",
        "strIngredient1": "Tequila",
        "strIngredient2": "Triple sec",
        "strIngredient3": "Lime juice",
        "strIngredient4": "Salt",
        "strIngredient5": null,
        "strMeasure1": "1 1/2 oz ",
        "strMeasure2": "1/2 oz ",
        "strMeasure3": "1 oz ",
        "strMeasure4": null,
        "dateModified": "2015-08-18 14:42:59"
    })
}

pub fn drinks_body(drinks: Vec<Value>) -> String {
    json!({ "drinks": drinks }).to_string()
}
