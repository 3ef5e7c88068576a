//! Type definitions for TheCocktailDB JSON API.
//!
//! ## Key Types
//!
//! - [`Drink`] - Full cocktail record (custom deserializer flattens the numbered ingredient fields)
//! - [`DrinkSummary`] - Id, name and thumbnail as returned by the filter endpoints
//! - [`Ingredient`] - Ingredient details from the ingredient search
//! - [`DrinksResponse`] - `{"drinks": [...]}` wrapper shared by most endpoints
//!
//! ## API Compatibility
//!
//! The API signals "no results" in several ways: `"drinks": null`, a placeholder
//! string such as `"no data found"`, or an empty body. The response wrappers map
//! all of them to an empty list.

use chrono::NaiveDateTime;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

/// Highest numbered `strIngredientN` / `strMeasureN` field the API emits.
pub const MAX_INGREDIENTS: usize = 15;

/// Format of the `dateModified` field.
pub const DATE_MODIFIED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One ingredient line of a drink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrinkIngredient {
    /// Ingredient name, e.g. "Tequila"
    pub name: String,
    /// Free-text amount, e.g. "1 1/2 oz"
    pub measure: Option<String>,
}

/// A complete cocktail record from the lookup, search and random endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct Drink {
    /// Numeric id, kept as text like the API does
    pub id: String,
    pub name: String,
    pub alternate_name: Option<String>,
    /// Comma separated tags, see [`Drink::tags`]
    pub tags: Option<String>,
    pub video: Option<String>,
    pub category: Option<String>,
    /// IBA official cocktail list, if listed
    pub iba: Option<String>,
    /// "Alcoholic", "Non alcoholic" or "Optional alcohol"
    pub alcoholic: Option<String>,
    pub glass: Option<String>,
    /// English instructions
    pub instructions: Option<String>,
    pub thumbnail: Option<String>,
    /// Ingredient lines in the order the API numbers them
    pub ingredients: Vec<DrinkIngredient>,
    pub image_source: Option<String>,
    pub image_attribution: Option<String>,
    pub date_modified: Option<NaiveDateTime>,
}

impl Drink {
    pub fn tags(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_alcoholic(&self) -> bool {
        matches!(self.alcoholic.as_deref(), Some("Alcoholic"))
    }
}

/// Custom deserializer for Drink.
///
/// The API spreads ingredients over `strIngredient1..15` and `strMeasure1..15`,
/// padding unused slots with `null` or empty strings. Those are collapsed into
/// [`Drink::ingredients`]. Blank strings become `None` everywhere.
impl<'de> Deserialize<'de> for Drink {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{MapAccess, Visitor};
        use std::fmt;

        struct DrinkVisitor;

        impl<'de> Visitor<'de> for DrinkVisitor {
            type Value = Drink;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a drink object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut id: Option<String> = None;
                let mut name: Option<String> = None;
                let mut alternate_name = None;
                let mut tags = None;
                let mut video = None;
                let mut category = None;
                let mut iba = None;
                let mut alcoholic = None;
                let mut glass = None;
                let mut instructions = None;
                let mut thumbnail = None;
                let mut image_source = None;
                let mut image_attribution = None;
                let mut date_modified = None;
                let mut names: [Option<String>; MAX_INGREDIENTS] = Default::default();
                let mut measures: [Option<String>; MAX_INGREDIENTS] = Default::default();

                while let Some(key) = map.next_key::<String>()? {
                    if let Some(slot) = numbered_slot(&key, "strIngredient") {
                        names[slot] = non_blank(map.next_value()?);
                        continue;
                    }
                    if let Some(slot) = numbered_slot(&key, "strMeasure") {
                        measures[slot] = non_blank(map.next_value()?);
                        continue;
                    }

                    match key.as_str() {
                        "idDrink" => id = Some(map.next_value::<IdValue>()?.0),
                        "strDrink" => name = non_blank(map.next_value()?),
                        "strDrinkAlternate" => alternate_name = non_blank(map.next_value()?),
                        "strTags" => tags = non_blank(map.next_value()?),
                        "strVideo" => video = non_blank(map.next_value()?),
                        "strCategory" => category = non_blank(map.next_value()?),
                        "strIBA" => iba = non_blank(map.next_value()?),
                        "strAlcoholic" => alcoholic = non_blank(map.next_value()?),
                        "strGlass" => glass = non_blank(map.next_value()?),
                        "strInstructions" => instructions = non_blank(map.next_value()?),
                        "strDrinkThumb" => thumbnail = non_blank(map.next_value()?),
                        "strImageSource" => image_source = non_blank(map.next_value()?),
                        "strImageAttribution" => image_attribution = non_blank(map.next_value()?),
                        "dateModified" => {
                            date_modified = non_blank(map.next_value()?).and_then(|raw| {
                                NaiveDateTime::parse_from_str(&raw, DATE_MODIFIED_FORMAT).ok()
                            })
                        }
                        _ => {
                            let _ = map.next_value::<de::IgnoredAny>()?;
                        }
                    }
                }

                let id = id.ok_or_else(|| <A::Error as de::Error>::missing_field("idDrink"))?;
                let name = name.ok_or_else(|| <A::Error as de::Error>::missing_field("strDrink"))?;

                let ingredients = names
                    .into_iter()
                    .zip(measures)
                    .filter_map(|(name, measure)| name.map(|name| DrinkIngredient { name, measure }))
                    .collect();

                Ok(Drink {
                    id,
                    name,
                    alternate_name,
                    tags,
                    video,
                    category,
                    iba,
                    alcoholic,
                    glass,
                    instructions,
                    thumbnail,
                    ingredients,
                    image_source,
                    image_attribution,
                    date_modified,
                })
            }
        }

        deserializer.deserialize_map(DrinkVisitor)
    }
}

/// Zero-based slot for keys like `strIngredient3`, if the number is in range.
fn numbered_slot(key: &str, prefix: &str) -> Option<usize> {
    let number: usize = key.strip_prefix(prefix)?.parse().ok()?;
    (1..=MAX_INGREDIENTS).contains(&number).then(|| number - 1)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Id that may arrive as a string or a bare number.
struct IdValue(String);

impl<'de> Deserialize<'de> for IdValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Ok(IdValue(s)),
            serde_json::Value::Number(n) => Ok(IdValue(n.to_string())),
            other => Err(de::Error::custom(format!("invalid id: {other}"))),
        }
    }
}

/// Entry returned by the filter endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkSummary {
    #[serde(rename(deserialize = "idDrink"))]
    pub id: String,
    #[serde(rename(deserialize = "strDrink"))]
    pub name: String,
    #[serde(rename(deserialize = "strDrinkThumb"), default)]
    pub thumbnail: Option<String>,
}

/// Ingredient details from `search.php?i=`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename(deserialize = "idIngredient"))]
    pub id: String,
    #[serde(rename(deserialize = "strIngredient"))]
    pub name: String,
    #[serde(rename(deserialize = "strDescription"), default)]
    pub description: Option<String>,
    #[serde(rename(deserialize = "strType"), default)]
    pub kind: Option<String>,
    /// "Yes" or "No"
    #[serde(rename(deserialize = "strAlcohol"), default)]
    pub alcohol: Option<String>,
    /// Alcohol by volume, as text
    #[serde(rename(deserialize = "strABV"), default)]
    pub abv: Option<String>,
}

/// `{"drinks": [...]}` wrapper.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct DrinksResponse<T> {
    #[serde(default, deserialize_with = "lenient_list")]
    pub drinks: Vec<T>,
}

impl<T> Default for DrinksResponse<T> {
    fn default() -> Self {
        Self { drinks: Vec::new() }
    }
}

/// `{"ingredients": [...]}` wrapper.
#[derive(Debug, Default, Deserialize)]
pub struct IngredientsResponse {
    #[serde(default, deserialize_with = "lenient_list")]
    pub ingredients: Vec<Ingredient>,
}

/// Accepts an array, or `null` / a placeholder string meaning "nothing found".
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(de::Error::custom))
            .collect(),
        serde_json::Value::Null | serde_json::Value::String(_) => Ok(Vec::new()),
        other => Err(de::Error::custom(format!(
            "expected a list of results, found {other}"
        ))),
    }
}

/// Metadata lists served by `list.php`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Categories,
    Glasses,
    Ingredients,
    Alcoholic,
}

impl ListKind {
    /// Query key passed to `list.php` (`?c=list`, `?g=list`, ...).
    pub fn query_key(self) -> &'static str {
        match self {
            ListKind::Categories => "c",
            ListKind::Glasses => "g",
            ListKind::Ingredients => "i",
            ListKind::Alcoholic => "a",
        }
    }

    /// Field holding the value in each returned entry.
    pub fn field(self) -> &'static str {
        match self {
            ListKind::Categories => "strCategory",
            ListKind::Glasses => "strGlass",
            ListKind::Ingredients => "strIngredient1",
            ListKind::Alcoholic => "strAlcoholic",
        }
    }
}

/// Filters supported by `filter.php`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Ingredient,
    Category,
    Alcoholic,
    Glass,
}

impl FilterKind {
    pub fn query_key(self) -> &'static str {
        match self {
            FilterKind::Ingredient => "i",
            FilterKind::Category => "c",
            FilterKind::Alcoholic => "a",
            FilterKind::Glass => "g",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn margarita() -> serde_json::Value {
        json!({
            "idDrink": "11007",
            "strDrink": "Margarita",
            "strDrinkAlternate": null,
            "strTags": "IBA,ContemporaryClassic",
            "strVideo": null,
            "strCategory": "Ordinary Drink",
            "strIBA": "Contemporary Classics",
            "strAlcoholic": "Alcoholic",
            "strGlass": "Cocktail glass",
            "strInstructions": "Rub the rim of the glass with the lime slice.",
            "strInstructionsDE": "Reiben Sie den Rand des Glases.",
            "strDrinkThumb": "https://www.thecocktaildb.com/images/media/drink/5noda61589575158.jpg",
            "strIngredient1": "Tequila",
            "strIngredient2": "Triple sec",
            "strIngredient3": "Lime juice",
            "strIngredient4": "Salt",
            "strIngredient5": null,
            "strIngredient15": "",
            "strMeasure1": "1 1/2 oz ",
            "strMeasure2": "1/2 oz ",
            "strMeasure3": "1 oz ",
            "strMeasure4": null,
            "strMeasure5": null,
            "strImageSource": "https://commons.wikimedia.org/wiki/File:Klassiche_Margarita.jpg",
            "strImageAttribution": "Cocktailmarler",
            "strCreativeCommonsConfirmed": "Yes",
            "dateModified": "2015-08-18 14:42:59"
        })
    }

    #[test]
    fn drink_collapses_numbered_ingredients() {
        let drink: Drink = serde_json::from_value(margarita()).expect("valid drink");

        assert_eq!(drink.id, "11007");
        assert_eq!(drink.name, "Margarita");
        assert_eq!(
            drink.ingredients,
            vec![
                DrinkIngredient { name: "Tequila".into(), measure: Some("1 1/2 oz".into()) },
                DrinkIngredient { name: "Triple sec".into(), measure: Some("1/2 oz".into()) },
                DrinkIngredient { name: "Lime juice".into(), measure: Some("1 oz".into()) },
                DrinkIngredient { name: "Salt".into(), measure: None },
            ]
        );
        assert_eq!(drink.tags(), vec!["IBA", "ContemporaryClassic"]);
        assert!(drink.is_alcoholic());
        assert_eq!(drink.alternate_name, None);
        assert_eq!(
            drink.date_modified.map(|d| d.to_string()),
            Some("2015-08-18 14:42:59".to_string())
        );
    }

    #[test]
    fn drink_requires_id_and_name() {
        let err = serde_json::from_value::<Drink>(json!({"strDrink": "Nameless"}))
            .expect_err("missing id");
        assert!(err.to_string().contains("idDrink"));
    }

    #[test]
    fn drink_accepts_numeric_id_and_bad_date() {
        let drink: Drink = serde_json::from_value(json!({
            "idDrink": 17222,
            "strDrink": "A1",
            "dateModified": "yesterday"
        }))
        .expect("valid drink");
        assert_eq!(drink.id, "17222");
        assert!(drink.date_modified.is_none());
        assert!(drink.ingredients.is_empty());
        assert!(drink.tags().is_empty());
    }

    #[test]
    fn out_of_range_slots_are_ignored() {
        assert_eq!(numbered_slot("strIngredient1", "strIngredient"), Some(0));
        assert_eq!(numbered_slot("strIngredient15", "strIngredient"), Some(14));
        assert_eq!(numbered_slot("strIngredient16", "strIngredient"), None);
        assert_eq!(numbered_slot("strIngredient0", "strIngredient"), None);
        assert_eq!(numbered_slot("strIngredientX", "strIngredient"), None);
    }

    #[test]
    fn no_results_variants_become_empty_lists() {
        for body in [
            r#"{"drinks": null}"#,
            r#"{"drinks": "no data found"}"#,
            r#"{}"#,
        ] {
            let response: DrinksResponse<DrinkSummary> =
                serde_json::from_str(body).expect("lenient body");
            assert!(response.drinks.is_empty(), "body {body} should be empty");
        }
    }

    #[test]
    fn malformed_entries_are_errors() {
        let result = serde_json::from_str::<DrinksResponse<DrinkSummary>>(
            r#"{"drinks": [{"strDrink": "no id"}]}"#,
        );
        assert!(result.is_err());

        let result = serde_json::from_str::<DrinksResponse<DrinkSummary>>(r#"{"drinks": 5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn ingredient_search_response() {
        let response: IngredientsResponse = serde_json::from_value(json!({
            "ingredients": [{
                "idIngredient": "305",
                "strIngredient": "Vodka",
                "strDescription": "Vodka is a distilled beverage.",
                "strType": "Vodka",
                "strAlcohol": "Yes",
                "strABV": "40"
            }]
        }))
        .expect("valid ingredients");

        assert_eq!(response.ingredients.len(), 1);
        assert_eq!(response.ingredients[0].name, "Vodka");
        assert_eq!(response.ingredients[0].abv.as_deref(), Some("40"));
    }

    #[test]
    fn list_and_filter_keys() {
        assert_eq!(ListKind::Categories.query_key(), "c");
        assert_eq!(ListKind::Ingredients.field(), "strIngredient1");
        assert_eq!(FilterKind::Glass.query_key(), "g");
    }
}
