use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::recipe::Recipe;

pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// What an empty search box searches for
pub const DEFAULT_QUERY: &str = "chicken";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Category chips, in display order
pub const CATEGORIES: [&str; 12] = [
    "Beef",
    "Chicken",
    "Dessert",
    "Lamb",
    "Pasta",
    "Seafood",
    "Side",
    "Starter",
    "Vegan",
    "Vegetarian",
    "Breakfast",
    "Goat",
];

/// Every endpoint answers with this envelope; `meals` is null on no match
#[derive(Deserialize)]
struct MealsResponse {
    #[serde(default)]
    meals: Option<Vec<Recipe>>,
}

#[derive(Clone)]
pub struct MealDbClient {
    client: Client,
    base_url: String,
    default_query: String,
}

impl MealDbClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to a default HTTP client: {}", e);
                Client::new()
            });

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            default_query: DEFAULT_QUERY.to_string(),
        }
    }

    pub fn with_default_query(mut self, query: &str) -> Self {
        self.default_query = query.to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_meals(&self, endpoint: &str, key: &str, value: &str) -> Result<Vec<Recipe>> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!("GET {}?{}={}", url, key, value);

        let response = self.client.get(&url).query(&[(key, value)]).send().await?;

        if !response.status().is_success() {
            return Err(Error::ApiStatus {
                status: response.status().as_u16(),
                url,
            });
        }

        let body: MealsResponse = response.json().await?;
        Ok(body.meals.unwrap_or_default())
    }

    /// Keyword search. An empty term searches for the default query.
    pub async fn search(&self, term: &str) -> Result<Vec<Recipe>> {
        let term = term.trim();
        let term = if term.is_empty() { self.default_query.as_str() } else { term };
        self.get_meals("search.php", "s", term).await
    }

    /// Recipes in a category. These records only carry id, name and thumbnail.
    pub async fn filter_by_category(&self, category: &str) -> Result<Vec<Recipe>> {
        self.get_meals("filter.php", "c", category).await
    }

    /// Full record for one id
    pub async fn lookup(&self, id: &str) -> Result<Option<Recipe>> {
        let mut meals = self.get_meals("lookup.php", "i", id).await?;
        Ok(if meals.is_empty() { None } else { Some(meals.swap_remove(0)) })
    }

    /// `search`, degrading any failure to an empty list
    pub async fn search_or_empty(&self, term: &str) -> Vec<Recipe> {
        match self.search(term).await {
            Ok(recipes) => {
                tracing::info!("Search {:?} returned {} recipes", term, recipes.len());
                recipes
            }
            Err(e) => {
                tracing::error!("Error fetching recipes for {:?}: {}", term, e);
                Vec::new()
            }
        }
    }

    /// `filter_by_category`, degrading any failure to an empty list
    pub async fn category_or_empty(&self, category: &str) -> Vec<Recipe> {
        match self.filter_by_category(category).await {
            Ok(recipes) => {
                tracing::info!("Category {} returned {} recipes", category, recipes.len());
                recipes
            }
            Err(e) => {
                tracing::error!("Error fetching category {}: {}", category, e);
                Vec::new()
            }
        }
    }
}

/// Parse a raw API body without a request
#[cfg(test)]
fn parse_meals(body: &str) -> Result<Vec<Recipe>> {
    let response: MealsResponse = serde_json::from_str(body)?;
    Ok(response.meals.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_meals_is_empty() {
        assert!(parse_meals(r#"{"meals": null}"#).unwrap().is_empty());
        assert!(parse_meals(r#"{}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parses_meal_list() {
        let body = r#"{"meals": [
            {"strMeal": "Beef and Mustard Pie", "strMealThumb": "https://x/1.jpg", "idMeal": "52874"},
            {"strMeal": "Beef Wellington", "strMealThumb": "https://x/2.jpg", "idMeal": "52803"}
        ]}"#;
        let meals = parse_meals(body).unwrap();
        assert_eq!(meals.len(), 2);
        assert_eq!(meals[1].name, "Beef Wellington");
        assert!(meals.iter().all(Recipe::is_partial));
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        assert!(parse_meals("<html>").is_err());
    }

    #[test]
    fn test_categories_order() {
        assert_eq!(CATEGORIES.len(), 12);
        assert_eq!(CATEGORIES[0], "Beef");
        assert_eq!(CATEGORIES[11], "Goat");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = MealDbClient::new("http://localhost:9/api/");
        assert_eq!(client.base_url(), "http://localhost:9/api");
    }

    #[tokio::test]
    async fn test_network_failure_degrades_to_empty() {
        // nothing listens on port 9 (discard) locally
        let client = MealDbClient::new("http://127.0.0.1:9");
        assert!(client.search("chicken").await.is_err());
        assert!(client.search_or_empty("chicken").await.is_empty());
        assert!(client.category_or_empty("Beef").await.is_empty());
    }
}
