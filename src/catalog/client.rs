use std::collections::HashSet;
use std::time::Duration;

use log::error;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::category::{Area, Category};
use super::error::FetchError;
use super::recipe::Recipe;

/// Public v1 endpoint of the recipe catalog.
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Staple ingredients sampled for the featured selection.
const FEATURED_INGREDIENTS: [&str; 3] = ["chicken", "beef", "pasta"];
const FEATURED_LIMIT: usize = 8;

/// Most routes answer `{"meals": [...]}` with `null` standing in for an
/// empty result set.
#[derive(Deserialize)]
struct MealListing<T> {
    meals: Option<Vec<T>>,
}

#[derive(Deserialize)]
struct CategoryListing {
    categories: Option<Vec<Category>>,
}

/// Read-only client for the recipe catalog.
///
/// Every operation maps onto one HTTP GET and surfaces failures as a single
/// opaque [`FetchError`]; callers get data or "it didn't work", nothing in
/// between. Cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different host, e.g. a local mock during tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Full-text search over recipe names.
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Recipe>, FetchError> {
        self.meals("search.php", &[("s", name)]).await
    }

    /// Recipes using the given ingredient. The catalog answers these with
    /// partial records (identifier, name, thumbnail).
    pub async fn search_by_ingredient(&self, ingredient: &str) -> Result<Vec<Recipe>, FetchError> {
        self.meals("filter.php", &[("i", ingredient)]).await
    }

    /// Single full record by identifier; `None` when the catalog has no such
    /// recipe.
    pub async fn recipe_by_id(&self, id: &str) -> Result<Option<Recipe>, FetchError> {
        let meals: Vec<Recipe> = self.meals("lookup.php", &[("i", id)]).await?;
        Ok(meals.into_iter().next())
    }

    /// One recipe chosen by the catalog.
    pub async fn random_recipe(&self) -> Result<Option<Recipe>, FetchError> {
        let meals: Vec<Recipe> = self.meals("random.php", &[]).await?;
        Ok(meals.into_iter().next())
    }

    /// All browsable categories.
    pub async fn categories(&self) -> Result<Vec<Category>, FetchError> {
        let listing: CategoryListing = self.get_json("categories.php", &[]).await?;
        Ok(listing.categories.unwrap_or_default())
    }

    /// Partial records for every recipe in a category.
    pub async fn recipes_by_category(&self, category: &str) -> Result<Vec<Recipe>, FetchError> {
        self.meals("filter.php", &[("c", category)]).await
    }

    /// Partial records for every recipe from a cuisine/origin.
    pub async fn recipes_by_area(&self, area: &str) -> Result<Vec<Recipe>, FetchError> {
        self.meals("filter.php", &[("a", area)]).await
    }

    /// All cuisine/origin names known to the catalog.
    pub async fn areas(&self) -> Result<Vec<Area>, FetchError> {
        self.meals("list.php", &[("a", "list")]).await
    }

    /// A small rotating selection built from staple-ingredient searches.
    ///
    /// Duplicates across the staples keep their first appearance; the result
    /// is capped at eight records.
    pub async fn featured_recipes(&self) -> Result<Vec<Recipe>, FetchError> {
        let mut combined = Vec::new();
        for ingredient in FEATURED_INGREDIENTS {
            combined.extend(self.search_by_ingredient(ingredient).await?);
        }
        let mut featured = dedupe_by_id(combined);
        featured.truncate(FEATURED_LIMIT);
        Ok(featured)
    }

    async fn meals<T: DeserializeOwned>(
        &self,
        route: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<T>, FetchError> {
        let listing: MealListing<T> = self.get_json(route, params).await?;
        Ok(listing.meals.unwrap_or_default())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        route: &str,
        params: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, route);
        let result = async {
            self.http
                .get(&url)
                .query(params)
                .timeout(REQUEST_TIMEOUT)
                .send()
                .await?
                .error_for_status()?
                .json::<T>()
                .await
        }
        .await;

        result.map_err(|err| {
            error!("Catalog request to {route} failed: {err}");
            FetchError::from(err)
        })
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep the first record seen for each identifier, preserving order.
fn dedupe_by_id(recipes: Vec<Recipe>) -> Vec<Recipe> {
    let mut seen = HashSet::new();
    recipes
        .into_iter()
        .filter(|recipe| seen.insert(recipe.id.clone()))
        .collect()
}
