use foodie_finder::CatalogClient;
use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

/// Partial record in the shape the filter routes answer with.
fn meal(id: &str, name: &str) -> serde_json::Value {
    json!({
        "idMeal": id,
        "strMeal": name,
        "strMealThumb": format!("https://www.themealdb.com/images/media/meals/{id}.jpg")
    })
}

#[tokio::test]
async fn search_by_name_decodes_full_records() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/search.php").query_param("s", "Arrabiata");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "meals": [{
                        "idMeal": "52771",
                        "strMeal": "Spicy Arrabiata Penne",
                        "strCategory": "Vegetarian",
                        "strArea": "Italian",
                        "strInstructions": "Bring a large pot of water to a boil.",
                        "strMealThumb": "https://www.themealdb.com/images/media/meals/ustsqw1468250014.jpg",
                        "strTags": "Pasta,Curry",
                        "strIngredient1": "penne rigate",
                        "strIngredient2": "olive oil",
                        "strIngredient3": "",
                        "strMeasure1": "1 pound",
                        "strMeasure2": "1/4 cup",
                        "strMeasure3": ""
                    }]
                }));
        })
        .await;

    let client = CatalogClient::with_base_url(server.base_url());
    let recipes = client.search_by_name("Arrabiata").await.unwrap();

    mock.assert_async().await;
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].id, "52771");
    assert_eq!(recipes[0].category.as_deref(), Some("Vegetarian"));
    assert_eq!(recipes[0].ingredients().count(), 2);
}

#[tokio::test]
async fn a_null_meals_listing_is_an_empty_result() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/search.php").query_param("s", "zzzz");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "meals": null }));
        })
        .await;

    let client = CatalogClient::with_base_url(server.base_url());
    let recipes = client.search_by_name("zzzz").await.unwrap();
    assert_eq!(recipes.len(), 0);
}

#[tokio::test]
async fn a_listing_without_the_meals_key_is_an_empty_result() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/search.php").query_param("s", "zzzz");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({}));
        })
        .await;

    let client = CatalogClient::with_base_url(server.base_url());
    let recipes = client.search_by_name("zzzz").await.unwrap();
    assert_eq!(recipes.len(), 0);
}

#[tokio::test]
async fn search_by_ingredient_filters_on_i() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/filter.php").query_param("i", "chicken");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "meals": [meal("52940", "Brown Stew Chicken")] }));
        })
        .await;

    let client = CatalogClient::with_base_url(server.base_url());
    let recipes = client.search_by_ingredient("chicken").await.unwrap();

    mock.assert_async().await;
    assert_eq!(recipes[0].name, "Brown Stew Chicken");
    assert_eq!(recipes[0].instructions, None);
}

#[tokio::test]
async fn recipe_by_id_unwraps_the_single_record() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/lookup.php").query_param("i", "52874");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "meals": [meal("52874", "Beef and Mustard Pie")] }));
        })
        .await;

    let client = CatalogClient::with_base_url(server.base_url());
    let recipe = client.recipe_by_id("52874").await.unwrap();

    mock.assert_async().await;
    assert_eq!(recipe.unwrap().name, "Beef and Mustard Pie");
}

#[tokio::test]
async fn recipe_by_id_misses_as_none() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/lookup.php").query_param("i", "0");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "meals": null }));
        })
        .await;

    let client = CatalogClient::with_base_url(server.base_url());
    assert!(client.recipe_by_id("0").await.unwrap().is_none());
}

#[tokio::test]
async fn random_recipe_takes_the_first_listing_entry() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/random.php");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "meals": [meal("53013", "Big Mac")] }));
        })
        .await;

    let client = CatalogClient::with_base_url(server.base_url());
    let recipe = client.random_recipe().await.unwrap();
    assert_eq!(recipe.unwrap().id, "53013");
}

#[tokio::test]
async fn categories_decode_from_their_own_envelope() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/categories.php");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "categories": [{
                        "idCategory": "1",
                        "strCategory": "Beef",
                        "strCategoryThumb": "https://www.themealdb.com/images/category/beef.png",
                        "strCategoryDescription": "Beef is the culinary name for meat from cattle."
                    }]
                }));
        })
        .await;

    let client = CatalogClient::with_base_url(server.base_url());
    let categories = client.categories().await.unwrap();

    mock.assert_async().await;
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "Beef");
}

#[tokio::test]
async fn recipes_by_category_filters_on_c() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/filter.php").query_param("c", "Seafood");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "meals": [meal("52959", "Baked salmon with fennel")] }));
        })
        .await;

    let client = CatalogClient::with_base_url(server.base_url());
    let recipes = client.recipes_by_category("Seafood").await.unwrap();

    mock.assert_async().await;
    assert_eq!(recipes.len(), 1);
}

#[tokio::test]
async fn recipes_by_area_filters_on_a() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/filter.php").query_param("a", "Canadian");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "meals": [meal("52928", "BeaverTails")] }));
        })
        .await;

    let client = CatalogClient::with_base_url(server.base_url());
    let recipes = client.recipes_by_area("Canadian").await.unwrap();

    mock.assert_async().await;
    assert_eq!(recipes[0].name, "BeaverTails");
}

#[tokio::test]
async fn areas_list_the_known_cuisines() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/list.php").query_param("a", "list");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "meals": [
                        { "strArea": "American" },
                        { "strArea": "British" },
                        { "strArea": "Canadian" }
                    ]
                }));
        })
        .await;

    let client = CatalogClient::with_base_url(server.base_url());
    let areas = client.areas().await.unwrap();

    mock.assert_async().await;
    let names: Vec<_> = areas.iter().map(|area| area.name.as_str()).collect();
    assert_eq!(names, vec!["American", "British", "Canadian"]);
}

#[tokio::test]
async fn areas_tolerate_a_listing_without_the_meals_key() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/list.php").query_param("a", "list");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({}));
        })
        .await;

    let client = CatalogClient::with_base_url(server.base_url());
    let areas = client.areas().await.unwrap();
    assert_eq!(areas.len(), 0);
}

#[tokio::test]
async fn server_errors_collapse_to_the_one_fetch_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/random.php");
            then.status(500).body("upstream exploded");
        })
        .await;

    let client = CatalogClient::with_base_url(server.base_url());
    let err = client.random_recipe().await.unwrap_err();
    assert_eq!(err.to_string(), "failed to fetch data from the recipe catalog");
}

#[tokio::test]
async fn malformed_bodies_collapse_to_the_one_fetch_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/categories.php");
            then.status(200)
                .header("content-type", "application/json")
                .body("<html>definitely not json</html>");
        })
        .await;

    let client = CatalogClient::with_base_url(server.base_url());
    let err = client.categories().await.unwrap_err();
    assert_eq!(err.to_string(), "failed to fetch data from the recipe catalog");
}

#[tokio::test]
async fn featured_selection_dedupes_across_staples_and_caps_at_eight() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/filter.php").query_param("i", "chicken");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "meals": [
                    meal("1", "Chicken One"),
                    meal("2", "Chicken Two"),
                    meal("3", "Chicken Three"),
                    meal("4", "Chicken Four"),
                    meal("5", "Chicken Five")
                ] }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/filter.php").query_param("i", "beef");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "meals": [
                    meal("6", "Beef Six"),
                    meal("1", "Beef One Again"),
                    meal("7", "Beef Seven"),
                    meal("8", "Beef Eight")
                ] }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/filter.php").query_param("i", "pasta");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "meals": [
                    meal("9", "Pasta Nine"),
                    meal("10", "Pasta Ten")
                ] }));
        })
        .await;

    let client = CatalogClient::with_base_url(server.base_url());
    let featured = client.featured_recipes().await.unwrap();

    let ids: Vec<_> = featured.iter().map(|recipe| recipe.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    // The duplicate keeps its first appearance.
    assert_eq!(featured[0].name, "Chicken One");
}
