mod common;

use common::{ids, recipes_payload, TestEnvironment};
use mockito::Matcher;
use pretty_assertions::assert_eq;
use recipp::{ComplexSearch, SortOrder};
use serde_json::json;

#[tokio::test]
async fn test_get_all_recipes() {
    let mut env = TestEnvironment::new().await;
    let mock = env
        .server
        .mock("GET", "/recipes")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(recipes_payload().to_string())
        .create_async()
        .await;

    let recipes = env.client.get_all_recipes().await.expect("recipes should load");

    mock.assert_async().await;
    assert_eq!(ids(&recipes), vec![1, 2, 3]);
    assert_eq!(recipes[0].title(), Some("Spaghetti Carbonara"));
    assert_eq!(recipes[1].nutrition().unwrap().calories_amount(), Some(720.0));
}

#[tokio::test]
async fn test_fetched_recipes_sort_by_diets() {
    let mut env = TestEnvironment::new().await;
    let _mock = env
        .server
        .mock("GET", "/recipes")
        .with_status(200)
        .with_body(recipes_payload().to_string())
        .create_async()
        .await;

    let mut recipes = env.client.get_all_recipes().await.unwrap();
    recipes.sort_by_diets_amount(SortOrder::Asc);

    assert_eq!(ids(&recipes), vec![2, 1, 3]);
}

#[tokio::test]
async fn test_get_recipe_by_id() {
    let mut env = TestEnvironment::new().await;
    let payload = recipes_payload();
    let mock = env
        .server
        .mock("GET", "/recipes/3")
        .with_status(200)
        .with_body(payload[2].to_string())
        .create_async()
        .await;

    let recipe = env.client.get_recipe_by_id(3).await.unwrap();

    mock.assert_async().await;
    assert_eq!(recipe.id(), 3);
    assert_eq!(recipe.title(), Some("Green Salad"));
    assert_eq!(recipe.servings(), Some(1.0));
}

#[tokio::test]
async fn test_search_recipes_sends_query() {
    let mut env = TestEnvironment::new().await;
    let mock = env
        .server
        .mock("GET", "/search")
        .match_query(Matcher::UrlEncoded("q".into(), "Chicken Curry".into()))
        .with_status(200)
        .with_body(json!([recipes_payload()[1]]).to_string())
        .create_async()
        .await;

    let recipes = env.client.search_recipes("Chicken Curry").await.unwrap();

    mock.assert_async().await;
    assert_eq!(ids(&recipes), vec![2]);
}

#[tokio::test]
async fn test_search_by_ingredients() {
    let mut env = TestEnvironment::new().await;
    let mock = env
        .server
        .mock("GET", "/search/ingredients")
        .match_query(Matcher::UrlEncoded("ingredients".into(), "chicken,coconut milk".into()))
        .with_status(200)
        .with_body(json!([recipes_payload()[1]]).to_string())
        .create_async()
        .await;

    let recipes = env
        .client
        .search_by_ingredients(&["chicken", "coconut milk"])
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(recipes.len(), 1);
}

#[tokio::test]
async fn test_search_by_excluded_ingredients() {
    let mut env = TestEnvironment::new().await;
    let mock = env
        .server
        .mock("GET", "/search/excluded-ingredients")
        .match_query(Matcher::UrlEncoded("ingredients".into(), "dough,rice".into()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let excluded = vec!["dough".to_string(), "rice".to_string()];
    let recipes = env
        .client
        .search_by_excluded_ingredients(&excluded)
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(recipes.is_empty());
}

#[tokio::test]
async fn test_complex_search_sends_only_set_filters() {
    let mut env = TestEnvironment::new().await;
    let mock = env
        .server
        .mock("GET", "/search/complex")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "salad".into()),
            Matcher::UrlEncoded("diets".into(), "vegan".into()),
            Matcher::UrlEncoded("excludedIngredients".into(), "nuts,eggs".into()),
            Matcher::UrlEncoded("maxPrepTime".into(), "15".into()),
        ]))
        .with_status(200)
        .with_body(json!([recipes_payload()[2]]).to_string())
        .create_async()
        .await;

    let search = ComplexSearch::new()
        .query("salad")
        .diets(["vegan"])
        .excluded_ingredients(["nuts", "eggs"])
        .max_prep_time(15);
    let recipes = env.client.complex_search(&search).await.unwrap();

    mock.assert_async().await;
    assert_eq!(ids(&recipes), vec![3]);
}

#[tokio::test]
async fn test_star_recipe() {
    let mut env = TestEnvironment::new().await;
    let mock = env
        .server
        .mock("POST", "/recipes/4/star")
        .with_status(200)
        .with_body(r#"{"message":"Recipe starred successfully","starCount":12}"#)
        .create_async()
        .await;

    let response = env.client.star_recipe(4).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.message, "Recipe starred successfully");
    assert_eq!(response.star_count, 12);
}
