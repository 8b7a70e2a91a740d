#![allow(dead_code)]

use recipp::{RecipeCollection, RecipeRecord, RecippClient};
use serde_json::{json, Value};

pub struct TestEnvironment {
    pub server: mockito::ServerGuard,
    pub client: RecippClient,
}

impl TestEnvironment {
    pub async fn new() -> Self {
        init_test_logging();
        let server = mockito::Server::new_async().await;
        let client = RecippClient::new(server.url());
        Self { server, client }
    }
}

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("recipp=debug")
        .with_test_writer()
        .try_init();
}

/// Three recipes in the shape the API serves them, including the `[""]`
/// placeholder for "no diets".
pub fn recipes_payload() -> Value {
    json!([
        {
            "id": 1,
            "title": "Spaghetti Carbonara",
            "prepTime": 20,
            "servingSize": 2,
            "category": "Italian",
            "steps": ["Boil the pasta.", "Cook the pancetta.", "Mix eggs and cheese."],
            "allergies": ["Eggs", "Dairy"],
            "diets": ["italian_glutenfree"],
            "ingredients": [
                { "name": "Spaghetti", "quantity": "200g" },
                { "name": "Eggs", "quantity": "2" }
            ],
            "nutrition": { "calories": 500, "protein": "20g", "fat": "25g", "carbs": "50g" },
            "starCount": 4,
            "createdAt": "2024-05-01T10:00:00.000Z",
            "updatedAt": "2024-05-01T10:00:00.000Z"
        },
        {
            "id": 2,
            "title": "Chicken Curry",
            "prepTime": 45,
            "servingSize": 4,
            "category": "Indian",
            "steps": [{ "number": 1, "step": "Brown the chicken." }],
            "allergies": [""],
            "diets": [""],
            "ingredients": [
                { "name": "Chicken", "quantity": "500g" },
                { "name": "Curry paste", "quantity": "2 tbsp" },
                { "name": "Coconut milk", "quantity": "400ml" }
            ],
            "nutrition": {
                "calories": { "name": "Calories", "amount": 720.0, "unit": "kcal", "percentageDailyNeeds": 36.0 }
            },
            "starCount": 9
        },
        {
            "id": 3,
            "title": "Green Salad",
            "prepTime": 10,
            "servingSize": 1,
            "steps": ["Wash the lettuce.", "Toss."],
            "allergies": ["Nuts"],
            "diets": ["vegan", "nutfree"],
            "ingredients": [{ "name": "Lettuce", "quantity": "1 head" }],
            "nutrition": { "calories": 150 },
            "starCount": 1
        }
    ])
}

pub fn recipe(value: Value) -> RecipeRecord {
    RecipeRecord::from_value(value).expect("valid recipe payload")
}

pub fn collection(values: Vec<Value>) -> RecipeCollection {
    values.into_iter().map(recipe).collect()
}

pub fn ids(recipes: &RecipeCollection) -> Vec<i64> {
    recipes.iter().map(RecipeRecord::id).collect()
}
