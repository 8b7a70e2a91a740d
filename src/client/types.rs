//! Request and response types for the Recipp API that are not recipes
//! themselves.
//!
//! - [`StarResponse`] - body returned after starring a recipe
//! - [`ComplexSearch`] - multi-filter search parameters

use serde::{Deserialize, Serialize};

/// Response to `POST /recipes/{id}/star`.
///
/// The new count is not written back into any [`RecipeRecord`](crate::RecipeRecord)
/// the caller already holds; refetch the recipe to see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarResponse {
    pub message: String,
    pub star_count: u32,
}

/// Filters for `GET /search/complex`. Unset filters are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComplexSearch {
    pub query: Option<String>,
    pub ingredients: Vec<String>,
    pub excluded_ingredients: Vec<String>,
    pub diets: Vec<String>,
    pub allergies: Vec<String>,
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub recipe_type: Option<String>,
    pub max_prep_time: Option<u32>,
    pub min_servings: Option<u32>,
    pub max_servings: Option<u32>,
    pub max_calories: Option<f64>,
}

impl ComplexSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    pub fn excluded_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    pub fn diets<I, S>(mut self, diets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.diets = diets.into_iter().map(Into::into).collect();
        self
    }

    pub fn allergies<I, S>(mut self, allergies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allergies = allergies.into_iter().map(Into::into).collect();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn recipe_type(mut self, recipe_type: impl Into<String>) -> Self {
        self.recipe_type = Some(recipe_type.into());
        self
    }

    pub fn max_prep_time(mut self, minutes: u32) -> Self {
        self.max_prep_time = Some(minutes);
        self
    }

    pub fn servings_between(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_servings = min;
        self.max_servings = max;
        self
    }

    pub fn max_calories(mut self, calories: f64) -> Self {
        self.max_calories = Some(calories);
        self
    }

    /// Query parameters in wire order, skipping unset filters.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![];

        if let Some(q) = &self.query {
            params.push(("q", q.clone()));
        }
        push_list(&mut params, "ingredients", &self.ingredients);
        push_list(&mut params, "excludedIngredients", &self.excluded_ingredients);
        push_list(&mut params, "diets", &self.diets);
        push_list(&mut params, "allergies", &self.allergies);
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(cuisine) = &self.cuisine {
            params.push(("cuisine", cuisine.clone()));
        }
        if let Some(recipe_type) = &self.recipe_type {
            params.push(("type", recipe_type.clone()));
        }
        if let Some(minutes) = self.max_prep_time {
            params.push(("maxPrepTime", minutes.to_string()));
        }
        if let Some(min) = self.min_servings {
            params.push(("minServings", min.to_string()));
        }
        if let Some(max) = self.max_servings {
            params.push(("maxServings", max.to_string()));
        }
        if let Some(calories) = self.max_calories {
            params.push(("maxCalories", calories.to_string()));
        }

        params
    }
}

fn push_list(params: &mut Vec<(&'static str, String)>, name: &'static str, values: &[String]) {
    if !values.is_empty() {
        params.push((name, values.join(",")));
    }
}
