//! Sortable collections of recipes.
//!
//! Every sort is stable and works in place. Each `sort_by_*` method returns
//! the collection again so calls can be chained:
//!
//! ```
//! use recipp::{RecipeCollection, SortOrder};
//!
//! let mut recipes = RecipeCollection::default();
//! recipes
//!     .sort_by_star_count(SortOrder::Desc)
//!     .sort_by_preparation_time(SortOrder::Asc);
//! ```
//!
//! Records whose sort key is missing (for example a recipe without
//! nutrition data when sorting by calories) always end up after the records
//! that have one, in either order.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RecippError;
use crate::recipe::normalize::effective_count;
use crate::recipe::record::RecipeRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl From<&str> for SortOrder {
    /// `"desc"` selects descending order; any other value is ascending.
    fn from(value: &str) -> Self {
        if value == "desc" {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

impl FromStr for SortOrder {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortOrder::from(s))
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

/// Value a collection can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    ServingSize,
    PreparationTime,
    StarCount,
    IngredientsAmount,
    DietsAmount,
    AllergiesAmount,
    CaloriesAmount,
    StepsAmount,
}

impl SortKey {
    pub const ALL: [SortKey; 8] = [
        SortKey::ServingSize,
        SortKey::PreparationTime,
        SortKey::StarCount,
        SortKey::IngredientsAmount,
        SortKey::DietsAmount,
        SortKey::AllergiesAmount,
        SortKey::CaloriesAmount,
        SortKey::StepsAmount,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::ServingSize => "servingSize",
            SortKey::PreparationTime => "preparationTime",
            SortKey::StarCount => "starCount",
            SortKey::IngredientsAmount => "ingredientsAmount",
            SortKey::DietsAmount => "dietsAmount",
            SortKey::AllergiesAmount => "allergiesAmount",
            SortKey::CaloriesAmount => "caloriesAmount",
            SortKey::StepsAmount => "stepsAmount",
        }
    }

    /// Scalar this key sorts `recipe` by, or `None` when the field is missing.
    pub fn extract(&self, recipe: &RecipeRecord) -> Option<f64> {
        match self {
            SortKey::ServingSize => recipe.servings(),
            SortKey::PreparationTime => recipe.preparation_time(),
            SortKey::StarCount => recipe.star_count().map(f64::from),
            SortKey::IngredientsAmount => recipe.ingredients().map(|i| i.len() as f64),
            SortKey::DietsAmount => recipe.diets().map(|d| effective_count(d) as f64),
            SortKey::AllergiesAmount => recipe.allergies().map(|a| effective_count(a) as f64),
            SortKey::CaloriesAmount => recipe.nutrition().and_then(|n| n.calories_amount()),
            SortKey::StepsAmount => recipe.steps().map(|s| s.len() as f64),
        }
    }
}

impl FromStr for SortKey {
    type Err = RecippError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| RecippError::UnknownSortKey(s.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Orders two sort keys, placing missing keys last regardless of `order`.
fn compare_keys(a: Option<f64>, b: Option<f64>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            // JSON numbers are never NaN
            let comparison = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            match order {
                SortOrder::Asc => comparison,
                SortOrder::Desc => comparison.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// An ordered batch of recipes, typically one API response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeCollection {
    recipes: Vec<RecipeRecord>,
}

impl RecipeCollection {
    pub fn new(recipes: Vec<RecipeRecord>) -> Self {
        Self { recipes }
    }

    pub fn into_inner(self) -> Vec<RecipeRecord> {
        self.recipes
    }

    pub fn push(&mut self, recipe: RecipeRecord) {
        self.recipes.push(recipe);
    }

    pub fn sort_by(&mut self, key: SortKey, order: SortOrder) -> &mut Self {
        tracing::debug!("Sorting {} recipes by {} ({})", self.recipes.len(), key, order);
        self.recipes
            .sort_by(|a, b| compare_keys(key.extract(a), key.extract(b), order));
        self
    }

    pub fn sort_by_serving_size(&mut self, order: SortOrder) -> &mut Self {
        self.sort_by(SortKey::ServingSize, order)
    }

    pub fn sort_by_preparation_time(&mut self, order: SortOrder) -> &mut Self {
        self.sort_by(SortKey::PreparationTime, order)
    }

    pub fn sort_by_star_count(&mut self, order: SortOrder) -> &mut Self {
        self.sort_by(SortKey::StarCount, order)
    }

    pub fn sort_by_ingredients_amount(&mut self, order: SortOrder) -> &mut Self {
        self.sort_by(SortKey::IngredientsAmount, order)
    }

    /// Sorts by number of diets, counting a lone blank entry as none.
    pub fn sort_by_diets_amount(&mut self, order: SortOrder) -> &mut Self {
        self.sort_by(SortKey::DietsAmount, order)
    }

    /// Sorts by number of allergies, counting a lone blank entry as none.
    pub fn sort_by_allergies_amount(&mut self, order: SortOrder) -> &mut Self {
        self.sort_by(SortKey::AllergiesAmount, order)
    }

    pub fn sort_by_calories_amount(&mut self, order: SortOrder) -> &mut Self {
        self.sort_by(SortKey::CaloriesAmount, order)
    }

    pub fn sort_by_steps_amount(&mut self, order: SortOrder) -> &mut Self {
        self.sort_by(SortKey::StepsAmount, order)
    }
}

impl Deref for RecipeCollection {
    type Target = [RecipeRecord];

    fn deref(&self) -> &Self::Target {
        &self.recipes
    }
}

impl From<Vec<RecipeRecord>> for RecipeCollection {
    fn from(recipes: Vec<RecipeRecord>) -> Self {
        Self::new(recipes)
    }
}

impl FromIterator<RecipeRecord> for RecipeCollection {
    fn from_iter<I: IntoIterator<Item = RecipeRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for RecipeCollection {
    type Item = RecipeRecord;
    type IntoIter = std::vec::IntoIter<RecipeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecipeCollection {
    type Item = &'a RecipeRecord;
    type IntoIter = std::slice::Iter<'a, RecipeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}
