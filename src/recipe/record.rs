//! Recipe payloads as returned by the Recipp API.
//!
//! [`RecipeRecord`] is the canonical shape for a recipe. Only `id` is
//! required; every other field may be missing from a payload and is exposed
//! as an `Option` by its accessor.
//!
//! ## Nutrition
//!
//! The API has served nutrition in two shapes over time:
//!
//! - flat: `{"calories": 500, "protein": "20g", ...}`
//! - enriched: `{"calories": {"name": "Calories", "amount": 500, "unit": "kcal", "percentageDailyNeeds": 25}, ...}`
//!
//! Both deserialize into [`Nutrient`], which always carries the enriched
//! fields. Flat values only populate `amount` and `unit`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single recipe. Read-only once deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    id: i64,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    image_path: Option<String>,
    #[serde(default)]
    prep_time: Option<f64>,
    #[serde(default)]
    serving_size: Option<f64>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    cuisine: Option<String>,
    #[serde(rename = "type", default)]
    recipe_type: Option<String>,
    #[serde(default)]
    steps: Option<Vec<Step>>,
    #[serde(alias = "intolerances", default)]
    allergies: Option<Vec<String>>,
    #[serde(default)]
    diets: Option<Vec<String>>,
    #[serde(default)]
    equipment: Option<Vec<String>>,
    #[serde(default)]
    ingredients: Option<Vec<Ingredient>>,
    #[serde(default)]
    nutrition: Option<Nutrition>,
    #[serde(default)]
    star_count: Option<u32>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl RecipeRecord {
    /// Builds a record from an already-parsed JSON payload.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Image path or URL.
    pub fn image(&self) -> Option<&str> {
        self.image_path.as_deref()
    }

    /// Preparation time in minutes.
    pub fn preparation_time(&self) -> Option<f64> {
        self.prep_time
    }

    /// Number of servings the recipe makes.
    pub fn servings(&self) -> Option<f64> {
        self.serving_size
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn cuisine(&self) -> Option<&str> {
        self.cuisine.as_deref()
    }

    pub fn recipe_type(&self) -> Option<&str> {
        self.recipe_type.as_deref()
    }

    pub fn steps(&self) -> Option<&[Step]> {
        self.steps.as_deref()
    }

    /// Allergens and intolerances. The API stores "none" as `[""]`, which is
    /// returned here unchanged.
    pub fn allergies(&self) -> Option<&[String]> {
        self.allergies.as_deref()
    }

    /// Diets the recipe is suitable for. Same placeholder caveat as
    /// [`allergies`](Self::allergies).
    pub fn diets(&self) -> Option<&[String]> {
        self.diets.as_deref()
    }

    pub fn equipment(&self) -> Option<&[String]> {
        self.equipment.as_deref()
    }

    pub fn ingredients(&self) -> Option<&[Ingredient]> {
        self.ingredients.as_deref()
    }

    pub fn nutrition(&self) -> Option<&Nutrition> {
        self.nutrition.as_ref()
    }

    pub fn star_count(&self) -> Option<u32> {
        self.star_count
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

/// A preparation step, either bare text or a numbered object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Text(String),
    Detailed(StepDetail),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDetail {
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(alias = "text", alias = "instruction", default)]
    pub step: Option<String>,
}

impl Step {
    pub fn text(&self) -> Option<&str> {
        match self {
            Step::Text(text) => Some(text),
            Step::Detailed(detail) => detail.step.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<Quantity>,
}

/// Ingredient quantity. Usually free text ("200g"), occasionally a bare number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(f64),
    Text(String),
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Number(n) => write!(f, "{}", n),
            Quantity::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default)]
    pub calories: Option<Nutrient>,
    #[serde(alias = "proteins", default)]
    pub protein: Option<Nutrient>,
    #[serde(alias = "fats", default)]
    pub fat: Option<Nutrient>,
    #[serde(default)]
    pub carbs: Option<Nutrient>,
}

impl Nutrition {
    /// Numeric calorie amount, if known.
    pub fn calories_amount(&self) -> Option<f64> {
        self.calories.as_ref().and_then(|c| c.amount)
    }
}

/// One nutrition value in the enriched shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "NutrientRepr")]
pub struct Nutrient {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub unit: Option<String>,
    pub percentage_daily_needs: Option<f64>,
}

/// Wire forms accepted for a [`Nutrient`].
#[derive(Deserialize)]
#[serde(untagged)]
enum NutrientRepr {
    #[serde(rename_all = "camelCase")]
    Detailed {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        amount: Option<f64>,
        #[serde(default)]
        unit: Option<String>,
        #[serde(default)]
        percentage_daily_needs: Option<f64>,
    },
    Number(f64),
    Text(String),
}

impl From<NutrientRepr> for Nutrient {
    fn from(repr: NutrientRepr) -> Self {
        match repr {
            NutrientRepr::Detailed {
                name,
                amount,
                unit,
                percentage_daily_needs,
            } => Nutrient {
                name,
                amount,
                unit,
                percentage_daily_needs,
            },
            NutrientRepr::Number(amount) => Nutrient {
                amount: Some(amount),
                ..Default::default()
            },
            NutrientRepr::Text(text) => {
                let (amount, unit) = split_amount(&text);
                Nutrient {
                    amount,
                    unit,
                    ..Default::default()
                }
            }
        }
    }
}

/// Splits `"20g"` / `"2.5 mg"` into its leading number and unit suffix.
fn split_amount(text: &str) -> (Option<f64>, Option<String>) {
    let text = text.trim();
    let end = text
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .unwrap_or(text.len());
    let (number, unit) = text.split_at(end);
    let unit = unit.trim();

    (
        number.parse().ok(),
        (!unit.is_empty()).then(|| unit.to_string()),
    )
}
