//! Recipe data and sorting.
//!
//! - [`record`] - the [`RecipeRecord`] payload type and its nested values
//! - [`collection`] - [`RecipeCollection`] and the [`SortKey`]/[`SortOrder`] it sorts by
//! - [`normalize`] - the blank-placeholder rule for diet and allergy lists

pub mod collection;
pub mod normalize;
pub mod record;

pub use collection::{RecipeCollection, SortKey, SortOrder};
pub use normalize::effective_count;
pub use record::{Ingredient, Nutrient, Nutrition, Quantity, RecipeRecord, Step, StepDetail};
