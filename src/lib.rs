//! # Recipp Client Library
//!
//! Client for the Recipp recipe API. It consists of two main components:
//!
//! ## Recipe Module
//!
//! The [`recipe`] module holds the typed [`RecipeRecord`] payload and the
//! [`RecipeCollection`] returned by list and search endpoints, with stable
//! ascending/descending sorts by serving size, preparation time, star count,
//! ingredient/diet/allergy/step counts and calories.
//!
//! ## Client Module
//!
//! The [`client`] module issues the HTTP calls and decodes the responses.
//!
//! ## Quick Start
//!
//! ```no_run
//! use recipp::{RecippClient, SortOrder};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = RecippClient::new("http://localhost:3000".to_string());
//!
//! let mut recipes = client.get_all_recipes().await?;
//! recipes.sort_by_diets_amount(SortOrder::Desc);
//!
//! let starred = client.star_recipe(4).await?;
//! println!("{} ({} stars)", starred.message, starred.star_count);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod recipe;

pub use client::{ComplexSearch, RecippClient, StarResponse};
pub use config::ClientConfig;
pub use error::{RecippError, Result};
pub use recipe::{effective_count, RecipeCollection, RecipeRecord, SortKey, SortOrder};
