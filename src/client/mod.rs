//! # Recipp HTTP Client
//!
//! This module provides the HTTP client for the Recipp API.
//!
//! ## Modules
//!
//! - [`client`] - HTTP client with one method per API endpoint
//! - [`types`] - Star response and complex search parameters
//!
//! ## Quick Start
//!
//! ```no_run
//! use recipp::client::RecippClient;
//! use recipp::SortOrder;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = RecippClient::new("http://localhost:3000".to_string());
//!
//! let mut recipes = client.search_recipes("Chicken").await?;
//! recipes.sort_by_preparation_time(SortOrder::Asc);
//!
//! for recipe in &recipes {
//!     println!("{:?} - {:?} minutes", recipe.title(), recipe.preparation_time());
//! }
//! # Ok(())
//! # }
//! ```

#[allow(clippy::module_inception)]
pub mod client;
pub mod types;

pub use client::RecippClient;
pub use types::*;
