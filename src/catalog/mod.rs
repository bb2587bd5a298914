//! Read-only client for the remote recipe catalog.
//!
//! Query surface only; the catalog's content is owned elsewhere and nothing
//! here writes to it. All operations go through [`CatalogClient`] and fail
//! with the single opaque [`FetchError`].

mod category;
mod client;
mod error;
mod recipe;

pub use category::{Area, Category};
pub use client::{CatalogClient, DEFAULT_BASE_URL};
pub use error::FetchError;
pub use recipe::{Ingredient, Recipe, INGREDIENT_SLOTS};
