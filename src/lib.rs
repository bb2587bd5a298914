//! Recipe discovery for the Foodie Finder app: a read-only client for the
//! public recipe catalog and a durable store for the user's favorites.
//!
//! The two halves are deliberately independent. [`CatalogClient`] only ever
//! queries the remote catalog; [`FavoritesStore`] only ever touches one
//! local JSON file. A favorite carries a full copy of its recipe, so saved
//! recipes stay browsable when the catalog is unreachable.
//!
//! ```no_run
//! use foodie_finder::{CatalogClient, Favorites, FavoritesStore};
//!
//! # async fn demo() -> Result<(), foodie_finder::FetchError> {
//! let catalog = CatalogClient::new();
//! let favorites = FavoritesStore::new("/tmp/favorites.json");
//!
//! if let Some(recipe) = catalog.random_recipe().await? {
//!     if favorites.add(&recipe) {
//!         println!("Saved {}", recipe.name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod favorites;

pub use catalog::{Area, CatalogClient, Category, FetchError, Ingredient, Recipe};
pub use favorites::{
    FavoriteRecord, Favorites, FavoritesEvent, FavoritesStore, InMemoryFavorites,
};
