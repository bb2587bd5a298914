//! The user's saved recipes.
//!
//! Everything here revolves around one small collection with two hard
//! rules: a recipe appears at most once, and records keep the order they
//! were added in. The [`Favorites`] trait is the seam application code
//! depends on; [`FavoritesStore`] persists the collection as a single JSON
//! file and [`InMemoryFavorites`] drops persistence for tests.

mod events;
mod memory;
mod record;
mod store;

pub use events::FavoritesEvent;
pub use memory::InMemoryFavorites;
pub use record::FavoriteRecord;
pub use store::{Favorites, FavoritesStore};
