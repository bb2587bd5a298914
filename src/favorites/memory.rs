use std::sync::Mutex;

use tokio::sync::broadcast;

use crate::catalog::Recipe;

use super::events::{FavoritesEvent, FavoritesNotifier};
use super::record::FavoriteRecord;
use super::store::Favorites;

/// [`Favorites`] implementation with no persistence.
///
/// Same uniqueness and ordering rules as the file-backed store, but state
/// lives and dies with the value. Meant for tests and previews where disk
/// state would only get in the way.
#[derive(Debug, Default)]
pub struct InMemoryFavorites {
    records: Mutex<Vec<FavoriteRecord>>,
    notifier: FavoritesNotifier,
}

impl InMemoryFavorites {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Favorites for InMemoryFavorites {
    fn list(&self) -> Vec<FavoriteRecord> {
        self.records.lock().unwrap().clone()
    }

    fn add(&self, recipe: &Recipe) -> bool {
        let mut records = self.records.lock().unwrap();
        if records.iter().any(|record| record.id() == recipe.id) {
            return false;
        }
        records.push(FavoriteRecord::capture(recipe.clone()));
        drop(records);
        self.notifier.emit(FavoritesEvent::Added {
            id: recipe.id.clone(),
        });
        true
    }

    fn remove(&self, id: &str) -> bool {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|record| record.id() != id);
        if records.len() == before {
            return false;
        }
        drop(records);
        self.notifier.emit(FavoritesEvent::Removed { id: id.to_owned() });
        true
    }

    fn is_favorite(&self, id: &str) -> bool {
        self.records
            .lock()
            .unwrap()
            .iter()
            .any(|record| record.id() == id)
    }

    fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    fn clear(&self) {
        let mut records = self.records.lock().unwrap();
        if records.is_empty() {
            return;
        }
        records.clear();
        drop(records);
        self.notifier.emit(FavoritesEvent::Cleared);
    }

    fn subscribe(&self) -> broadcast::Receiver<FavoritesEvent> {
        self.notifier.subscribe()
    }
}
