//! Durable favorites kept as one JSON blob on disk.
//!
//! The whole collection is a single array in a single file. Every read
//! decodes the full array; every mutation re-reads it, applies the change
//! in memory, and rewrites the file via an atomic rename. There is no
//! partial update and no merge: when two processes mutate concurrently the
//! last writer wins with whatever state it read, and the other side's
//! change is silently overwritten. That trade is deliberate; the
//! collection stays small and the format stays trivially inspectable.
//!
//! Unreadable or malformed state never takes the store down. A missing
//! file is an empty collection, a corrupt one is logged and treated as
//! empty, and the next successful mutation replaces it wholesale.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use log::warn;
use tempfile::NamedTempFile;
use tokio::sync::broadcast;

use crate::catalog::Recipe;

use super::events::{FavoritesEvent, FavoritesNotifier};
use super::record::FavoriteRecord;

const APP_DIR: &str = "foodie-finder";
const FAVORITES_FILE: &str = "favorites.json";

/// The favorites collection as application code sees it.
///
/// Implementations must keep recipe identifiers unique and preserve
/// insertion order. [`FavoritesStore`] is the durable implementation;
/// [`InMemoryFavorites`](super::InMemoryFavorites) backs tests and
/// previews with the same semantics minus the disk.
pub trait Favorites {
    /// Every saved record, oldest first.
    fn list(&self) -> Vec<FavoriteRecord>;

    /// Save a recipe. Returns `true` only when the recipe was newly
    /// recorded and persisted; `false` when it was already saved or the
    /// write failed.
    fn add(&self, recipe: &Recipe) -> bool;

    /// Drop a saved recipe by identifier. Returns `false` when nothing by
    /// that identifier was saved or the write failed.
    fn remove(&self, id: &str) -> bool;

    fn is_favorite(&self, id: &str) -> bool;

    fn count(&self) -> usize;

    /// Discard the whole collection.
    fn clear(&self);

    /// Receiver for change notifications; see [`FavoritesEvent`] for the
    /// delivery guarantees (there are few).
    fn subscribe(&self) -> broadcast::Receiver<FavoritesEvent>;
}

/// File-backed [`Favorites`] implementation.
///
/// Construction never touches the disk; the file and its parent directory
/// are created on the first successful `add`.
#[derive(Debug)]
pub struct FavoritesStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process. Other
    /// processes writing the same file are outside its reach.
    mutations: Mutex<()>,
    notifier: FavoritesNotifier,
}

impl FavoritesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mutations: Mutex::new(()),
            notifier: FavoritesNotifier::new(),
        }
    }

    /// Conventional location under the platform data directory, e.g.
    /// `~/.local/share/foodie-finder/favorites.json` on Linux. `None` when
    /// the platform reports no data directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join(APP_DIR).join(FAVORITES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode the current blob, degrading to empty on any failure.
    fn read_records(&self) -> Vec<FavoriteRecord> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                warn!("Failed to read favorites from {}: {err}", self.path.display());
                return Vec::new();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(records) => records,
            Err(err) => {
                warn!(
                    "Ignoring malformed favorites data in {}: {err}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    /// Replace the blob on disk. Writes to a sibling temp file and renames
    /// it into place so readers never observe a half-written array.
    fn write_records(&self, records: &[FavoriteRecord]) -> Result<()> {
        let parent = self.path.parent().ok_or_else(|| {
            anyhow!("favorites path {} has no parent directory", self.path.display())
        })?;
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;

        let json = serde_json::to_string_pretty(records).context("Failed to encode favorites")?;
        let mut temp = NamedTempFile::new_in(parent)
            .with_context(|| format!("Failed to create temporary file in {}", parent.display()))?;
        temp.write_all(json.as_bytes())
            .context("Failed to write favorites")?;
        temp.persist(&self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }
}

impl Favorites for FavoritesStore {
    fn list(&self) -> Vec<FavoriteRecord> {
        self.read_records()
    }

    fn add(&self, recipe: &Recipe) -> bool {
        let _guard = self.mutations.lock().unwrap();
        let mut records = self.read_records();
        if records.iter().any(|record| record.id() == recipe.id) {
            return false;
        }
        records.push(FavoriteRecord::capture(recipe.clone()));
        match self.write_records(&records) {
            Ok(()) => {
                self.notifier.emit(FavoritesEvent::Added {
                    id: recipe.id.clone(),
                });
                true
            }
            Err(err) => {
                warn!("Failed to save favorites: {err:#}");
                false
            }
        }
    }

    fn remove(&self, id: &str) -> bool {
        let _guard = self.mutations.lock().unwrap();
        let mut records = self.read_records();
        let before = records.len();
        records.retain(|record| record.id() != id);
        if records.len() == before {
            return false;
        }
        match self.write_records(&records) {
            Ok(()) => {
                self.notifier.emit(FavoritesEvent::Removed { id: id.to_owned() });
                true
            }
            Err(err) => {
                warn!("Failed to save favorites: {err:#}");
                false
            }
        }
    }

    fn is_favorite(&self, id: &str) -> bool {
        self.read_records().iter().any(|record| record.id() == id)
    }

    fn count(&self) -> usize {
        self.read_records().len()
    }

    fn clear(&self) {
        let _guard = self.mutations.lock().unwrap();
        match fs::remove_file(&self.path) {
            Ok(()) => self.notifier.emit(FavoritesEvent::Cleared),
            // Nothing stored means nothing changed, so no event either.
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => {
                warn!("Failed to clear favorites at {}: {err}", self.path.display());
            }
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<FavoritesEvent> {
        self.notifier.subscribe()
    }
}
