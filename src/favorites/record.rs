use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Recipe;

/// A saved recipe plus the moment it was saved.
///
/// On disk the recipe's wire keys and `addedAt` sit side by side in one
/// object, which keeps the stored shape compatible with records written by
/// earlier versions of the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    #[serde(flatten)]
    pub recipe: Recipe,
    #[serde(rename = "addedAt")]
    pub added_at: DateTime<Utc>,
}

impl FavoriteRecord {
    /// Stamp a recipe with the current time.
    pub fn capture(recipe: Recipe) -> Self {
        Self {
            recipe,
            added_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.recipe.id
    }
}
