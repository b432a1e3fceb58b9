use std::sync::Arc;

use serde_json::Value;

use super::KeyValueStore;
use crate::catalog::Product;

/// Storage key holding the JSON array of favorited products.
pub const FAVORITES_KEY: &str = "favorites";

/// Reads and writes the favorites collection under [`FAVORITES_KEY`].
///
/// Both directions are best-effort: failures are logged and never reach
/// the caller.
#[derive(Clone)]
pub struct FavoritesPersistence {
    store: Arc<dyn KeyValueStore>,
}

impl FavoritesPersistence {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Serialize and write the collection. Returns whether the write landed.
    pub fn save(&self, favorites: &[Product]) -> bool {
        let json = match serde_json::to_string(favorites) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to serialize favorites");
                return false;
            }
        };
        match self.store.set(FAVORITES_KEY, &json) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to save favorites");
                false
            }
        }
    }

    /// Load the saved collection.
    ///
    /// A missing key, an unreadable store or content that is not a JSON
    /// array all yield an empty list. Entries are not checked against the
    /// current schema; ones that cannot be read as a product at all are
    /// skipped.
    pub fn load(&self) -> Vec<Product> {
        let raw = match self.store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read favorites");
                return Vec::new();
            }
        };

        let entries: Vec<Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(error = %err, "Saved favorites are malformed, starting empty");
                return Vec::new();
            }
        };

        entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<Product>(entry) {
                Ok(product) => Some(product),
                Err(err) => {
                    tracing::warn!(error = %err, "Skipping unreadable favorite entry");
                    None
                }
            })
            .collect()
    }
}

impl std::fmt::Debug for FavoritesPersistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesPersistence").finish_non_exhaustive()
    }
}
