//! Favorites store.
//!
//! Ordered, deduplicated by [`ProductId`], mirrored to storage after every
//! mutation that changes the collection.

use crate::catalog::{Product, ProductId};
use crate::storage::FavoritesPersistence;

#[derive(Debug)]
pub struct FavoritesStore {
    items: Vec<Product>,
    persistence: FavoritesPersistence,
}

impl FavoritesStore {
    /// Start with an empty collection. Nothing is written until the first
    /// mutation.
    pub fn new(persistence: FavoritesPersistence) -> Self {
        Self {
            items: Vec::new(),
            persistence,
        }
    }

    /// Restore the collection saved by a previous session.
    ///
    /// Entries go through the same dedupe as [`FavoritesStore::add`], so a
    /// stored list with repeated ids collapses to its first occurrences.
    pub fn load(persistence: FavoritesPersistence) -> Self {
        let mut items: Vec<Product> = Vec::new();
        for product in persistence.load() {
            if !items.iter().any(|p| p.id == product.id) {
                items.push(product);
            }
        }
        tracing::debug!(count = items.len(), "Loaded favorites");
        Self { items, persistence }
    }

    /// Append a product unless one with the same id is already present.
    /// Returns `true` when the collection changed.
    pub fn add(&mut self, product: Product) -> bool {
        if self.is_favorite(product.id) {
            return false;
        }
        self.items.push(product);
        self.persist();
        true
    }

    /// Remove the product with this id. Returns `true` when the collection
    /// changed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p.id != id);
        if self.items.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Remove if present, add otherwise. Returns the new membership.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.remove(product.id) {
            false
        } else {
            self.add(product.clone())
        }
    }

    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    pub fn list(&self) -> &[Product] {
        &self.items
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.items.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&self) {
        // In-memory state stays authoritative even if this fails.
        self.persistence.save(&self.items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Rating;
    use crate::storage::{KeyValueStore, MemoryStore, StorageError, FAVORITES_KEY};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn product(id: u64) -> Product {
        Product {
            id: ProductId(id),
            title: format!("Product {id}"),
            price: 10.0,
            description: "Test".to_string(),
            category: "electronics".to_string(),
            image: String::new(),
            rating: Rating { rate: 4.0, count: 1 },
        }
    }

    /// Counts writes and can be told to fail them.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        writes: AtomicUsize,
        fail: bool,
    }

    impl KeyValueStore for CountingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(StorageError::Unavailable("disk full".to_string()));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    fn store_with(backend: Arc<CountingStore>) -> FavoritesStore {
        FavoritesStore::new(FavoritesPersistence::new(backend))
    }

    #[test]
    fn add_twice_keeps_one_entry() {
        let backend = Arc::new(CountingStore::default());
        let mut favorites = store_with(backend.clone());
        assert!(favorites.add(product(1)));
        assert!(!favorites.add(product(1)));
        assert_eq!(favorites.len(), 1);
        assert_eq!(backend.writes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut favorites = store_with(Arc::new(CountingStore::default()));
        favorites.add(product(3));
        favorites.add(product(1));
        favorites.add(product(2));
        let ids: Vec<u64> = favorites.list().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn remove_missing_is_noop_without_write() {
        let backend = Arc::new(CountingStore::default());
        let mut favorites = store_with(backend.clone());
        favorites.add(product(1));
        assert!(!favorites.remove(ProductId(99)));
        assert_eq!(favorites.len(), 1);
        assert_eq!(backend.writes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn is_favorite_tracks_add_and_remove() {
        let mut favorites = store_with(Arc::new(CountingStore::default()));
        assert!(!favorites.is_favorite(ProductId(1)));
        favorites.add(product(1));
        assert!(favorites.is_favorite(ProductId(1)));
        favorites.remove(ProductId(1));
        assert!(!favorites.is_favorite(ProductId(1)));
    }

    #[test]
    fn toggle_flips_membership() {
        let mut favorites = store_with(Arc::new(CountingStore::default()));
        assert!(favorites.toggle(&product(4)));
        assert!(favorites.is_favorite(ProductId(4)));
        assert!(!favorites.toggle(&product(4)));
        assert!(favorites.is_empty());
    }

    #[test]
    fn every_mutation_is_mirrored_to_storage() {
        let backend = Arc::new(CountingStore::default());
        let mut favorites = store_with(backend.clone());
        favorites.add(product(1));
        favorites.add(product(2));
        favorites.remove(ProductId(1));

        let restored = FavoritesStore::load(FavoritesPersistence::new(backend.clone()));
        assert_eq!(restored.list(), favorites.list());
        assert_eq!(backend.writes.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn write_failure_keeps_memory_state() {
        let backend = Arc::new(CountingStore {
            fail: true,
            ..CountingStore::default()
        });
        let mut favorites = store_with(backend.clone());
        assert!(favorites.add(product(1)));
        assert!(favorites.add(product(2)));
        assert!(favorites.remove(ProductId(1)));
        assert_eq!(favorites.list(), &[product(2)]);
        assert_eq!(backend.writes.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn load_collapses_duplicate_ids() {
        let raw = serde_json::to_string(&vec![product(1), product(2), product(1)]).unwrap();
        let backend = MemoryStore::with_entries([(FAVORITES_KEY, raw)]);
        let favorites = FavoritesStore::load(FavoritesPersistence::new(Arc::new(backend)));
        let ids: Vec<u64> = favorites.list().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
