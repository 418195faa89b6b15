//! Base registry trait and implementation.
//!
//! Shared by `ActionRegistry` and `ExtensionRegistry`.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;

use scaffolder_protocols::error::ExtensionError;

/// Trait for items that can be stored in a registry.
pub trait Registerable: Send + Sync {
    /// Returns the unique identifier for this item.
    fn registry_id(&self) -> &str;
}

/// Generic registry for managing items by ID.
///
/// - Thread-safe storage using DashMap
/// - Register/unregister operations with duplicate checking
/// - Get by ID
/// - List all items
pub struct BaseRegistry<T: ?Sized + Registerable> {
    items: DashMap<String, Arc<T>>,
}

impl<T: ?Sized + Registerable> BaseRegistry<T> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
        }
    }

    /// Register an item.
    ///
    /// Returns an error if an item with the same ID is already registered.
    pub fn register(&self, item: Arc<T>) -> Result<(), ExtensionError> {
        let id = item.registry_id().to_string();

        match self.items.entry(id) {
            Entry::Occupied(entry) => {
                Err(ExtensionError::AlreadyRegistered(entry.key().clone()))
            }
            Entry::Vacant(entry) => {
                entry.insert(item);
                Ok(())
            }
        }
    }

    /// Unregister an item by ID.
    ///
    /// Returns an error if no item with the given ID exists.
    pub fn unregister(&self, id: &str) -> Result<(), ExtensionError> {
        self.items
            .remove(id)
            .ok_or_else(|| ExtensionError::NotFound(id.to_string()))?;
        Ok(())
    }

    /// Get an item by ID.
    pub fn get(&self, id: &str) -> Option<Arc<T>> {
        self.items.get(id).map(|item| item.clone())
    }

    /// Check if an item with the given ID is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// List all registered item IDs.
    pub fn list_ids(&self) -> Vec<String> {
        self.items.iter().map(|item| item.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over all items.
    pub fn iter(&self) -> impl Iterator<Item = Arc<T>> + '_ {
        self.items.iter().map(|entry| entry.value().clone())
    }
}

impl<T: ?Sized + Registerable> Default for BaseRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestItem {
        id: String,
    }

    impl TestItem {
        fn new(id: &str) -> Self {
            Self { id: id.to_string() }
        }
    }

    impl Registerable for TestItem {
        fn registry_id(&self) -> &str {
            &self.id
        }
    }

    #[test]
    fn test_base_registry_new() {
        let registry: BaseRegistry<TestItem> = BaseRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_register() {
        let registry: BaseRegistry<TestItem> = BaseRegistry::new();
        registry.register(Arc::new(TestItem::new("test-item"))).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_register_duplicate() {
        let registry: BaseRegistry<TestItem> = BaseRegistry::new();
        registry.register(Arc::new(TestItem::new("test-item"))).unwrap();
        let result = registry.register(Arc::new(TestItem::new("test-item")));
        assert!(matches!(result, Err(ExtensionError::AlreadyRegistered(id)) if id == "test-item"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister() {
        let registry: BaseRegistry<TestItem> = BaseRegistry::new();
        registry.register(Arc::new(TestItem::new("test-item"))).unwrap();
        registry.unregister("test-item").unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unregister_nonexistent() {
        let registry: BaseRegistry<TestItem> = BaseRegistry::new();
        let result = registry.unregister("nonexistent");
        assert!(matches!(result, Err(ExtensionError::NotFound(_))));
    }

    #[test]
    fn test_get_and_contains() {
        let registry: BaseRegistry<TestItem> = BaseRegistry::new();
        assert!(!registry.contains("test-item"));
        assert!(registry.get("test-item").is_none());

        registry.register(Arc::new(TestItem::new("test-item"))).unwrap();
        assert!(registry.contains("test-item"));
        assert_eq!(registry.get("test-item").unwrap().registry_id(), "test-item");
    }

    #[test]
    fn test_list_ids_and_iter() {
        let registry: BaseRegistry<TestItem> = BaseRegistry::new();
        registry.register(Arc::new(TestItem::new("item1"))).unwrap();
        registry.register(Arc::new(TestItem::new("item2"))).unwrap();

        let ids = registry.list_ids();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&"item1".to_string()));
        assert!(ids.contains(&"item2".to_string()));
        assert_eq!(registry.iter().count(), 2);
    }
}
