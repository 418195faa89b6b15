//! Extension registry for managing loaded extensions.

use std::sync::Arc;

use scaffolder_protocols::error::ExtensionError;
use scaffolder_protocols::extension::{Extension, ExtensionManifest};

use super::base::{BaseRegistry, Registerable};

impl Registerable for dyn Extension {
    fn registry_id(&self) -> &str {
        &self.manifest().id
    }
}

/// Registry for managing extensions.
pub struct ExtensionRegistry {
    inner: BaseRegistry<dyn Extension>,
}

impl ExtensionRegistry {
    /// Create a new extension registry.
    pub fn new() -> Self {
        Self {
            inner: BaseRegistry::new(),
        }
    }

    /// Register an extension.
    pub fn register(&self, extension: Arc<dyn Extension>) -> Result<(), ExtensionError> {
        self.inner.register(extension)
    }

    /// Unregister an extension.
    pub fn unregister(&self, id: &str) -> Result<(), ExtensionError> {
        self.inner.unregister(id)
    }

    /// Get an extension by ID.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Extension>> {
        self.inner.get(id)
    }

    /// List all registered extensions.
    pub fn list(&self) -> Vec<ExtensionManifest> {
        self.inner.iter().map(|e| e.manifest().clone()).collect()
    }

    /// Check if an extension is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.inner.contains(id)
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use scaffolder_protocols::extension::ExtensionContext;
    use scaffolder_protocols::types::Version;

    struct MockExtension {
        manifest: ExtensionManifest,
    }

    impl MockExtension {
        fn new(id: &str) -> Self {
            Self {
                manifest: ExtensionManifest::new(id, "scaffolder", format!("Mock {}", id), Version::new(1, 0, 0))
                    .with_description("A mock extension"),
            }
        }
    }

    #[async_trait]
    impl Extension for MockExtension {
        fn manifest(&self) -> &ExtensionManifest {
            &self.manifest
        }

        async fn initialize(&mut self, _ctx: ExtensionContext) -> Result<(), ExtensionError> {
            Ok(())
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = ExtensionRegistry::new();
        assert!(registry.list().is_empty());
    }

    #[test]
    fn test_register_extension() {
        let registry = ExtensionRegistry::new();
        registry.register(Arc::new(MockExtension::new("test-ext"))).unwrap();
        assert_eq!(registry.list().len(), 1);
        assert!(registry.contains("test-ext"));
    }

    #[test]
    fn test_register_duplicate() {
        let registry = ExtensionRegistry::new();
        registry.register(Arc::new(MockExtension::new("test-ext"))).unwrap();
        assert!(registry.register(Arc::new(MockExtension::new("test-ext"))).is_err());
    }

    #[test]
    fn test_unregister_extension() {
        let registry = ExtensionRegistry::new();
        registry.register(Arc::new(MockExtension::new("test-ext"))).unwrap();
        registry.unregister("test-ext").unwrap();
        assert!(registry.list().is_empty());
        assert!(registry.unregister("test-ext").is_err());
    }

    #[test]
    fn test_get_extension() {
        let registry = ExtensionRegistry::new();
        registry.register(Arc::new(MockExtension::new("test-ext"))).unwrap();
        assert_eq!(registry.get("test-ext").unwrap().manifest().id, "test-ext");
        assert!(registry.get("nonexistent").is_none());
    }
}
