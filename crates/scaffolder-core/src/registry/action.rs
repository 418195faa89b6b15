//! Action registry for managing available actions.

use std::sync::Arc;

use scaffolder_protocols::action::{Action, ActionDefinition};
use scaffolder_protocols::error::ExtensionError;
use scaffolder_protocols::extension::ActionRegistryAccess;

use super::base::{BaseRegistry, Registerable};

impl Registerable for dyn Action {
    fn registry_id(&self) -> &str {
        &self.definition().id
    }
}

/// Registry for managing actions.
pub struct ActionRegistry {
    inner: BaseRegistry<dyn Action>,
}

impl ActionRegistry {
    /// Create a new action registry.
    pub fn new() -> Self {
        Self {
            inner: BaseRegistry::new(),
        }
    }

    /// Register an action.
    pub fn register(&self, action: Arc<dyn Action>) -> Result<(), ExtensionError> {
        self.inner.register(action)
    }

    /// Unregister an action.
    pub fn unregister(&self, id: &str) -> Result<(), ExtensionError> {
        self.inner.unregister(id)
    }

    /// Get an action by ID.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Action>> {
        self.inner.get(id)
    }

    /// List all action definitions, ordered by ID.
    pub fn list(&self) -> Vec<ActionDefinition> {
        let mut definitions: Vec<_> = self.inner.iter().map(|a| a.definition().clone()).collect();
        definitions.sort_by(|a, b| a.id.cmp(&b.id));
        definitions
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionRegistryAccess for ActionRegistry {
    fn add_action(&self, action: Arc<dyn Action>) -> Result<(), ExtensionError> {
        self.register(action)
    }

    fn remove_action(&self, action_id: &str) -> Result<(), ExtensionError> {
        self.unregister(action_id)
    }
}
