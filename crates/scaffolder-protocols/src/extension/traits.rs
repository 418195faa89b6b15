//! Extension trait definition.

use async_trait::async_trait;
use std::sync::Arc;

use super::{ExtensionContext, ExtensionManifest};
use crate::action::Action;
use crate::error::ExtensionError;

/// Capability identifier of the actions registry.
pub const ACTIONS_REGISTRY: &str = "scaffolder.actions";

/// Core trait for all extensions.
///
/// The manifest describes the extension to the host; `initialize` and
/// `shutdown` are its lifecycle hooks.
#[async_trait]
pub trait Extension: Send + Sync + 'static {
    /// Returns the extension manifest.
    fn manifest(&self) -> &ExtensionManifest;

    /// Initialize the extension with the given context.
    async fn initialize(&mut self, ctx: ExtensionContext) -> Result<(), ExtensionError>;

    /// Shutdown the extension.
    async fn shutdown(&self) -> Result<(), ExtensionError> {
        Ok(())
    }
}

/// The actions registry as seen from extensions.
pub trait ActionRegistryAccess: Send + Sync {
    /// Add an action.
    fn add_action(&self, action: Arc<dyn Action>) -> Result<(), ExtensionError>;

    /// Remove an action.
    fn remove_action(&self, action_id: &str) -> Result<(), ExtensionError>;
}
