//! # Scaffolder Protocols
//!
//! Protocol definitions (traits) for the scaffolder backend.
//! Contains only interface definitions - no implementations.
//!
//! ## Core Traits
//!
//! - [`Extension`] - Base trait for backend modules that contribute actions
//! - [`Action`] - Trait for scaffolder action implementations
//! - [`ActionRegistryAccess`] - The "actions registry" capability handed to extensions

pub mod action;
pub mod error;
pub mod extension;
pub mod types;

// Re-export core traits
pub use action::{Action, ActionContext, ActionDefinition, ActionOutputs};
pub use error::{ActionError, ExtensionError};
pub use extension::{ActionRegistryAccess, Extension, ExtensionContext, ExtensionManifest};
pub use types::*;
