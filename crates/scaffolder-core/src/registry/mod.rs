//! Registries for extensions and actions.

mod action;
mod base;
mod extension;

pub use action::ActionRegistry;
pub use base::{BaseRegistry, Registerable};
pub use extension::ExtensionRegistry;
