//! # Scaffolder Core
//!
//! Host side of the scaffolder backend.
//!
//! ## Components
//!
//! - [`Host`] - Composition root that loads extensions and invokes actions
//! - Registries for actions and extensions

pub mod host;
pub mod registry;

pub use host::Host;
pub use registry::{ActionRegistry, ExtensionRegistry};
