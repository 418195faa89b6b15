//! Extension protocol definitions.
//!
//! Extensions are backend modules the host initializes at startup. Each one
//! declares the capabilities it needs and receives handles to them through
//! [`ExtensionContext`].

mod context;
mod manifest;
mod traits;

pub use context::*;
pub use manifest::*;
pub use traits::*;
