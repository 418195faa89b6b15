//! Error types for the scaffolder protocol layer.

mod action;
mod extension;

pub use action::*;
pub use extension::*;
