//! Action protocol definitions.
//!
//! Actions are the steps a scaffolder task executes.

mod context;
mod definition;
mod traits;

pub use context::*;
pub use definition::*;
pub use traits::*;
