//! Common types used across the scaffolder backend.

mod common;

pub use common::*;
