//! Trigger-template module for the scaffolder backend.
//!
//! Provides the `trigger:template` action, which asks a scaffolder backend
//! to create a task for another template and reports the new task's ID and
//! URL as outputs.

mod actions;
mod error;
mod extension;

pub use actions::{
    ACTION_ID, DEFAULT_BACKEND_URL, TASKS_PATH, TemplateRefParts, TriggerTemplateAction,
    TriggeredTask,
};
pub use error::TriggerError;
pub use extension::{MODULE_ID, PLUGIN_ID, TriggerTemplateExtension};
