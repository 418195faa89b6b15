//! Action implementations.

mod template_ref;
mod trigger_template;

pub use template_ref::TemplateRefParts;
pub use trigger_template::{
    ACTION_ID, DEFAULT_BACKEND_URL, TASKS_PATH, TriggerTemplateAction, TriggeredTask,
};
