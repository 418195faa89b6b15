//! Errors raised while triggering a template.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriggerError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The scaffolder backend answered with a non-2xx status.
    #[error("Failed to trigger template: {status} {reason} - {body}")]
    Rejected {
        status: u16,
        reason: String,
        body: String,
    },

    /// A 2xx response whose body is not a task with a string `id`.
    #[error("Invalid task response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}
