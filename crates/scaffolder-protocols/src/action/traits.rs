//! Action trait definition.

use async_trait::async_trait;

use super::{ActionContext, ActionDefinition};
use crate::error::ActionError;

/// Core trait for scaffolder actions.
///
/// The host validates `ctx.input` against the definition's input schema
/// before calling [`Action::handle`]. Outputs are emitted through
/// [`ActionContext::output`]; an `Err` marks the enclosing task step failed.
#[async_trait]
pub trait Action: Send + Sync {
    /// Returns the action definition.
    fn definition(&self) -> &ActionDefinition;

    /// Run the action for one task step.
    async fn handle(&self, ctx: &ActionContext) -> Result<(), ActionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoAction {
        definition: ActionDefinition,
    }

    impl EchoAction {
        fn new() -> Self {
            Self {
                definition: ActionDefinition::new("debug:echo", "Echo input back as output"),
            }
        }
    }

    #[async_trait]
    impl Action for EchoAction {
        fn definition(&self) -> &ActionDefinition {
            &self.definition
        }

        async fn handle(&self, ctx: &ActionContext) -> Result<(), ActionError> {
            let message = ctx
                .input
                .get("message")
                .cloned()
                .ok_or_else(|| ActionError::InvalidInput("message is required".to_string()))?;
            ctx.output("message", message).map_err(ActionError::execution)?;
            Ok(())
        }
    }

    #[test]
    fn test_action_definition() {
        let action = EchoAction::new();
        assert_eq!(action.definition().id, "debug:echo");
    }

    #[tokio::test]
    async fn test_action_handle_emits_output() {
        let action = EchoAction::new();
        let ctx = ActionContext::new("task-1", "step-1", serde_json::json!({"message": "hi"}));
        action.handle(&ctx).await.unwrap();
        assert_eq!(ctx.outputs().get("message"), Some(&serde_json::json!("hi")));
    }

    #[tokio::test]
    async fn test_action_handle_error_leaves_no_output() {
        let action = EchoAction::new();
        let ctx = ActionContext::new("task-1", "step-1", serde_json::json!({}));
        let result = action.handle(&ctx).await;
        assert!(matches!(result, Err(ActionError::InvalidInput(_))));
        assert!(ctx.outputs().is_empty());
    }
}
