//! Commands for the Custom Action Resolution context.

use stag_core::command::Command;
use uuid::Uuid;

/// Command to perform whatever custom action the text asks for.
#[derive(Debug, Clone)]
pub struct PerformAction {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Normalised command text, without the player prefix.
    pub text: String,
}

impl Command for PerformAction {
    fn command_type(&self) -> &'static str {
        "rules.perform_action"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
