//! The command seam shared by every Stag bounded context.

use uuid::Uuid;

/// A request to change game state, traced end to end by its correlation id.
///
/// Handlers log [`Command::command_type`] alongside the id so one player
/// line can be followed from the listener through the action resolver.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Dotted `context.action` name, e.g. `engine.submit_command`.
    fn command_type(&self) -> &'static str;

    fn correlation_id(&self) -> Uuid;
}
