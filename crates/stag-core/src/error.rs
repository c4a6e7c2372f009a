//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A location was not found in the world.
    #[error("location not found: {0}")]
    LocationNotFound(String),

    /// An entity was not found where it was expected.
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    /// A player has never issued a command.
    #[error("player not found: {0}")]
    PlayerNotFound(String),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),
}
