//! Why a custom action was not performed.
//!
//! The `Display` text of each variant is the narration shown to the player.

use stag_core::error::DomainError;
use thiserror::Error;

/// A custom action that was refused. A refused action leaves the world and
/// every player untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    /// No trigger matched.
    #[error("I don't understand your command.")]
    Unrecognised,

    /// Several actions matched and subject mentions did not narrow them to one.
    #[error("Your command is ambiguous. Please be more specific.")]
    AmbiguousAction,

    /// A required entity is neither carried nor at the location.
    #[error("You're missing something required to perform this action.")]
    MissingEntity {
        /// The name that could not be found.
        name: String,
    },

    /// A required entity matches more than one instance.
    #[error("Your command is ambiguous. Which {name} do you mean?")]
    AmbiguousEntity {
        /// The name with several matches.
        name: String,
    },

    /// The command names an available entity the action does not use.
    #[error("Invalid command: contains unnecessary entities.")]
    ExtraneousEntity {
        /// The unexpected entity name.
        name: String,
    },

    /// World state contradicts an invariant; not caused by the player.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
