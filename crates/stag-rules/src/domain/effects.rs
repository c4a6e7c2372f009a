//! Planned mutations of a resolved action.

use stag_world::domain::entities::{Entity, EntityId};

/// One mutation to apply once every check has passed.
#[derive(Debug)]
pub enum WorldEffect {
    /// Remove a carried entity from the acting player.
    TakeFromInventory {
        /// The instance to remove.
        entity: EntityId,
    },
    /// Remove an entity from a location.
    TakeFromLocation {
        /// Where the instance is.
        location: String,
        /// The instance to remove.
        entity: EntityId,
    },
    /// Place a new entity in a location.
    PlaceInLocation {
        /// Destination location.
        location: String,
        /// The new instance.
        entity: Entity,
    },
    /// Add a directed path.
    AddPath {
        /// Source location.
        from: String,
        /// Destination location.
        to: String,
    },
}
