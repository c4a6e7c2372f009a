//! Query handlers for the World context.
//!
//! Read-only views over the world, suitable for serialization.

use serde::Serialize;
use stag_core::error::DomainError;

use crate::domain::aggregates::{Location, WorldModel};
use crate::domain::entities::{Entity, EntityKind};

/// Read-only view of an entity.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct EntityView {
    /// Display name.
    pub name: String,
    /// Authored description.
    pub description: String,
    /// Artefact, furniture or character.
    pub kind: EntityKind,
}

impl From<&Entity> for EntityView {
    fn from(entity: &Entity) -> Self {
        Self {
            name: entity.name().to_owned(),
            description: entity.description().to_owned(),
            kind: entity.kind(),
        }
    }
}

/// Read-only view of a location.
#[derive(Debug, Serialize)]
pub struct LocationView {
    /// Location name.
    pub name: String,
    /// Authored description.
    pub description: String,
    /// Outgoing path destinations.
    pub paths: Vec<String>,
    /// Entities currently present.
    pub entities: Vec<EntityView>,
}

impl From<&Location> for LocationView {
    fn from(location: &Location) -> Self {
        Self {
            name: location.name().to_owned(),
            description: location.description().to_owned(),
            paths: location.paths().to_vec(),
            entities: location.entities().iter().map(EntityView::from).collect(),
        }
    }
}

/// Retrieves a location by name.
///
/// # Errors
///
/// Returns `DomainError::LocationNotFound` if there is no such location.
pub fn get_location_by_name(world: &WorldModel, name: &str) -> Result<LocationView, DomainError> {
    world.get_location(name).map(LocationView::from)
}
