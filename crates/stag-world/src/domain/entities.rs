//! Entities placed in locations or carried by players.

use serde::{Deserialize, Serialize};
use stag_core::text::names_match;
use uuid::Uuid;

/// Identity of one entity instance. Two entities may share a name but
/// never an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Allocates a fresh identity.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// What an entity is, which decides what players may do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Can be picked up, carried and dropped.
    Artefact,
    /// Fixed in place.
    Furniture,
    /// A non-player character; can be fought.
    Character,
}

impl EntityKind {
    /// Only artefacts can be carried.
    #[must_use]
    pub fn is_carryable(self) -> bool {
        match self {
            EntityKind::Artefact => true,
            EntityKind::Furniture | EntityKind::Character => false,
        }
    }
}

/// A single entity instance.
///
/// Not `Clone`: an instance lives in exactly one location or
/// one inventory. Use [`Entity::instantiate`] for a fresh copy.
#[derive(Debug, PartialEq, Eq)]
pub struct Entity {
    id: EntityId,
    name: String,
    description: String,
    kind: EntityKind,
}

impl Entity {
    /// Creates a new entity with a fresh identity.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            description: description.into(),
            kind,
        }
    }

    /// Creates a new artefact.
    #[must_use]
    pub fn artefact(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, description, EntityKind::Artefact)
    }

    /// Creates a new piece of furniture.
    #[must_use]
    pub fn furniture(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, description, EntityKind::Furniture)
    }

    /// Creates a new character.
    #[must_use]
    pub fn character(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, description, EntityKind::Character)
    }

    /// Returns a copy with the same name, description and kind but a new id.
    #[must_use]
    pub fn instantiate(&self) -> Self {
        Self::new(self.name.clone(), self.description.clone(), self.kind)
    }

    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Case-insensitive name comparison.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

/// Returns every entity in `entities` whose name matches `name`
/// case-insensitively. Callers use the length to detect ambiguity.
#[must_use]
pub fn find_matches_by_name<'a>(entities: &'a [Entity], name: &str) -> Vec<&'a Entity> {
    entities.iter().filter(|entity| entity.is_named(name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instantiate_preserves_fields_with_new_identity() {
        let log = Entity::artefact("log", "A heavy wooden log");

        let copy = log.instantiate();

        assert_ne!(copy.id(), log.id());
        assert_eq!(copy.name(), "log");
        assert_eq!(copy.description(), "A heavy wooden log");
        assert_eq!(copy.kind(), EntityKind::Artefact);
    }

    #[test]
    fn test_find_matches_by_name_returns_every_case_insensitive_match() {
        let entities = vec![
            Entity::furniture("Tree", "A big tree"),
            Entity::artefact("axe", "A razor sharp axe"),
            Entity::furniture("tree", "Another tree"),
        ];

        let matches = find_matches_by_name(&entities, "tree");

        assert_eq!(matches.len(), 2);
        assert!(find_matches_by_name(&entities, "log").is_empty());
    }

    #[test]
    fn test_only_artefacts_are_carryable() {
        assert!(EntityKind::Artefact.is_carryable());
        assert!(!EntityKind::Furniture.is_carryable());
        assert!(!EntityKind::Character.is_carryable());
    }
}
