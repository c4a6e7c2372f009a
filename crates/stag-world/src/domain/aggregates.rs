//! Aggregate roots for the World context.

use std::collections::HashMap;

use stag_core::error::DomainError;
use stag_core::text::names_match;

use super::actions::CustomAction;
use super::entities::{Entity, EntityId, find_matches_by_name};

/// Location searched last when looking for a prototype of a produced entity.
pub const STOREROOM: &str = "storeroom";

/// A node of the location graph.
#[derive(Debug)]
pub struct Location {
    name: String,
    description: String,
    /// Destination names of outgoing paths, in authoring order.
    paths: Vec<String>,
    /// Entities present, in arrival order.
    entities: Vec<Entity>,
}

impl Location {
    /// Creates an empty location.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            paths: Vec::new(),
            entities: Vec::new(),
        }
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
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Returns the authored destination name if a path to `destination` exists.
    #[must_use]
    pub fn path_to(&self, destination: &str) -> Option<&str> {
        self.paths
            .iter()
            .find(|path| names_match(path, destination))
            .map(String::as_str)
    }

    /// Adds a directed path. Returns `false` if it already existed.
    pub fn add_path(&mut self, destination: impl Into<String>) -> bool {
        let destination = destination.into();
        if self.path_to(&destination).is_some() {
            return false;
        }
        self.paths.push(destination);
        true
    }

    /// Places an entity here.
    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Removes one specific entity instance.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EntityNotFound` if the instance is not here.
    pub fn remove_entity_instance(&mut self, id: EntityId) -> Result<Entity, DomainError> {
        let index = self
            .entities
            .iter()
            .position(|entity| entity.id() == id)
            .ok_or_else(|| {
                DomainError::EntityNotFound(format!("{id:?} in location {}", self.name))
            })?;
        Ok(self.entities.remove(index))
    }

    /// Every entity here whose name matches case-insensitively.
    #[must_use]
    pub fn find_matches_by_name(&self, name: &str) -> Vec<&Entity> {
        find_matches_by_name(&self.entities, name)
    }
}

/// The shared world: location graph plus custom-action catalog.
#[derive(Debug, Default)]
pub struct WorldModel {
    /// Locations in authoring order.
    locations: Vec<Location>,
    /// Lowercased location name to index in `locations`.
    index: HashMap<String, usize>,
    actions: Vec<CustomAction>,
}

impl WorldModel {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a location.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if a location with the same name
    /// (case-insensitively) already exists.
    pub fn add_location(&mut self, location: Location) -> Result<(), DomainError> {
        let key = location.name().to_lowercase();
        if self.index.contains_key(&key) {
            return Err(DomainError::Validation(format!(
                "duplicate location: {}",
                location.name()
            )));
        }
        self.index.insert(key, self.locations.len());
        self.locations.push(location);
        Ok(())
    }

    /// Adds a custom action to the catalog.
    pub fn add_action(&mut self, action: CustomAction) {
        self.actions.push(action);
    }

    /// Locations in authoring order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    #[must_use]
    pub fn actions(&self) -> &[CustomAction] {
        &self.actions
    }

    /// True if a location with this name exists.
    #[must_use]
    pub fn has_location(&self, name: &str) -> bool {
        self.index.contains_key(&name.to_lowercase())
    }

    /// Looks up a location by name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::LocationNotFound` if there is no such location.
    pub fn get_location(&self, name: &str) -> Result<&Location, DomainError> {
        self.index
            .get(&name.to_lowercase())
            .map(|&i| &self.locations[i])
            .ok_or_else(|| DomainError::LocationNotFound(name.to_owned()))
    }

    /// Mutable variant of [`WorldModel::get_location`].
    ///
    /// # Errors
    ///
    /// Returns `DomainError::LocationNotFound` if there is no such location.
    pub fn get_location_mut(&mut self, name: &str) -> Result<&mut Location, DomainError> {
        match self.index.get(&name.to_lowercase()) {
            Some(&i) => Ok(&mut self.locations[i]),
            None => Err(DomainError::LocationNotFound(name.to_owned())),
        }
    }

    /// Finds a prototype for `name` and returns a fresh instance of it.
    ///
    /// Locations are searched in authoring order with the storeroom last.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EntityNotFound` if no location holds an entity
    /// with that name.
    pub fn find_entity_template(&self, name: &str) -> Result<Entity, DomainError> {
        let (storerooms, others): (Vec<&Location>, Vec<&Location>) = self
            .locations
            .iter()
            .partition(|location| names_match(location.name(), STOREROOM));

        others
            .into_iter()
            .chain(storerooms)
            .flat_map(Location::entities)
            .find(|entity| entity.is_named(name))
            .map(Entity::instantiate)
            .ok_or_else(|| DomainError::EntityNotFound(name.to_owned()))
    }

    /// Adds a directed path; a no-op if it already exists.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::LocationNotFound` if `source` is unknown.
    pub fn add_path(&mut self, source: &str, destination: &str) -> Result<bool, DomainError> {
        let added = self.get_location_mut(source)?.add_path(destination);
        if added {
            tracing::debug!(source, destination, "path added");
        }
        Ok(added)
    }

    /// Removes one specific entity instance from a location.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::LocationNotFound` or `DomainError::EntityNotFound`.
    pub fn remove_entity_instance(
        &mut self,
        location: &str,
        id: EntityId,
    ) -> Result<Entity, DomainError> {
        self.get_location_mut(location)?.remove_entity_instance(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_room_world() -> WorldModel {
        let mut world = WorldModel::new();
        let mut cabin = Location::new("cabin", "A log cabin in the woods");
        cabin.add_path("forest");
        cabin.add_entity(Entity::artefact("axe", "A razor sharp axe"));
        let mut forest = Location::new("forest", "A dark forest");
        forest.add_entity(Entity::furniture("tree", "A big tree"));
        world.add_location(cabin).unwrap();
        world.add_location(forest).unwrap();
        world
    }

    #[test]
    fn test_get_location_is_case_insensitive() {
        let world = two_room_world();

        assert_eq!(world.get_location("Cabin").unwrap().name(), "cabin");
    }

    #[test]
    fn test_get_location_returns_not_found_for_unknown_name() {
        let world = two_room_world();

        let result = world.get_location("cave");

        assert_eq!(
            result.unwrap_err(),
            DomainError::LocationNotFound("cave".to_owned())
        );
    }

    #[test]
    fn test_add_location_rejects_duplicate_names() {
        let mut world = two_room_world();

        let result = world.add_location(Location::new("FOREST", "again"));

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_add_path_is_idempotent() {
        let mut world = two_room_world();

        assert!(world.add_path("forest", "cabin").unwrap());
        assert!(!world.add_path("forest", "cabin").unwrap());

        let forest = world.get_location("forest").unwrap();
        assert_eq!(forest.paths(), ["cabin".to_owned()]);
    }

    #[test]
    fn test_add_path_from_unknown_source_fails() {
        let mut world = two_room_world();

        assert!(world.add_path("cellar", "cave").is_err());
    }

    #[test]
    fn test_find_entity_template_returns_fresh_instance() {
        let world = two_room_world();
        let original = world.get_location("forest").unwrap().entities()[0].id();

        let tree = world.find_entity_template("TREE").unwrap();

        assert_ne!(tree.id(), original);
        assert_eq!(tree.description(), "A big tree");
        assert_eq!(world.get_location("forest").unwrap().entities().len(), 1);
    }

    #[test]
    fn test_find_entity_template_prefers_locations_over_storeroom() {
        let mut world = WorldModel::new();
        let mut storeroom = Location::new("storeroom", "Storage for any entities not placed");
        storeroom.add_entity(Entity::artefact("log", "A log from the store"));
        let mut forest = Location::new("forest", "A dark forest");
        forest.add_entity(Entity::artefact("log", "A log on the ground"));
        world.add_location(storeroom).unwrap();
        world.add_location(forest).unwrap();

        let log = world.find_entity_template("log").unwrap();

        assert_eq!(log.description(), "A log on the ground");
    }

    #[test]
    fn test_remove_entity_instance_removes_only_that_instance() {
        let mut world = two_room_world();
        world
            .get_location_mut("forest")
            .unwrap()
            .add_entity(Entity::furniture("tree", "A second tree"));
        let second = world.get_location("forest").unwrap().entities()[1].id();

        let removed = world.remove_entity_instance("forest", second).unwrap();

        assert_eq!(removed.description(), "A second tree");
        let forest = world.get_location("forest").unwrap();
        assert_eq!(forest.find_matches_by_name("tree").len(), 1);
        assert!(matches!(
            world.remove_entity_instance("forest", second),
            Err(DomainError::EntityNotFound(_))
        ));
    }
}
