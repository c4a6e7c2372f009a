//! Serialized world definitions and their validation.

use std::collections::HashSet;

use serde::Deserialize;
use stag_world::domain::actions::{CustomAction, Production};
use stag_world::domain::aggregates::{Location, WorldModel};
use stag_world::domain::entities::{Entity, EntityKind};
use stag_world::domain::source::WorldSeed;

use crate::error::ContentError;

/// Top-level world file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorldDefinition {
    /// Spawn point; defaults to the first location.
    #[serde(default)]
    pub start: Option<String>,
    /// Locations in authoring order.
    pub locations: Vec<LocationDefinition>,
    /// Directed paths between locations.
    #[serde(default)]
    pub paths: Vec<PathDefinition>,
    /// Custom-action catalog.
    #[serde(default)]
    pub actions: Vec<ActionDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub artefacts: Vec<EntityDefinition>,
    #[serde(default)]
    pub furniture: Vec<EntityDefinition>,
    #[serde(default)]
    pub characters: Vec<EntityDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathDefinition {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionDefinition {
    pub triggers: Vec<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub consumed: Vec<String>,
    #[serde(default)]
    pub produced: Vec<String>,
    pub narration: String,
}

impl WorldDefinition {
    /// Validates the definition and builds the world.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Invalid` describing the first problem found:
    /// no locations, duplicate or blank names, paths or produced path specs
    /// naming unknown locations, an unknown start, or an action without a
    /// trigger or narration.
    pub fn into_seed(self) -> Result<WorldSeed, ContentError> {
        self.validate()?;

        let start_location = match &self.start {
            Some(start) => start.trim().to_owned(),
            None => self.locations[0].name.trim().to_owned(),
        };

        let mut world = WorldModel::new();
        for definition in self.locations {
            world.add_location(definition.into_location())?;
        }
        for path in &self.paths {
            world.add_path(path.from.trim(), path.to.trim())?;
        }
        for action in self.actions {
            world.add_action(action.into_action());
        }

        tracing::debug!(
            locations = world.locations().count(),
            actions = world.actions().len(),
            start_location = %start_location,
            "world definition built"
        );
        Ok(WorldSeed {
            world,
            start_location,
        })
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.locations.is_empty() {
            return Err(invalid("a world needs at least one location"));
        }

        let mut known = HashSet::new();
        for location in &self.locations {
            let key = location.name.trim().to_lowercase();
            if key.is_empty() {
                return Err(invalid("location with blank name"));
            }
            if !known.insert(key) {
                return Err(invalid(format!("duplicate location: {}", location.name)));
            }
            if location.entities().any(|e| e.name.trim().is_empty()) {
                return Err(invalid(format!("entity with blank name in {}", location.name)));
            }
        }
        let require_known = |name: &str, context: &str| {
            if known.contains(&name.trim().to_lowercase()) {
                Ok(())
            } else {
                Err(invalid(format!("{context} names unknown location: {name}")))
            }
        };

        if let Some(start) = &self.start {
            require_known(start, "start")?;
        }
        for path in &self.paths {
            require_known(&path.from, "path")?;
            require_known(&path.to, "path")?;
        }

        for (index, action) in self.actions.iter().enumerate() {
            if !action.triggers.iter().any(|t| !t.trim().is_empty()) {
                return Err(invalid(format!("action {index} has no trigger")));
            }
            if action.narration.trim().is_empty() {
                return Err(invalid(format!("action {index} has no narration")));
            }
            for production in action.produced.iter().map(|p| Production::parse(p)) {
                if let Production::Path { from, to } = production {
                    require_known(&from, "produced path")?;
                    require_known(&to, "produced path")?;
                }
            }
        }

        Ok(())
    }
}

impl LocationDefinition {
    fn entities(&self) -> impl Iterator<Item = &EntityDefinition> {
        self.artefacts
            .iter()
            .chain(&self.furniture)
            .chain(&self.characters)
    }

    fn into_location(self) -> Location {
        let mut location = Location::new(self.name.trim(), self.description);
        let groups = [
            (self.artefacts, EntityKind::Artefact),
            (self.furniture, EntityKind::Furniture),
            (self.characters, EntityKind::Character),
        ];
        for (definitions, kind) in groups {
            for definition in definitions {
                let entity = Entity::new(definition.name.trim(), definition.description, kind);
                location.add_entity(entity);
            }
        }
        location
    }
}

impl ActionDefinition {
    fn into_action(self) -> CustomAction {
        let clean = |items: Vec<String>| -> Vec<String> {
            items
                .into_iter()
                .map(|item| item.trim().to_owned())
                .filter(|item| !item.is_empty())
                .collect()
        };
        CustomAction {
            triggers: clean(self.triggers),
            subjects: clean(self.subjects),
            consumed: clean(self.consumed),
            produced: clean(self.produced)
                .iter()
                .map(|spec| Production::parse(spec))
                .collect(),
            narration: self.narration.trim().to_owned(),
        }
    }
}

fn invalid(message: impl Into<String>) -> ContentError {
    ContentError::Invalid(message.into())
}
