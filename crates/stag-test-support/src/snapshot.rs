//! Snapshots of world and player state for atomicity assertions.

use std::collections::BTreeMap;

use stag_session::domain::registry::PlayerRegistry;
use stag_world::domain::aggregates::WorldModel;
use stag_world::domain::entities::Entity;

/// Comparable picture of everything a command may mutate. Entity names are
/// sorted so the snapshot is a multiset per container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Location name to sorted entity names.
    pub locations: BTreeMap<String, Vec<String>>,
    /// Location name to sorted path destinations.
    pub paths: BTreeMap<String, Vec<String>>,
    /// Player name to (location, health, sorted inventory names).
    pub players: BTreeMap<String, (String, u8, Vec<String>)>,
}

fn sorted_names(entities: &[Entity]) -> Vec<String> {
    let mut names: Vec<String> = entities.iter().map(|e| e.name().to_owned()).collect();
    names.sort();
    names
}

/// Captures the current state of `world` and `players`.
#[must_use]
pub fn snapshot(world: &WorldModel, players: &PlayerRegistry) -> GameSnapshot {
    let mut locations = BTreeMap::new();
    let mut paths = BTreeMap::new();
    for location in world.locations() {
        locations.insert(location.name().to_owned(), sorted_names(location.entities()));
        let mut exits = location.paths().to_vec();
        exits.sort();
        paths.insert(location.name().to_owned(), exits);
    }

    let players = players
        .players()
        .map(|player| {
            (
                player.name().to_owned(),
                (
                    player.location().to_owned(),
                    player.health(),
                    sorted_names(player.inventory()),
                ),
            )
        })
        .collect();

    GameSnapshot {
        locations,
        paths,
        players,
    }
}
