//! Small hand-built worlds used across crates.

use stag_world::domain::actions::{CustomAction, Production};
use stag_world::domain::aggregates::{Location, WorldModel};
use stag_world::domain::entities::Entity;

/// Spawn point of [`basic_world`].
pub const START_LOCATION: &str = "cabin";

/// Builds a custom action from string slices.
#[must_use]
pub fn action(
    triggers: &[&str],
    subjects: &[&str],
    consumed: &[&str],
    produced: &[&str],
    narration: &str,
) -> CustomAction {
    let owned = |items: &[&str]| items.iter().map(|&s| s.to_owned()).collect::<Vec<_>>();
    CustomAction {
        triggers: owned(triggers),
        subjects: owned(subjects),
        consumed: owned(consumed),
        produced: produced.iter().map(|&s| Production::parse(s)).collect(),
        narration: narration.to_owned(),
    }
}

/// The classic four-location world:
///
/// - cabin: axe, potion, trapdoor; path to forest
/// - forest: key, tree; path to cabin
/// - cellar: elf; path to cabin
/// - storeroom: log
///
/// with actions to unlock the trapdoor (key → `cabin->cellar`) and to chop
/// the tree (axe + tree → log).
///
/// # Panics
///
/// Never in practice; location names are distinct.
#[must_use]
pub fn basic_world() -> WorldModel {
    let mut world = WorldModel::new();

    let mut cabin = Location::new("cabin", "A log cabin in the woods");
    cabin.add_path("forest");
    cabin.add_entity(Entity::artefact("axe", "A razor sharp axe"));
    cabin.add_entity(Entity::artefact("potion", "Magic potion"));
    cabin.add_entity(Entity::furniture("trapdoor", "Wooden trapdoor"));

    let mut forest = Location::new("forest", "A dark forest");
    forest.add_path("cabin");
    forest.add_entity(Entity::artefact("key", "Brass key"));
    forest.add_entity(Entity::furniture("tree", "A big tree"));

    let mut cellar = Location::new("cellar", "A dusty cellar");
    cellar.add_path("cabin");
    cellar.add_entity(Entity::character("elf", "Angry Elf"));

    let mut storeroom = Location::new(
        "storeroom",
        "Storage for any entities not placed in the game",
    );
    storeroom.add_entity(Entity::artefact("log", "A heavy wooden log"));

    for location in [cabin, forest, cellar, storeroom] {
        world
            .add_location(location)
            .expect("fixture location names are distinct");
    }

    world.add_action(action(
        &["open", "unlock"],
        &["trapdoor", "key"],
        &["key"],
        &["cabin->cellar"],
        "You unlock the trapdoor and see steps leading down into a cellar",
    ));
    world.add_action(action(
        &["chop", "cut", "cut down"],
        &["tree", "axe"],
        &["tree"],
        &["log"],
        "You cut down the tree with the axe",
    ));

    world
}
