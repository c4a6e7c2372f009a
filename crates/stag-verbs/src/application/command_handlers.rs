//! Command handlers for the Built-in Verbs context.
//!
//! Every handler returns the narration for the player. Game-level failures
//! (nothing to pick up, no path, ...) are narrations too; the `Err` case is
//! reserved for a player whose location is missing from the world, which a
//! validated world never produces.

use stag_core::error::DomainError;
use stag_session::domain::aggregates::PlayerState;
use stag_world::domain::aggregates::WorldModel;
use stag_world::domain::entities::{Entity, EntityKind};

use crate::domain::commands::BuiltinVerb;

/// Health lost per fight.
pub const FIGHT_DAMAGE: u8 = 1;

/// Health restored per potion.
pub const POTION_HEALING: u8 = 1;

/// Everything a built-in verb may read or mutate.
#[derive(Debug)]
pub struct VerbContext<'a> {
    /// The acting player.
    pub player: &'a mut PlayerState,
    /// The shared world.
    pub world: &'a mut WorldModel,
    /// Names of other players at the acting player's location.
    pub co_located: &'a [String],
    /// Respawn point after death.
    pub start_location: &'a str,
}

/// Routes a parsed verb to its handler.
///
/// # Errors
///
/// Returns `DomainError::LocationNotFound` if the player's location is not
/// part of the world.
pub fn handle_builtin(verb: &BuiltinVerb, ctx: VerbContext<'_>) -> Result<String, DomainError> {
    tracing::debug!(verb = verb.keyword(), player = ctx.player.name(), "handling builtin verb");
    match verb {
        BuiltinVerb::Look => handle_look(ctx.player, ctx.world, ctx.co_located),
        BuiltinVerb::Inventory => Ok(handle_inventory(ctx.player)),
        BuiltinVerb::Health => Ok(handle_health(ctx.player)),
        BuiltinVerb::Get(item) => handle_get(ctx.player, ctx.world, item),
        BuiltinVerb::Drop(item) => handle_drop(ctx.player, ctx.world, item),
        BuiltinVerb::Goto(destination) => handle_goto(ctx.player, ctx.world, destination),
        BuiltinVerb::Drink(item) => Ok(handle_drink(ctx.player, item)),
        BuiltinVerb::Fight(target) => {
            handle_fight(ctx.player, ctx.world, target, ctx.start_location)
        }
    }
}

/// Describes the current location, its entities, exits and other players.
///
/// # Errors
///
/// Returns `DomainError::LocationNotFound` if the player's location is unknown.
pub fn handle_look(
    player: &PlayerState,
    world: &WorldModel,
    co_located: &[String],
) -> Result<String, DomainError> {
    let location = world.get_location(player.location())?;

    let mut lines = vec![
        format!("You are at {} now.", location.name()),
        location.description().to_owned(),
    ];
    lines.extend(
        location
            .entities()
            .iter()
            .map(|entity| format!("There is a {} here - {}", entity.name(), entity.description())),
    );
    if !location.paths().is_empty() {
        lines.push(format!("Exits: {}", location.paths().join(", ")));
    }
    lines.extend(
        co_located
            .iter()
            .filter(|other| other.as_str() != player.name())
            .map(|other| format!("Player {other} is here as well.")),
    );

    Ok(lines.join("\n"))
}

/// Lists carried items.
#[must_use]
pub fn handle_inventory(player: &PlayerState) -> String {
    if player.inventory().is_empty() {
        return "You are carrying nothing.".to_owned();
    }
    let names: Vec<&str> = player.inventory().iter().map(Entity::name).collect();
    format!("You are carrying: {}", names.join(", "))
}

/// Reports current health.
#[must_use]
pub fn handle_health(player: &PlayerState) -> String {
    format!("Your health is {}.", player.health())
}

/// Moves a uniquely named artefact from the location to the inventory.
///
/// # Errors
///
/// Returns `DomainError::LocationNotFound` if the player's location is unknown.
pub fn handle_get(
    player: &mut PlayerState,
    world: &mut WorldModel,
    item: &str,
) -> Result<String, DomainError> {
    let location = world.get_location_mut(player.location())?;

    let matches = location.find_matches_by_name(item);
    let artefacts: Vec<&Entity> = matches
        .iter()
        .copied()
        .filter(|entity| entity.kind().is_carryable())
        .collect();

    let target = match (artefacts.as_slice(), matches.first()) {
        ([artefact], _) => artefact.id(),
        ([], None) => return Ok("There is no such item to pick up.".to_owned()),
        ([], Some(fixed)) => return Ok(format!("You can't pick up the {}.", fixed.name())),
        _ => {
            return Ok(format!(
                "There is more than one {item} here. Please be more specific."
            ));
        }
    };

    let entity = location.remove_entity_instance(target)?;
    let message = format!("You picked up the {}.", entity.name());
    player.add_to_inventory(entity);
    Ok(message)
}

/// Moves a carried item to the current location. Same-named items are
/// interchangeable, so the earliest acquired one is dropped.
///
/// # Errors
///
/// Returns `DomainError::LocationNotFound` if the player's location is unknown.
pub fn handle_drop(
    player: &mut PlayerState,
    world: &mut WorldModel,
    item: &str,
) -> Result<String, DomainError> {
    let location = world.get_location_mut(player.location())?;

    let Some(target) = player.find_in_inventory(item).first().map(|e| e.id()) else {
        return Ok("You don't have that item to drop.".to_owned());
    };

    let entity = player.remove_from_inventory(target)?;
    let message = format!("You dropped the {}.", entity.name());
    location.add_entity(entity);
    Ok(message)
}

/// Follows a path from the current location.
///
/// # Errors
///
/// Returns `DomainError::LocationNotFound` if the player's location is unknown.
pub fn handle_goto(
    player: &mut PlayerState,
    world: &WorldModel,
    destination: &str,
) -> Result<String, DomainError> {
    let current = world.get_location(player.location())?;

    let Some(next) = current
        .path_to(destination)
        .and_then(|name| world.get_location(name).ok())
    else {
        return Ok("You can't go there from here.".to_owned());
    };

    player.move_to(next.name());
    Ok(format!("You moved to {}.", next.name()))
}

/// Drinks a carried potion.
#[must_use]
pub fn handle_drink(player: &mut PlayerState, item: &str) -> String {
    let Some((id, drinkable)) = player
        .find_in_inventory(item)
        .first()
        .map(|e| (e.id(), is_potion(e)))
    else {
        return format!("You don't have {item} to drink.");
    };

    if !drinkable {
        return format!("You can't drink {item}.");
    }

    // The instance was just found in the inventory.
    if player.remove_from_inventory(id).is_err() {
        return format!("You don't have {item} to drink.");
    }
    let health = player.heal(POTION_HEALING);
    format!("You drank the {item} and feel better. Your health is now {health}.")
}

fn is_potion(entity: &Entity) -> bool {
    entity.name().to_lowercase().contains("potion")
}

/// Fights a character at the current location. Reaching zero health kills
/// the player: carried artefacts fall where they died and they respawn at
/// `start_location` with full health.
///
/// # Errors
///
/// Returns `DomainError::LocationNotFound` if the player's location is unknown.
pub fn handle_fight(
    player: &mut PlayerState,
    world: &mut WorldModel,
    target: &str,
    start_location: &str,
) -> Result<String, DomainError> {
    let location = world.get_location_mut(player.location())?;

    let has_target = location
        .find_matches_by_name(target)
        .iter()
        .any(|entity| entity.kind() == EntityKind::Character);
    if !has_target {
        return Ok(format!("There is no {target} here to fight."));
    }

    let health = player.take_damage(FIGHT_DAMAGE);
    let mut message = format!("You fought the {target} and took {FIGHT_DAMAGE} damage. ");

    if player.is_dead() {
        tracing::info!(player = player.name(), location = location.name(), "player died");
        for entity in player.respawn(start_location) {
            location.add_entity(entity);
        }
        message.push_str("You died! You have been resurrected at the starting location.");
    } else {
        message.push_str(&format!("Your health is now {health}."));
    }
    Ok(message)
}
