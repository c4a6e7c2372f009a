//! Resolution of free text into a planned custom action.
//!
//! Checks run in a fixed order and read the world only; nothing is
//! mutated here. A successful resolution carries the complete list of
//! effects, so the caller can apply all of them or none.

use stag_core::text::{contains_phrase, tokenize};
use stag_session::domain::aggregates::PlayerState;
use stag_world::domain::actions::{CustomAction, Production};
use stag_world::domain::aggregates::{Location, WorldModel};
use stag_world::domain::entities::{Entity, EntityId};

use super::effects::WorldEffect;
use super::rejections::Rejection;

/// A custom action that passed every check.
#[derive(Debug)]
pub struct Resolution {
    /// Success message to return once the effects are applied.
    pub narration: String,
    /// Mutations, removals first.
    pub effects: Vec<WorldEffect>,
}

/// Where an available entity was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Place {
    Inventory,
    Location,
}

/// Entities the player can use right now: their inventory plus the
/// current location.
struct Available<'a> {
    inventory: &'a [Entity],
    location: &'a Location,
}

impl<'a> Available<'a> {
    fn entities(&self) -> impl Iterator<Item = (Place, &'a Entity)> + use<'a> {
        let inventory = self.inventory.iter().map(|e| (Place::Inventory, e));
        let location = self.location.entities().iter().map(|e| (Place::Location, e));
        inventory.chain(location)
    }

    fn matching(&self, name: &str) -> Vec<(Place, &'a Entity)> {
        self.entities().filter(|(_, e)| e.is_named(name)).collect()
    }
}

/// Resolves `text` against the catalog for `player`.
///
/// # Errors
///
/// Returns the first `Rejection` hit, in order: no trigger, ambiguous
/// action, missing or ambiguous subject, extraneous entity, then missing or
/// ambiguous consumed entity. `Rejection::Domain` means the player's
/// location is not in the world.
pub fn resolve(
    world: &WorldModel,
    player: &PlayerState,
    text: &str,
) -> Result<Resolution, Rejection> {
    let tokens = tokenize(text);

    let candidates: Vec<&CustomAction> = world
        .actions()
        .iter()
        .filter(|action| action.matches_trigger(&tokens))
        .collect();
    tracing::debug!(candidates = candidates.len(), "matched triggers");

    let action = select_action(&candidates, &tokens)?;

    let available = Available {
        inventory: player.inventory(),
        location: world.get_location(player.location())?,
    };

    check_subjects(action, &available)?;
    check_extraneous(action, &available, &tokens)?;

    let mut effects = plan_consumption(action, &available, player.location())?;
    effects.extend(plan_production(action, world, player.location()));

    tracing::debug!(narration = %action.narration, effects = effects.len(), "action resolved");
    Ok(Resolution {
        narration: action.narration.clone(),
        effects,
    })
}

/// Picks the single action the player means. With several candidates, only
/// those mentioning one of their subjects survive.
fn select_action<'w>(
    candidates: &[&'w CustomAction],
    tokens: &[String],
) -> Result<&'w CustomAction, Rejection> {
    match candidates {
        [] => Err(Rejection::Unrecognised),
        [only] => Ok(*only),
        _ => {
            let narrowed: Vec<&CustomAction> = candidates
                .iter()
                .copied()
                .filter(|action| action.mentions_subject(tokens))
                .collect();
            match narrowed.as_slice() {
                [only] => Ok(*only),
                _ => Err(Rejection::AmbiguousAction),
            }
        }
    }
}

/// Every subject must resolve to exactly one available entity. Missing
/// subjects are reported before ambiguous ones.
fn check_subjects(action: &CustomAction, available: &Available<'_>) -> Result<(), Rejection> {
    let counts: Vec<(&String, usize)> = action
        .subjects
        .iter()
        .map(|subject| (subject, available.matching(subject).len()))
        .collect();

    if let Some((subject, _)) = counts.iter().find(|(_, count)| *count == 0) {
        return Err(Rejection::MissingEntity {
            name: (*subject).clone(),
        });
    }
    if let Some((subject, _)) = counts.iter().find(|(_, count)| *count > 1) {
        return Err(Rejection::AmbiguousEntity {
            name: (*subject).clone(),
        });
    }
    Ok(())
}

/// Rejects commands that name an available entity the action does not use.
fn check_extraneous(
    action: &CustomAction,
    available: &Available<'_>,
    tokens: &[String],
) -> Result<(), Rejection> {
    match available
        .entities()
        .map(|(_, entity)| entity)
        .find(|entity| contains_phrase(tokens, entity.name()) && !action.has_subject(entity.name()))
    {
        Some(entity) => Err(Rejection::ExtraneousEntity {
            name: entity.name().to_owned(),
        }),
        None => Ok(()),
    }
}

/// Resolves each consumed name to one instance not already claimed by an
/// earlier consumed name.
fn plan_consumption(
    action: &CustomAction,
    available: &Available<'_>,
    location: &str,
) -> Result<Vec<WorldEffect>, Rejection> {
    let mut claimed: Vec<EntityId> = Vec::new();
    let mut effects = Vec::with_capacity(action.consumed.len());

    for name in &action.consumed {
        let matches: Vec<(Place, &Entity)> = available
            .matching(name)
            .into_iter()
            .filter(|(_, entity)| !claimed.contains(&entity.id()))
            .collect();

        let (place, entity) = match matches.as_slice() {
            [] => return Err(Rejection::MissingEntity { name: name.clone() }),
            [one] => *one,
            _ => return Err(Rejection::AmbiguousEntity { name: name.clone() }),
        };

        claimed.push(entity.id());
        effects.push(match place {
            Place::Inventory => WorldEffect::TakeFromInventory { entity: entity.id() },
            Place::Location => WorldEffect::TakeFromLocation {
                location: location.to_owned(),
                entity: entity.id(),
            },
        });
    }

    Ok(effects)
}

/// Entities are cloned from the first authored prototype, or synthesised as
/// a plain artefact; either way they appear at the player's location. Path
/// specs naming unknown locations are skipped.
fn plan_production(action: &CustomAction, world: &WorldModel, location: &str) -> Vec<WorldEffect> {
    let mut effects = Vec::with_capacity(action.produced.len());

    for production in &action.produced {
        match production {
            Production::Path { from, to } => {
                if world.has_location(from) && world.has_location(to) {
                    effects.push(WorldEffect::AddPath {
                        from: from.clone(),
                        to: to.clone(),
                    });
                } else {
                    tracing::warn!(path = %production, "skipping path to or from unknown location");
                }
            }
            Production::Entity(name) => {
                let entity = world
                    .find_entity_template(name)
                    .unwrap_or_else(|_| Entity::artefact(name.clone(), format!("A {name}")));
                effects.push(WorldEffect::PlaceInLocation {
                    location: location.to_owned(),
                    entity,
                });
            }
        }
    }

    effects
}
