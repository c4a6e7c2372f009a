//! Command handlers for the Custom Action Resolution context.
//!
//! Resolution plans every effect against a read-only view of the world;
//! only a fully planned action reaches `apply_effects`.

use stag_core::command::Command;
use stag_core::error::DomainError;
use stag_session::domain::aggregates::PlayerState;
use stag_world::domain::aggregates::WorldModel;

use crate::domain::commands::PerformAction;
use crate::domain::effects::WorldEffect;
use crate::domain::rejections::Rejection;
use crate::domain::resolution::resolve;

/// Handles the `PerformAction` command: resolves the text, applies the
/// planned effects and returns the action's narration.
///
/// # Errors
///
/// Returns a `Rejection` if no single action applies; the world and player
/// are left untouched in that case.
pub fn handle_perform_action(
    command: &PerformAction,
    world: &mut WorldModel,
    player: &mut PlayerState,
) -> Result<String, Rejection> {
    tracing::debug!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        player = player.name(),
        "resolving custom action"
    );

    let resolution = resolve(world, player, &command.text)?;
    apply_effects(resolution.effects, world, player)?;

    tracing::info!(player = player.name(), "custom action performed");
    Ok(resolution.narration)
}

/// Applies planned effects in order.
///
/// # Errors
///
/// Returns `DomainError` if a planned instance or location has vanished,
/// which cannot happen while the caller holds exclusive access between
/// planning and applying.
pub fn apply_effects(
    effects: Vec<WorldEffect>,
    world: &mut WorldModel,
    player: &mut PlayerState,
) -> Result<(), DomainError> {
    for effect in effects {
        match effect {
            WorldEffect::TakeFromInventory { entity } => {
                player.remove_from_inventory(entity)?;
            }
            WorldEffect::TakeFromLocation { location, entity } => {
                world.remove_entity_instance(&location, entity)?;
            }
            WorldEffect::PlaceInLocation { location, entity } => {
                world.get_location_mut(&location)?.add_entity(entity);
            }
            WorldEffect::AddPath { from, to } => {
                world.add_path(&from, &to)?;
            }
        }
    }
    Ok(())
}
