//! Query handlers for the Player Session context.

use serde::Serialize;
use stag_core::error::DomainError;
use stag_world::application::query_handlers::EntityView;

use crate::domain::registry::PlayerRegistry;

/// Read-only view of a player.
#[derive(Debug, Serialize)]
pub struct PlayerView {
    /// Player name.
    pub name: String,
    /// Current location name.
    pub location: String,
    /// Current health.
    pub health: u8,
    /// Carried entities, in pickup order.
    pub inventory: Vec<EntityView>,
}

/// Retrieves a player by name. Never creates one.
///
/// # Errors
///
/// Returns `DomainError::PlayerNotFound` if the player has never issued a
/// command.
pub fn get_player_by_name(
    registry: &PlayerRegistry,
    name: &str,
) -> Result<PlayerView, DomainError> {
    let player = registry
        .get(name)
        .ok_or_else(|| DomainError::PlayerNotFound(name.to_owned()))?;
    Ok(PlayerView {
        name: player.name().to_owned(),
        location: player.location().to_owned(),
        health: player.health(),
        inventory: player.inventory().iter().map(EntityView::from).collect(),
    })
}
