//! Aggregate roots for the Player Session context.

use stag_core::error::DomainError;
use stag_world::domain::entities::{Entity, EntityId, find_matches_by_name};

/// Health of a fresh or respawned player, and the cap for healing.
pub const MAX_HEALTH: u8 = 3;

/// Per-player state. Created on a player's first command and kept for the
/// lifetime of the process.
#[derive(Debug)]
pub struct PlayerState {
    name: String,
    /// Name of the current location; always a key of the world.
    location: String,
    /// Carried entities, in pickup order.
    inventory: Vec<Entity>,
    /// Always within `0..=MAX_HEALTH`.
    health: u8,
}

impl PlayerState {
    /// Creates a player with full health and nothing carried.
    #[must_use]
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            inventory: Vec::new(),
            health: MAX_HEALTH,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn inventory(&self) -> &[Entity] {
        &self.inventory
    }

    #[must_use]
    pub fn health(&self) -> u8 {
        self.health
    }

    /// Moves the player. The caller guarantees `location` exists.
    pub fn move_to(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    /// Puts an entity in the inventory.
    pub fn add_to_inventory(&mut self, entity: Entity) {
        self.inventory.push(entity);
    }

    /// Takes one specific entity out of the inventory.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EntityNotFound` if the player does not carry it.
    pub fn remove_from_inventory(&mut self, id: EntityId) -> Result<Entity, DomainError> {
        let index = self
            .inventory
            .iter()
            .position(|entity| entity.id() == id)
            .ok_or_else(|| {
                DomainError::EntityNotFound(format!("{id:?} in inventory of {}", self.name))
            })?;
        Ok(self.inventory.remove(index))
    }

    /// Every carried entity whose name matches case-insensitively.
    #[must_use]
    pub fn find_in_inventory(&self, name: &str) -> Vec<&Entity> {
        find_matches_by_name(&self.inventory, name)
    }

    /// Restores health, capped at `MAX_HEALTH`. Returns the new health.
    pub fn heal(&mut self, amount: u8) -> u8 {
        self.health = self.health.saturating_add(amount).min(MAX_HEALTH);
        self.health
    }

    /// Reduces health, floored at zero. Returns the new health.
    pub fn take_damage(&mut self, amount: u8) -> u8 {
        self.health = self.health.saturating_sub(amount);
        self.health
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Resets a dead player: full health, moved to `start_location`, and all
    /// carried artefacts handed back to the caller to be dropped where the
    /// player died. Non-artefacts stay in the inventory.
    pub fn respawn(&mut self, start_location: impl Into<String>) -> Vec<Entity> {
        let (dropped, kept): (Vec<Entity>, Vec<Entity>) = std::mem::take(&mut self.inventory)
            .into_iter()
            .partition(|entity| entity.kind().is_carryable());
        self.inventory = kept;
        self.health = MAX_HEALTH;
        self.location = start_location.into();
        dropped
    }
}
