//! Registry of every player seen since the process started.

use std::collections::BTreeMap;

use stag_core::text::names_match;

use super::aggregates::PlayerState;

/// Owns all player states, keyed by lowercased player name.
#[derive(Debug, Default)]
pub struct PlayerRegistry {
    players: BTreeMap<String, PlayerState>,
}

impl PlayerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the player's state, creating it at `start_location` on first
    /// contact. Names are case-insensitive; a new player is named in
    /// lowercase.
    pub fn get_or_create(&mut self, name: &str, start_location: &str) -> &mut PlayerState {
        let key = name.to_lowercase();
        self.players.entry(key).or_insert_with_key(|key| {
            tracing::info!(player = %key, location = start_location, "new player joined");
            PlayerState::new(key.as_str(), start_location)
        })
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PlayerState> {
        self.players.get(&name.to_lowercase())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut PlayerState> {
        self.players.get_mut(&name.to_lowercase())
    }

    /// All players currently at `location`, ordered by name.
    #[must_use]
    pub fn all_at(&self, location: &str) -> Vec<&PlayerState> {
        self.players
            .values()
            .filter(|player| names_match(player.location(), location))
            .collect()
    }

    /// All players, ordered by name.
    pub fn players(&self) -> impl Iterator<Item = &PlayerState> {
        self.players.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
