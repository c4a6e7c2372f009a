//! The game: shared world, player registry and command dispatch.
//!
//! `Game` methods take `&mut self`, so a caller sharing one game between
//! sessions has to serialise whole commands behind a single lock. Nothing
//! here blocks or awaits.

use stag_core::command::Command;
use stag_core::error::DomainError;
use stag_rules::application::command_handlers::handle_perform_action;
use stag_rules::domain::commands::PerformAction;
use stag_rules::domain::rejections::Rejection;
use stag_session::domain::registry::PlayerRegistry;
use stag_verbs::application::command_handlers::{VerbContext, handle_builtin};
use stag_verbs::domain::commands::BuiltinVerb;
use stag_world::domain::aggregates::WorldModel;
use stag_world::domain::source::{WorldSeed, WorldSource};

use crate::domain::commands::{ParsedCommand, SubmitCommand};

/// Narration for failures that a validated world never produces.
pub const INTERNAL_FAILURE: &str = "Something went wrong. Please try again.";

/// Everything one command may read or mutate.
#[derive(Debug)]
pub struct Game {
    world: WorldModel,
    players: PlayerRegistry,
    start_location: String,
}

impl Game {
    /// Starts a game on a loaded world.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::LocationNotFound` if the start location is not
    /// part of the world.
    pub fn new(seed: WorldSeed) -> Result<Self, DomainError> {
        let WorldSeed {
            world,
            start_location,
        } = seed;
        // Use the authored spelling of the name from here on.
        let start_location = world.get_location(&start_location)?.name().to_owned();

        tracing::info!(
            start_location = %start_location,
            locations = world.locations().count(),
            actions = world.actions().len(),
            "game created"
        );
        Ok(Self {
            world,
            players: PlayerRegistry::new(),
            start_location,
        })
    }

    /// Loads a world from `source` and starts a game on it.
    ///
    /// # Errors
    ///
    /// Returns the source's error if loading fails or the start location is
    /// unknown.
    pub fn from_source<S: WorldSource>(source: &S) -> Result<Self, S::Error> {
        let seed = source.load()?;
        Self::new(seed).map_err(S::Error::from)
    }

    /// The shared world.
    #[must_use]
    pub fn world(&self) -> &WorldModel {
        &self.world
    }

    /// Every player seen so far.
    #[must_use]
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// Spawn and respawn point.
    #[must_use]
    pub fn start_location(&self) -> &str {
        &self.start_location
    }

    /// Runs one line of input and returns its narration.
    pub fn handle_command(&mut self, input: &str) -> String {
        self.execute(&SubmitCommand::new(input))
    }

    /// Runs a submitted command to completion. Every outcome, including
    /// malformed input, is a narration.
    #[tracing::instrument(
        name = "dispatch",
        skip_all,
        fields(command_type = command.command_type(), correlation_id = %command.correlation_id())
    )]
    pub fn execute(&mut self, command: &SubmitCommand) -> String {
        let parsed = match ParsedCommand::parse(&command.input) {
            Ok(parsed) => parsed,
            Err(malformed) => {
                tracing::debug!(%malformed, "rejected malformed command");
                return malformed.to_string();
            }
        };

        match BuiltinVerb::parse(&parsed.text) {
            Some(verb) => self.run_builtin(&parsed.player, &verb),
            None => self.run_custom_action(command, parsed),
        }
    }

    fn run_builtin(&mut self, name: &str, verb: &BuiltinVerb) -> String {
        let location = self
            .players
            .get(name)
            .map_or(self.start_location.as_str(), |p| p.location())
            .to_owned();
        let co_located: Vec<String> = self
            .players
            .all_at(&location)
            .into_iter()
            .map(|p| p.name().to_owned())
            .collect();

        let player = self.players.get_or_create(name, &self.start_location);
        let ctx = VerbContext {
            player,
            world: &mut self.world,
            co_located: &co_located,
            start_location: &self.start_location,
        };

        handle_builtin(verb, ctx).unwrap_or_else(|error| internal_failure(&error))
    }

    fn run_custom_action(&mut self, command: &SubmitCommand, parsed: ParsedCommand) -> String {
        let player = self.players.get_or_create(&parsed.player, &self.start_location);
        let perform = PerformAction {
            correlation_id: command.correlation_id(),
            text: parsed.text,
        };

        match handle_perform_action(&perform, &mut self.world, player) {
            Ok(narration) => narration,
            Err(Rejection::Domain(error)) => internal_failure(&error),
            Err(rejection) => {
                tracing::debug!(%rejection, "custom action rejected");
                rejection.to_string()
            }
        }
    }
}

fn internal_failure(error: &DomainError) -> String {
    tracing::error!(%error, "command failed on inconsistent game state");
    INTERNAL_FAILURE.to_owned()
}
