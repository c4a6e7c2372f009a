//! Seam between the core and whatever builds the world.

use stag_core::error::DomainError;

use super::aggregates::WorldModel;

/// A fully built world plus the location where players appear.
#[derive(Debug)]
pub struct WorldSeed {
    /// The populated world.
    pub world: WorldModel,
    /// Spawn point for new players and for respawn after death.
    pub start_location: String,
}

/// Something that can produce a validated world, such as a file loader or a
/// test fixture.
pub trait WorldSource: Send + Sync {
    /// Error reported when the world cannot be built.
    type Error: std::error::Error + From<DomainError> + Send + Sync + 'static;

    /// Builds the world.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the world cannot be read or is invalid.
    fn load(&self) -> Result<WorldSeed, Self::Error>;
}
