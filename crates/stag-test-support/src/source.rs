//! A `WorldSource` backed by a fixture builder.

use stag_core::error::DomainError;
use stag_world::domain::aggregates::WorldModel;
use stag_world::domain::source::{WorldSeed, WorldSource};

use crate::fixtures::{START_LOCATION, basic_world};

/// A world source that builds a fresh world from a function on every load.
#[derive(Debug, Clone, Copy)]
pub struct FixtureWorldSource {
    build: fn() -> WorldModel,
    start_location: &'static str,
}

impl FixtureWorldSource {
    /// A source for an arbitrary builder and spawn point.
    #[must_use]
    pub fn new(build: fn() -> WorldModel, start_location: &'static str) -> Self {
        Self {
            build,
            start_location,
        }
    }

    /// A source for [`basic_world`].
    #[must_use]
    pub fn basic() -> Self {
        Self::new(basic_world, START_LOCATION)
    }
}

impl WorldSource for FixtureWorldSource {
    type Error = DomainError;

    fn load(&self) -> Result<WorldSeed, DomainError> {
        Ok(WorldSeed {
            world: (self.build)(),
            start_location: self.start_location.to_owned(),
        })
    }
}
