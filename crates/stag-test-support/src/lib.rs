//! Shared test fixtures and utilities for the Stag text-adventure engine.

mod fixtures;
mod snapshot;
mod source;

pub use fixtures::{START_LOCATION, action, basic_world};
pub use snapshot::{GameSnapshot, snapshot};
pub use source::FixtureWorldSource;
