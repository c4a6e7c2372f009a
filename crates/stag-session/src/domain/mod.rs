//! Domain layer for the Player Session context.

pub mod aggregates;
pub mod registry;
