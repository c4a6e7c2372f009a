//! Domain layer for the World context.

pub mod actions;
pub mod aggregates;
pub mod entities;
pub mod source;
