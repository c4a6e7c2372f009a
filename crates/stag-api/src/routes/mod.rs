//! Route modules organized by bounded context.

pub mod commands;
pub mod health;
pub mod locations;
pub mod players;
