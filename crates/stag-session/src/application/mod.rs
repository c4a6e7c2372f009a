//! Application layer for the Player Session context.

pub mod query_handlers;
