//! Application layer for the World context.

pub mod query_handlers;
