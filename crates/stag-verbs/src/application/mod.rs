//! Application layer for the Built-in Verbs context.

pub mod command_handlers;
