//! Application layer for the Custom Action Resolution context.

pub mod command_handlers;
