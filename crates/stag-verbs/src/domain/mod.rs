//! Domain layer for the Built-in Verbs context.

pub mod commands;
