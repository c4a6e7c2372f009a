//! Stag Core — shared domain abstractions.
//!
//! This crate defines the error type, command contract and text helpers
//! that every bounded context depends on. It contains no game rules.

pub mod command;
pub mod error;
pub mod text;
