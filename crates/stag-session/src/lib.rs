//! Stag — Player Session bounded context.
//!
//! Responsible for per-player state: where each player stands, what they
//! carry, and how healthy they are.

pub mod application;
pub mod domain;
