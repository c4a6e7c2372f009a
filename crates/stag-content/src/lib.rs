//! Stag — World Content bounded context.
//!
//! Responsible for reading world definitions from YAML, validating them,
//! and turning them into a `WorldModel` the engine can run.

pub mod application;
pub mod domain;
pub mod error;
