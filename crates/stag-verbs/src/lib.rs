//! Stag — Built-in Verbs bounded context.
//!
//! Responsible for the fixed verbs every world understands: looking
//! around, carrying things, moving, drinking and fighting.

pub mod application;
pub mod domain;
