//! Stag — World bounded context.
//!
//! Responsible for the location graph, the entities placed in it, and the
//! catalog of data-defined custom actions.

pub mod application;
pub mod domain;
