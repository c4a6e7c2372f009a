//! Stag — Command Dispatch bounded context.
//!
//! Responsible for parsing `"<player>: <text>"` input, creating players on
//! first contact, and routing each command to a built-in verb or to the
//! custom-action resolver while holding the whole game exclusively.

pub mod application;
pub mod domain;
