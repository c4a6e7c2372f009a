//! Stag — Custom Action Resolution bounded context.
//!
//! Responsible for matching free text against the custom-action catalog,
//! disambiguating, checking prerequisites, and applying consume/produce
//! effects all-or-nothing.

pub mod application;
pub mod domain;
