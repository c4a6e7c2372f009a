//! Stag — HTTP and line-protocol server.

pub mod config;
pub mod error;
pub mod line;
pub mod routes;
pub mod state;
