//! Domain layer for the Custom Action Resolution context.

pub mod commands;
pub mod effects;
pub mod rejections;
pub mod resolution;
