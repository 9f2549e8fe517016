//! Request handlers module

pub mod config;
pub mod directory;
pub mod org_chart;
pub mod preferences;
