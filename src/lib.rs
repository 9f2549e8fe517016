//! Komuniteti - organization chart service
//!
//! Builds organization charts (manager, administrators, buildings) from flat
//! directory records and renders them as SVG. The builder and renderer are
//! pure; the directory and HTTP layers wrap them.

pub mod config;
pub mod directory;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod org;
pub mod render;
pub mod routes;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use state::AppState;
