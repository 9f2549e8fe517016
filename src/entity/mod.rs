//! Entity module - directory records
//!
//! Flat, relational-shaped records the organization chart is built from.
//! Relationships are plain id references; nothing here validates them.

pub mod administrator;
pub mod building;
pub mod manager;

pub use administrator::Administrator;
pub use building::Building;
pub use manager::Manager;
