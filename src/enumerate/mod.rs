//! Account enumeration.
//!
//! Walks groups → contracts → properties → hostnames through the Property
//! Manager API and produces the flat candidate hostname list the classifier
//! consumes.

mod collector;
mod walker;

// Re-export public API
pub use collector::{collect_all, collect_hostnames};
pub use walker::enumerate_objects;

/// A property to collect hostnames from, at its latest version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub property_id: String,
    pub property_name: Option<String>,
    pub latest_version: u32,
    pub contract_id: String,
    pub group_id: String,
}
