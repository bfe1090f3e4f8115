//! Property Manager API access.
//!
//! This module provides:
//! - EdgeGrid request signing
//! - Response body models for groups, properties and hostnames
//! - A signed client for the listing endpoints

mod auth;
mod client;
mod models;

// Re-export public API
pub use auth::{edgegrid_timestamp, EdgeGridSigner};
pub use client::PapiClient;
pub use models::{Group, HostnameItem, PropertyItem};
