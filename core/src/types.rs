//! Domain DTOs for the display-item API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined
//! independently, so the client crate never links against Axum internals.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single item in the display rotation, as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayItem {
    pub id: Uuid,
    pub url: String,
    pub hidden: bool,
}

/// Request payload for adding an item to the rotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDisplayItem {
    pub url: String,
    #[serde(default)]
    pub hidden: bool,
}
