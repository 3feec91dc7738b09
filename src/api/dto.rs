//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::bindings::{InputId, InputValues};
use crate::charts::Figure;

// ============================================
// CALLBACK DTOs
// ============================================

/// An input-change event from the page
#[derive(Debug, Deserialize)]
pub struct CallbackRequest {
    /// Which widget changed
    pub changed: InputId,
    /// Snapshot of all current widget values
    pub inputs: InputValues,
}

/// Recomputed figures for every output affected by the change
#[derive(Debug, Serialize)]
pub struct CallbackResponse {
    /// Figures keyed by chart region element id.
    /// BTreeMap keeps the key order deterministic.
    pub outputs: BTreeMap<String, Figure>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "unhealthy"
    pub status: String,
    /// Dataset status: "ok" or "empty"
    pub dataset: String,
    /// Number of loaded records
    pub records: usize,
    /// Number of distinct launch sites
    pub sites: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}
