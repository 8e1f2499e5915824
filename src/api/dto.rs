//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::callbacks::CallbackInputs;
use crate::data::PayloadRange;
use crate::figure::Figure;

// ============================================
// CALLBACK DTOs
// ============================================

/// Callback request sent by the page on load and on every control change
#[derive(Debug, Deserialize)]
pub struct CallbackRequest {
    /// Ids of the inputs that changed; empty on initial load
    #[serde(default)]
    pub changed: Vec<String>,
    /// Current value of every input on the page
    #[serde(default)]
    pub inputs: CallbackInputs,
}

/// Figures for every output the change affected
#[derive(Debug, Serialize)]
pub struct CallbackResponse {
    pub outputs: BTreeMap<&'static str, Figure>,
}

// ============================================
// CHART DTOs
// ============================================

/// Query parameters for the direct chart endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ChartParams {
    /// Site name or "ALL" (default: ALL)
    #[serde(default)]
    pub site: Option<String>,
    /// Lower payload bound in kg (default: dataset minimum)
    #[serde(default)]
    pub low: Option<f64>,
    /// Upper payload bound in kg (default: dataset maximum)
    #[serde(default)]
    pub high: Option<f64>,
}

// ============================================
// SITE DTOs
// ============================================

/// Dataset summary
#[derive(Debug, Serialize)]
pub struct SitesResponse {
    /// Distinct launch sites in file order
    pub sites: Vec<String>,
    /// Number of launch records
    pub total_records: usize,
    /// Observed payload bounds, absent for an empty dataset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_bounds: Option<PayloadRange>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "degraded"
    pub status: String,
    /// Number of loaded launch records
    pub records: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}
