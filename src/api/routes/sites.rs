//! Site Routes
//!
//! - GET /api/v1/sites - Distinct launch sites and dataset summary

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::SitesResponse;
use crate::api::state::AppState;

/// GET /api/v1/sites
pub async fn list_sites(State(state): State<Arc<AppState>>) -> Json<SitesResponse> {
    Json(SitesResponse {
        sites: state.dataset.sites().to_vec(),
        total_records: state.dataset.len(),
        payload_bounds: state.dataset.payload_bounds(),
    })
}
