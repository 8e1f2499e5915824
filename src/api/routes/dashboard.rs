//! Dashboard Routes
//!
//! - GET / - The dashboard page
//! - GET /api/v1/layout - Page description the page script renders

use axum::{extract::State, response::Html, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::layout::DashboardLayout;

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /api/v1/layout
pub async fn layout(State(state): State<Arc<AppState>>) -> Json<DashboardLayout> {
    Json(state.layout.as_ref().clone())
}
