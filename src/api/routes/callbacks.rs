//! Callback Routes
//!
//! - POST /api/v1/callbacks - Recompute the charts affected by an input change

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{CallbackRequest, CallbackResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// POST /api/v1/callbacks
///
/// Runs every callback listening on one of `changed` (all of them when
/// `changed` is empty) against the current input values.
pub async fn dispatch(
    State(state): State<Arc<AppState>>,
    req: Result<Json<CallbackRequest>, JsonRejection>,
) -> ApiResult<Json<CallbackResponse>> {
    let Json(req) = req?;
    let outputs = state
        .callbacks
        .dispatch(&state.dataset, req.changed.as_slice(), &req.inputs)?;

    tracing::debug!(
        changed = ?req.changed,
        outputs = ?outputs.keys().collect::<Vec<_>>(),
        "Dispatched callbacks"
    );

    Ok(Json(CallbackResponse { outputs }))
}
