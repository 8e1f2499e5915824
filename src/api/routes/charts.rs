//! Chart Routes
//!
//! Direct access to each chart without going through the callback wiring.
//!
//! - GET /api/v1/charts/pie?site=ALL
//! - GET /api/v1/charts/scatter?site=ALL&low=0&high=10000

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::ChartParams;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::data::PayloadRange;
use crate::figure::{Figure, PieChart, ScatterChart};
use crate::filter::SiteSelection;
use crate::layout::default_payload_range;

/// GET /api/v1/charts/pie
pub async fn pie(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ChartParams>, QueryRejection>,
) -> ApiResult<Json<Figure>> {
    let Query(params) = params?;
    let site = site_param(&params);
    let chart = PieChart::build(&state.dataset, &site);

    tracing::debug!(site = %site, launches = chart.total(), "Built pie chart");
    Ok(Json(chart.to_figure()))
}

/// GET /api/v1/charts/scatter
///
/// Missing bounds default to the dataset's payload bounds, like the
/// slider's initial selection.
pub async fn scatter(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ChartParams>, QueryRejection>,
) -> ApiResult<Json<Figure>> {
    let Query(params) = params?;
    let site = site_param(&params);
    let range = range_param(&params, default_payload_range(&state.dataset))?;
    let chart = ScatterChart::build(&state.dataset, &site, range);

    tracing::debug!(site = %site, range = %range, points = chart.len(), "Built scatter chart");
    Ok(Json(chart.to_figure()))
}

fn site_param(params: &ChartParams) -> SiteSelection {
    params
        .site
        .as_deref()
        .map(SiteSelection::parse)
        .unwrap_or_default()
}

/// An inverted range is a valid empty selection; only non-finite bounds
/// are rejected.
fn range_param(params: &ChartParams, default: PayloadRange) -> ApiResult<PayloadRange> {
    let low = params.low.unwrap_or(default.low);
    let high = params.high.unwrap_or(default.high);

    if !low.is_finite() || !high.is_finite() {
        return Err(ApiError::Validation(
            "payload bounds must be finite numbers".to_string(),
        ));
    }

    Ok(PayloadRange::new(low, high))
}
