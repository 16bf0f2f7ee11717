//! Statistics endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use super::ApiResponse;
use crate::api::state::AppState;

/// Query parameters for statistics
#[derive(Debug, Deserialize)]
pub struct StatsParams {
    /// Reference date; defaults to today (UTC)
    #[serde(rename = "asOf")]
    pub as_of: Option<NaiveDate>,
}

/// GET /api/stats - Totals, per-type, per-quarter and per-year breakdowns
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StatsParams>,
) -> impl IntoResponse {
    let stats = match params.as_of {
        Some(as_of) => state.store.compute_stats_at(as_of),
        None => state.store.compute_stats(),
    };

    Json(ApiResponse::new(stats, state.snapshot()))
}
