//! Search endpoint

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::ApiResponse;
use crate::api::state::AppState;

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query string; blank matches every deal
    #[serde(default)]
    pub q: String,
}

/// GET /api/search - Search deal titles, descriptions and party names
pub async fn search_deals(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    log::debug!("GET /api/search q={:?}", params.q);

    let deals = state.store.search(&params.q);
    let total = deals.len();
    Json(ApiResponse::with_total(deals, state.snapshot(), total))
}
