//! Deal endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::types::{DealType, FilterCriteria};

/// Query parameters for recent deals
#[derive(Debug, Deserialize)]
pub struct RecentParams {
    /// Window length in days, ending today
    #[serde(default = "default_days")]
    pub days: u32,
}

fn default_days() -> u32 {
    30
}

/// GET /api/deals - Filter and paginate deals
///
/// Query parameters mirror [`FilterCriteria`]; `limit` is capped at the
/// configured maximum page size.
pub async fn list_deals(
    State(state): State<Arc<AppState>>,
    Query(mut criteria): Query<FilterCriteria>,
) -> impl IntoResponse {
    log::debug!("GET /api/deals {:?}", criteria);

    criteria.limit = criteria.limit.map(|limit| limit.min(state.max_page_size));
    let result = state.store.filter(&criteria);
    let total = result.total;

    Json(ApiResponse::with_total(result, state.snapshot(), total))
}

/// GET /api/deals/recent - Deals dated within the last `days` days
pub async fn recent_deals(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RecentParams>,
) -> impl IntoResponse {
    let deals = state.store.get_recent(params.days);
    let total = deals.len();
    Json(ApiResponse::with_total(deals, state.snapshot(), total))
}

/// GET /api/deals/:id - Get a single deal
pub async fn get_deal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    // URL decode the id (handles spaces and special chars)
    let decoded_id = urlencoding::decode(&id)
        .unwrap_or_else(|_| id.clone().into())
        .into_owned();

    match state.store.get_by_id(&decoded_id) {
        Some(deal) => Ok(Json(ApiResponse::new(deal, state.snapshot()))),
        None => Err(ApiError::not_found(format!("Deal '{}' not found", decoded_id))),
    }
}

/// GET /api/deals/type/:type - All deals of one type
pub async fn deals_by_type(
    State(state): State<Arc<AppState>>,
    Path(deal_type): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let deal_type: DealType = deal_type.parse().map_err(ApiError::bad_request)?;

    let deals = state.store.get_by_type(deal_type);
    let total = deals.len();
    Ok(Json(ApiResponse::with_total(deals, state.snapshot(), total)))
}
