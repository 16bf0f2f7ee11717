//! REST API module for HTTP endpoints
//!
//! Provides read-only endpoints over the deal snapshot:
//! - `GET /api/deals` - Filtered, paginated deals
//! - `GET /api/deals/recent` - Deals from the last N days
//! - `GET /api/deals/:id` - Single deal
//! - `GET /api/deals/type/:type` - Deals of one type
//! - `GET /api/search` - Free-text search
//! - `GET /api/participants` - Participant directory
//! - `GET /api/participants/:identifier/deals` - Deals for one participant
//! - `GET /api/stats` - Statistics snapshot

pub mod deals;
pub mod participants;
pub mod search;
pub mod stats;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Dataset fingerprint for cache invalidation
    pub snapshot: String,
    /// Total count (for list responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, snapshot: String) -> Self {
        Self {
            data,
            snapshot,
            total: None,
        }
    }

    pub fn with_total(data: T, snapshot: String, total: usize) -> Self {
        Self {
            data,
            snapshot,
            total: Some(total),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip)]
    status: StatusCode,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
            status: StatusCode::NOT_FOUND,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
            status: StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
