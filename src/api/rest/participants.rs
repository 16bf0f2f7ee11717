//! Participant endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use super::ApiResponse;
use crate::api::state::AppState;
use crate::types::{Deal, ParticipantId};

/// Response for GET /api/participants/:identifier/deals
#[derive(Debug, Serialize)]
pub struct ParticipantDeals {
    /// Canonical id the identifier resolved to, if any
    pub participant: Option<ParticipantId>,
    pub deals: Vec<Deal>,
}

/// GET /api/participants - List every participant in the snapshot
pub async fn list_participants(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let participants = state.store.participants();
    let total = participants.len();
    Json(ApiResponse::with_total(participants, state.snapshot(), total))
}

/// GET /api/participants/:identifier/deals - Deals involving a participant
///
/// Unknown participants produce an empty list rather than an error.
pub async fn participant_deals(
    State(state): State<Arc<AppState>>,
    Path(identifier): Path<String>,
) -> impl IntoResponse {
    let decoded = urlencoding::decode(&identifier)
        .unwrap_or_else(|_| identifier.clone().into())
        .into_owned();

    let participant = state.store.resolve_participant(&decoded);
    let deals = state.store.get_by_participant(&decoded);
    let total = deals.len();

    Json(ApiResponse::with_total(
        ParticipantDeals { participant, deals },
        state.snapshot(),
        total,
    ))
}
