//! Axum route handlers for the generation API.
//!
//! Handlers are thin: they hand the raw JSON body to the dispatch layer and
//! return whatever envelope comes back. Status is always 200 — success and
//! failure both live inside the envelope, which is the contract callers
//! depend on.

use axum::{extract::State, Json};
use serde_json::Value;

use crate::dispatch::{handle, OperationEnvelope, OperationKind};
use crate::state::AppState;

/// POST /api/v1/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(raw): Json<Value>,
) -> Json<OperationEnvelope> {
    Json(handle(state.backend.as_ref(), raw, OperationKind::Generate).await)
}

/// POST /api/v1/revise
pub async fn handle_revise(
    State(state): State<AppState>,
    Json(raw): Json<Value>,
) -> Json<OperationEnvelope> {
    Json(handle(state.backend.as_ref(), raw, OperationKind::Revise).await)
}
