//! Preference extraction without ranking.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use cq_protocol::preferences::QueryPreferences;

use super::chat::validate_message;
use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct InterpretRequest {
    pub message: String,
}

/// POST /api/v1/interpret — parse a query into preferences.
pub async fn interpret(
    State(state): State<AppState>,
    Json(req): Json<InterpretRequest>,
) -> ApiResult<Json<QueryPreferences>> {
    let message = validate_message(&req.message)?;
    Ok(Json(state.interpreter.parse(message)))
}
