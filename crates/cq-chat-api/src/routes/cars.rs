//! Listing snapshot endpoints.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use cq_protocol::car::Car;

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/v1/cars — the current listing snapshot.
pub async fn list_cars(State(state): State<AppState>) -> Json<Vec<Car>> {
    Json(state.cars.read().await.clone())
}

/// POST /api/v1/cars/reload — re-read the listing from its source.
pub async fn reload_cars(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let count = state.reload().await.map_err(|e| {
        tracing::warn!(error = %e, "listing reload failed");
        e
    })?;
    Ok(Json(json!({
        "source": state.source.describe(),
        "count": count,
    })))
}
