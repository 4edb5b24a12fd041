//! Health check handler

use crate::error::ApiError;
use crate::AppState;
use axum::{extract::State, Json};
use weather_core::HealthResponse;

pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let records = state.records.count().await?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        records,
    }))
}
