//! Weather record handlers

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use weather_core::{CreateRecordRequest, CreateRecordResponse, WeatherRecord};

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateRecordRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateRecordResponse>), ApiError> {
    let Json(req) = payload?;
    let id = state.records.create(req).await?;
    Ok((StatusCode::CREATED, Json(CreateRecordResponse { id })))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WeatherRecord>, ApiError> {
    let record = state.records.get(&id).await?;
    Ok(Json(record))
}
