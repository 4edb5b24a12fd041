//! HTTP error responses

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use weather_core::{ErrorBody, WeatherError};

/// Domain error rendered as a JSON response
#[derive(Debug)]
pub struct ApiError(pub WeatherError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            WeatherError::InvalidRequest(_) | WeatherError::ProviderRejected(_) => {
                StatusCode::BAD_REQUEST
            }
            WeatherError::NotFound(_) => StatusCode::NOT_FOUND,
            WeatherError::ProviderUnavailable(_)
            | WeatherError::Storage(_)
            | WeatherError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<WeatherError> for ApiError {
    fn from(e: WeatherError) -> Self {
        ApiError(e)
    }
}

/// Unreadable request bodies get the same JSON error shape as domain errors
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(WeatherError::InvalidRequest(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            detail: self.0.to_string(),
            code: self.0.code().to_string(),
        });
        (self.status(), body).into_response()
    }
}
