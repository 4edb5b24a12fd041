//! Error types for the weather service

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WeatherError>;

#[derive(Error, Debug)]
pub enum WeatherError {
    /// The provider could not be reached or answered with a failure status
    #[error("{0}")]
    ProviderUnavailable(String),

    /// The provider answered but reported an error in the body
    #[error("{0}")]
    ProviderRejected(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl WeatherError {
    /// Stable tag used in JSON error bodies
    pub fn code(&self) -> &'static str {
        match self {
            WeatherError::ProviderUnavailable(_) => "provider_unavailable",
            WeatherError::ProviderRejected(_) => "provider_rejected",
            WeatherError::NotFound(_) => "not_found",
            WeatherError::InvalidRequest(_) => "invalid_request",
            WeatherError::Storage(_) => "storage",
            WeatherError::Config(_) => "config",
        }
    }
}
