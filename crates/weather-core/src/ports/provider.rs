//! Weather data provider trait

use crate::Result;
use async_trait::async_trait;
use serde_json::Value;

/// What a provider is asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub location: String,
    /// Historical date, passed through unparsed
    pub date: String,
}

/// External weather data source.
///
/// The payload is returned as an opaque document. Transport failures map to
/// `WeatherError::ProviderUnavailable`, errors reported inside a successful
/// response map to `WeatherError::ProviderRejected`.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn fetch(&self, query: &WeatherQuery) -> Result<Value>;
}
