//! Weatherstack provider client

use crate::settings::Settings;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use weather_core::{Result, WeatherError, WeatherProvider, WeatherQuery};

const FETCH_FAILED: &str = "Failed to fetch weather data";
const DEFAULT_REJECTION: &str = "Weather API error";

/// Queries the Weatherstack `current` endpoint with a historical date
#[derive(Debug, Clone)]
pub struct WeatherstackProvider {
    http: Client,
    base_url: String,
    access_key: String,
    units: String,
}

impl WeatherstackProvider {
    pub fn new(
        base_url: impl Into<String>,
        access_key: impl Into<String>,
        units: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WeatherError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            access_key: access_key.into(),
            units: units.into(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(
            settings.provider_url.clone(),
            settings.provider_access_key.clone(),
            settings.units.clone(),
            settings.provider_timeout(),
        )
    }

    fn current_url(&self) -> String {
        format!("{}/current", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl WeatherProvider for WeatherstackProvider {
    async fn fetch(&self, query: &WeatherQuery) -> Result<Value> {
        debug!("Querying weatherstack: location={}, date={}", query.location, query.date);

        let res = self
            .http
            .get(self.current_url())
            .query(&[
                ("access_key", self.access_key.as_str()),
                ("query", query.location.as_str()),
                ("historical_date", query.date.as_str()),
                ("units", self.units.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                // The URL carries the access key
                warn!("Weatherstack request failed: {}", e.without_url());
                WeatherError::ProviderUnavailable(FETCH_FAILED.to_string())
            })?;

        let status = res.status();
        if !status.is_success() {
            warn!("Weatherstack returned status {}", status);
            return Err(WeatherError::ProviderUnavailable(FETCH_FAILED.to_string()));
        }

        let body: Value = res.json().await.map_err(|e| {
            warn!("Weatherstack response is not JSON: {}", e.without_url());
            WeatherError::ProviderUnavailable(FETCH_FAILED.to_string())
        })?;

        if let Some(error) = body.get("error") {
            let info = error
                .get("info")
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_REJECTION);
            warn!("Weatherstack rejected query for {}: {}", query.location, info);
            return Err(WeatherError::ProviderRejected(info.to_string()));
        }

        Ok(body)
    }
}
