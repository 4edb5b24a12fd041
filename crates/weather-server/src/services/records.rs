//! Record service: provider lookup plus storage

use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;
use weather_core::{
    CreateRecordRequest, RecordStore, Result, WeatherError, WeatherProvider, WeatherQuery,
    WeatherRecord,
};

pub struct RecordService {
    store: Arc<dyn RecordStore>,
    provider: Arc<dyn WeatherProvider>,
}

impl RecordService {
    pub fn new(store: Arc<dyn RecordStore>, provider: Arc<dyn WeatherProvider>) -> Self {
        Self { store, provider }
    }

    /// Look up the weather and store it with the request fields.
    ///
    /// Returns the new record's identifier. Nothing is stored unless the
    /// provider call succeeds.
    pub async fn create(&self, request: CreateRecordRequest) -> Result<String> {
        validate(&request)?;

        info!(
            "Creating weather record: location={}, date={}",
            request.location, request.date
        );

        let query = WeatherQuery {
            location: request.location.clone(),
            date: request.date.clone(),
        };
        let weather = self.provider.fetch(&query).await?;

        let id = Uuid::new_v4().to_string();
        self.store
            .insert(&id, WeatherRecord::new(request, weather))
            .await?;

        info!("Stored weather record {}", id);
        Ok(id)
    }

    pub async fn get(&self, id: &str) -> Result<WeatherRecord> {
        match self.store.get(id).await? {
            Some(record) => Ok(record),
            None => {
                debug!("Weather record {} not found", id);
                Err(WeatherError::NotFound("Weather data not found".to_string()))
            }
        }
    }

    pub async fn count(&self) -> Result<usize> {
        self.store.len().await
    }
}

/// Reject blank fields before spending a provider call on them.
/// Values are stored as received, never trimmed.
fn validate(request: &CreateRecordRequest) -> Result<()> {
    if request.date.trim().is_empty() {
        return Err(WeatherError::InvalidRequest("date must not be empty".to_string()));
    }
    if request.location.trim().is_empty() {
        return Err(WeatherError::InvalidRequest(
            "location must not be empty".to_string(),
        ));
    }
    Ok(())
}
