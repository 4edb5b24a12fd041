//! Storage trait for weather records

use crate::Result;
use async_trait::async_trait;
use weather_types::WeatherRecord;

/// Record store.
///
/// Records are written once and never updated or removed. `insert` must
/// fail with `WeatherError::Storage` when `id` is already taken.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert(&self, id: &str, record: WeatherRecord) -> Result<()>;
    async fn get(&self, id: &str) -> Result<Option<WeatherRecord>>;
    async fn len(&self) -> Result<usize>;
}
