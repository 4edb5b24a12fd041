//! In-memory record store using DashMap

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use weather_core::{RecordStore, Result, WeatherError, WeatherRecord};

/// Process-lifetime record store. No eviction, no size bound.
pub struct MemoryStore {
    records: DashMap<String, WeatherRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert(&self, id: &str, record: WeatherRecord) -> Result<()> {
        match self.records.entry(id.to_string()) {
            Entry::Occupied(_) => Err(WeatherError::Storage(format!(
                "Record {} already exists",
                id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn get(&self, id: &str) -> Result<Option<WeatherRecord>> {
        Ok(self.records.get(id).map(|entry| entry.value().clone()))
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.records.len())
    }
}
