//! Test doubles shared by the server's unit tests

use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use weather_core::{Result, WeatherError, WeatherProvider, WeatherQuery};

use crate::services::RecordService;
use crate::storage::MemoryStore;
use crate::AppState;

pub enum Reply {
    Payload(Value),
    Unavailable,
    Rejected(String),
}

/// Provider that answers every query with a fixed reply
pub struct StubProvider {
    reply: Reply,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherProvider for StubProvider {
    async fn fetch(&self, _query: &WeatherQuery) -> Result<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Reply::Payload(value) => Ok(value.clone()),
            Reply::Unavailable => Err(WeatherError::ProviderUnavailable(
                "Failed to fetch weather data".to_string(),
            )),
            Reply::Rejected(info) => Err(WeatherError::ProviderRejected(info.clone())),
        }
    }
}

/// App state over a fresh store and the given provider
pub fn state_with(provider: Arc<StubProvider>) -> AppState {
    AppState {
        records: Arc::new(RecordService::new(Arc::new(MemoryStore::new()), provider)),
    }
}
