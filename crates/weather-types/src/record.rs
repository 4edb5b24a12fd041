//! Weather record types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /weather`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecordRequest {
    pub date: String,
    pub location: String,
    /// Free text, absent and `null` both mean empty
    #[serde(default)]
    pub notes: Option<String>,
}

impl CreateRecordRequest {
    pub fn new(date: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            location: location.into(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// A stored weather lookup.
///
/// The identifier is the key the record is stored under and is not part
/// of the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub date: String,
    pub location: String,
    pub notes: String,
    /// Provider payload, kept verbatim
    pub weather: Value,
}

impl WeatherRecord {
    pub fn new(request: CreateRecordRequest, weather: Value) -> Self {
        Self {
            date: request.date,
            location: request.location,
            notes: request.notes.unwrap_or_default(),
            weather,
        }
    }
}
