//! Response bodies

use serde::{Deserialize, Serialize};

/// Body returned by `POST /weather`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRecordResponse {
    pub id: String,
}

/// JSON error body.
///
/// `detail` carries the human readable message, `code` a stable
/// machine readable tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub records: usize,
}
