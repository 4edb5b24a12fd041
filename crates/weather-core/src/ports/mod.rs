//! Port traits (interfaces) for dependency injection

pub mod provider;
pub mod storage;

pub use provider::{WeatherProvider, WeatherQuery};
pub use storage::RecordStore;
