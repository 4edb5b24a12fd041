//! Weather Core Library
//!
//! Domain errors and the port traits the weather service is assembled from.

// Re-export pure types from weather-types
pub use weather_types::*;

pub mod error;
pub mod ports;

pub use error::{Result, WeatherError};
pub use ports::{RecordStore, WeatherProvider, WeatherQuery};
