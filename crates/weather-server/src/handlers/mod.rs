//! HTTP handlers

pub mod health;
pub mod weather;

pub use health::health;
