//! Weather Types - Pure type definitions shared by the weather service
//!
//! This crate contains only serde data types with no async runtime
//! dependencies.

pub mod record;
pub mod response;

pub use record::*;
pub use response::*;
