//! Storage layer
//!
//! Records live in a DashMap for the lifetime of the process.

pub mod memory;

pub use memory::MemoryStore;
