//! Business logic services

pub mod records;
pub mod weatherstack;

pub use records::RecordService;
pub use weatherstack::WeatherstackProvider;
