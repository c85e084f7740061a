//! Common types and traits for catalog entities

pub mod aggregate_id;

// Re-exports
pub use aggregate_id::AggregateId;
