//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod aggregate_root;
pub mod list_response;
pub mod person;

// Re-exports
pub use aggregate_id::AggregateId;
pub use aggregate_root::AggregateRoot;
pub use list_response::{ApiErrorBody, ListResponse, PageQuery};
pub use person::{MultipartFields, PersonProfile};
