//! DynamoDB storage backend implementation.
//!
//! Todos live in a single table keyed by the string attribute `id`. All other
//! attributes are plain top-level attributes of the item.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
