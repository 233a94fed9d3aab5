//! In-memory storage backend.
//!
//! Stores todos in a `HashMap` wrapped in `Arc<RwLock<_>>`. Data is not
//! persisted and is lost when the process exits.
//!
//! # Example
//!
//! ```rust,ignore
//! use todoapi::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for development or tests...
//! ```

mod repository;

pub use repository::InMemoryRepository;
