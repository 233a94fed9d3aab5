//! Functional core for the todoapi project.
//!
//! Domain types, request parsing and validation, response envelopes and the
//! storage contract. Nothing in this crate performs I/O.

pub mod serde;
pub mod storage;
pub mod todo;
