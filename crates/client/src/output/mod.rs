//! Output formatting functions.
//!
//! `--format json` prints the API payload as compact JSON. `--format pretty`
//! uses the type-specific formatters in [`pretty`].

pub mod json;
pub mod pretty;

pub use json::format_json;
