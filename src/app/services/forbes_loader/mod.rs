//! Loader for the semicolon-delimited Forbes Global 2000 export
//!
//! Turns the raw export text into a typed in-memory [`Table`](crate::Table).
//! The first line is the header naming the nine columns; every following
//! line is a data record whose numeric columns are normalized from the
//! export's comma decimal separator before typed parsing.
//!
//! ## Architecture
//!
//! - [`loader`] - Load orchestration and header binding
//! - [`normalizer`] - Locale decimal-separator substitution
//! - [`record_parser`] - Line splitting and typed row construction
//! - [`stats`] - Load statistics and result structures

pub mod loader;
pub mod normalizer;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use loader::DatasetLoader;
pub use stats::{LoadResult, LoadStats};
