//! Forbes EU Processor Library
//!
//! A Rust library for mining European Union statistics from the Forbes
//! Global 2000 list of the world's largest public companies.
//!
//! This library provides tools for:
//! - Parsing the semicolon-delimited Forbes Global 2000 export with proper
//!   header/data handling
//! - Normalizing locale-specific decimal separators before numeric parsing
//! - Filtering companies down to a fixed reference set of EU member states
//! - Folding retained companies into per-country count, market-value, and
//!   best-rank aggregates with presentation-ready sort orders

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod eu_aggregator;
        pub mod forbes_loader;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ColumnType, Row, Schema, Table, Value};
pub use app::services::eu_aggregator::{EuAggregates, EuReferenceSet};
pub use app::services::forbes_loader::{DatasetLoader, LoadResult, LoadStats};
pub use config::Config;

/// Result type alias for the Forbes EU processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Forbes Global 2000 processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A data line's field count does not match the schema
    #[error("malformed record at line {line_number}: expected {expected} fields, found {found}")]
    MalformedRecord {
        line_number: usize,
        expected: usize,
        found: usize,
    },

    /// A numeric column failed to parse after normalization
    #[error("type conversion failed for column '{column}': '{value}' is not a valid {expected}")]
    TypeConversion {
        column: String,
        value: String,
        expected: &'static str,
    },

    /// Caller-supplied column range lies outside the field bounds
    #[error("column range {from}..{to} out of bounds for {len} fields")]
    ColumnRange { from: usize, to: usize, len: usize },

    /// Row access with the wrong type or an out-of-bounds position
    #[error("schema mismatch at column {position}: {message}")]
    SchemaMismatch { position: usize, message: String },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a malformed record error for a 1-based line number
    pub fn malformed_record(line_number: usize, expected: usize, found: usize) -> Self {
        Self::MalformedRecord {
            line_number,
            expected,
            found,
        }
    }

    /// Create a type conversion error
    pub fn type_conversion(
        column: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::TypeConversion {
            column: column.into(),
            value: value.into(),
            expected,
        }
    }

    /// Create a column range error
    pub fn column_range(from: usize, to: usize, len: usize) -> Self {
        Self::ColumnRange { from, to, len }
    }

    /// Create a schema mismatch error
    pub fn schema_mismatch(position: usize, message: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            position,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
