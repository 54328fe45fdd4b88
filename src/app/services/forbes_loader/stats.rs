//! Load statistics and result structures
//!
//! Types for tracking load outcomes and organizing the parsed table for
//! downstream aggregation.

use serde::{Deserialize, Serialize};

use crate::app::models::Table;

/// Result of loading the export: the typed table plus load statistics
#[derive(Debug, Clone, Default)]
pub struct LoadResult {
    /// Typed in-memory table of successfully parsed records
    pub table: Table,

    /// Load statistics
    pub stats: LoadStats,
}

impl LoadResult {
    /// Empty result used when the source is missing or has no lines
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Simple load statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadStats {
    /// Total number of data records encountered (header excluded)
    pub total_records: usize,

    /// Number of rows successfully parsed into the table
    pub rows_loaded: usize,

    /// Number of records skipped due to errors
    pub records_skipped: usize,

    /// List of per-record errors for debugging
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_records: 0,
            rows_loaded: 0,
            records_skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.rows_loaded as f64 / self.total_records as f64) * 100.0
        }
    }

    /// Check if the load was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}
