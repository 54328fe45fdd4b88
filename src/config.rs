//! Configuration for the load pipeline.
//!
//! Provides the loader configuration covering the delimiter and the
//! locale decimal-separator conversion applied to numeric columns.

use crate::constants::{DECIMAL_COMMA, DECIMAL_POINT, DELIMITER};
use serde::{Deserialize, Serialize};

/// Configuration for loading the Forbes Global 2000 export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Field delimiter between columns
    pub delimiter: char,

    /// Decimal separator found in the export's numeric columns
    pub decimal_separator: char,

    /// Decimal separator substituted before numeric parsing
    pub normalized_separator: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: DELIMITER,
            decimal_separator: DECIMAL_COMMA,
            normalized_separator: DECIMAL_POINT,
        }
    }
}

impl Config {
    /// Create configuration with a custom field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Create configuration with a custom source decimal separator
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }
}
