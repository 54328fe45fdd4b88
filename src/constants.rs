//! Application constants for the Forbes EU processor
//!
//! This module contains the fixed column layout of the Forbes Global 2000
//! export, the EU reference set, and the locale/presentation constants
//! shared across the application.

// =============================================================================
// Export File Format
// =============================================================================

/// Field delimiter in the Forbes Global 2000 export
pub const DELIMITER: char = ';';

/// Decimal separator used by the export's locale
pub const DECIMAL_COMMA: char = ',';

/// Decimal separator required for numeric parsing
pub const DECIMAL_POINT: char = '.';

/// Number of columns in a well-formed record
pub const COLUMN_COUNT: usize = 9;

// =============================================================================
// Column Positions
// =============================================================================

/// Positional (0-indexed) column layout of the export
pub mod columns {
    pub const COMPANY: usize = 0;
    pub const INDUSTRY: usize = 1;
    pub const COUNTRY: usize = 2;
    pub const MARKET_VALUE: usize = 3;
    pub const SALES: usize = 4;
    pub const PROFIT: usize = 5;
    pub const ASSETS: usize = 6;
    pub const RANK: usize = 7;
    pub const FORBES_WEBPAGE: usize = 8;
}

// =============================================================================
// EU Reference Set
// =============================================================================

/// EU member states in scope for aggregation
///
/// Membership testing is exact, case-sensitive string equality against the
/// country names as they appear in the export.
pub const EU_MEMBER_STATES: &[&str] = &[
    "Austria",
    "Belgium",
    "Bulgaria",
    "Croatia",
    "Cyprus",
    "Czech Republic",
    "Denmark",
    "Estonia",
    "Finland",
    "France",
    "Germany",
    "Greece",
    "Hungary",
    "Ireland",
    "Italy",
    "Latvia",
    "Lithuania",
    "Luxembourg",
    "Malta",
    "Netherlands",
    "Poland",
    "Portugal",
    "Romania",
    "Slovakia",
    "Slovenia",
    "Spain",
    "Sweden",
    "United Kingdom",
];

// =============================================================================
// Presentation Constants
// =============================================================================

/// Number format hint for market-value display (thousands-grouped integer)
pub const MARKET_VALUE_FORMAT: &str = "###,###";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eu_member_states_count() {
        assert_eq!(EU_MEMBER_STATES.len(), 28);
    }

    #[test]
    fn test_eu_member_states_membership() {
        assert!(EU_MEMBER_STATES.contains(&"Germany"));
        assert!(EU_MEMBER_STATES.contains(&"Czech Republic"));
        assert!(!EU_MEMBER_STATES.contains(&"United States"));
        // Matching is case-sensitive
        assert!(!EU_MEMBER_STATES.contains(&"germany"));
    }

    #[test]
    fn test_column_layout() {
        assert_eq!(columns::COMPANY, 0);
        assert_eq!(columns::MARKET_VALUE, 3);
        assert_eq!(columns::RANK, 7);
        assert_eq!(columns::FORBES_WEBPAGE, COLUMN_COUNT - 1);
    }
}
