//! Test utilities for the Forbes Global 2000 loader
//!
//! Provides common fixtures and helper functions used across the loader
//! test modules.

use std::io::Write;

use tempfile::NamedTempFile;

mod record_parser_tests;

/// Helper to create a complete test export with the original trailing
/// delimiter terminator on every line
pub fn create_test_export() -> String {
    [
        "Company;Industry;Country;Market Value;Sales;Profit;Assets;Rank;Url;",
        "Acme Corp;Banking;Germany;12,3;45,6;1,2;99,9;42;http://acme.example;",
        "Globex;Retail;France;20,0;1,0;1,0;1,0;3;http://globex.example;",
        "Initech;Software;United States;500,0;90,0;12,0;300,0;1;http://initech.example;",
        "Umbrella;Pharma;Germany;7,5;2,0;0,5;4,0;7;http://umbrella.example;",
    ]
    .join("\n")
}

/// Helper to create export lines without any trailing terminator
pub fn create_unterminated_export() -> String {
    [
        "Company;Industry;Country;Market Value;Sales;Profit;Assets;Rank;Url",
        "Acme Corp;Banking;Germany;12,3;45,6;1,2;99,9;42;http://acme.example",
    ]
    .join("\n")
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
