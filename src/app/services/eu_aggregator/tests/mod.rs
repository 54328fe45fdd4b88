//! Test utilities for the EU aggregator
//!
//! Provides a small typed table fixture shared across the aggregator test
//! modules.

use crate::app::models::{Column, ColumnType, Row, Schema, Table, Value};

// Test modules
mod aggregate_tests;

/// Build the nine-column export schema used by the fixtures
pub fn test_schema() -> Schema {
    Schema::new(vec![
        Column::new("Company", ColumnType::Str),
        Column::new("Industry", ColumnType::Str),
        Column::new("Country", ColumnType::Str),
        Column::new("Market Value", ColumnType::Float),
        Column::new("Sales", ColumnType::Float),
        Column::new("Profit", ColumnType::Float),
        Column::new("Assets", ColumnType::Float),
        Column::new("Rank", ColumnType::Int),
        Column::new("Url", ColumnType::Str),
    ])
}

/// Build one typed company row
pub fn company_row(company: &str, country: &str, market_value: f64, rank: i32) -> Row {
    Row::new(vec![
        Value::Str(company.to_string()),
        Value::Str("Industry".to_string()),
        Value::Str(country.to_string()),
        Value::Float(market_value),
        Value::Float(1.0),
        Value::Float(1.0),
        Value::Float(1.0),
        Value::Int(rank),
        Value::Str("http://example.com".to_string()),
    ])
}

/// Build a table from (company, country, market value, rank) tuples
pub fn company_table(rows: &[(&str, &str, f64, i32)]) -> Table {
    let mut table = Table::new(test_schema());
    for &(company, country, market_value, rank) in rows {
        table
            .push(company_row(company, country, market_value, rank))
            .unwrap();
    }
    table
}
