//! Load orchestration for the Forbes Global 2000 export
//!
//! Reads the whole source once, binds the header to the fixed column type
//! table, and parses every data line into the typed table. Bad records are
//! skipped and counted; a missing source degrades to an empty table.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use super::normalizer::replace_between_columns;
use super::record_parser::{build_row, parse_line, strip_terminator};
use super::stats::{LoadResult, LoadStats};
use crate::app::models::{ColumnType, Row, Schema, Table};
use crate::config::Config;
use crate::constants::{columns, COLUMN_COUNT};
use crate::Result;

/// Fixed column types of the export; the names are taken from the header
/// at load time.
const COLUMN_TYPES: [ColumnType; COLUMN_COUNT] = [
    ColumnType::Str,   // company
    ColumnType::Str,   // industry
    ColumnType::Str,   // country
    ColumnType::Float, // market value
    ColumnType::Float, // sales
    ColumnType::Float, // profit
    ColumnType::Float, // assets
    ColumnType::Int,   // rank
    ColumnType::Str,   // webpage
];

/// Loader that turns raw export lines into a typed in-memory table
#[derive(Debug, Clone, Default)]
pub struct DatasetLoader {
    config: Config,
}

impl DatasetLoader {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Load the export from a file.
    ///
    /// A missing or unreadable source is not fatal: the loader logs a
    /// warning and returns an empty table, so downstream aggregates come
    /// out empty instead of crashing the caller.
    pub fn load_file(&self, path: &Path) -> Result<LoadResult> {
        match fs::read_to_string(path) {
            Ok(content) => self.load_lines(content.lines()),
            Err(error) => {
                warn!(
                    "source unavailable at '{}' ({}), proceeding with empty table",
                    path.display(),
                    error
                );
                Ok(LoadResult::empty())
            }
        }
    }

    /// Load the export from raw lines; the first line is the header.
    ///
    /// An empty input yields an empty table. A header whose arity does not
    /// match the fixed column layout aborts the load, while individual bad
    /// data lines are skipped and recorded in the statistics.
    pub fn load_lines<'a, I>(&self, lines: I) -> Result<LoadResult>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut lines = lines.into_iter();
        let mut stats = LoadStats::new();

        let header = match lines.next() {
            Some(header) => header,
            None => {
                debug!("no header line in source, returning empty table");
                return Ok(LoadResult::empty());
            }
        };

        let schema = self.bind_header(header)?;
        let mut table = Table::new(schema);

        for (offset, line) in lines.enumerate() {
            // 1-based source line number, header is line 1
            let line_number = offset + 2;
            stats.total_records += 1;

            match self.parse_data_line(line, line_number, table.schema()) {
                Ok(row) => {
                    table.push(row)?;
                    stats.rows_loaded += 1;
                }
                Err(error) => {
                    debug!("skipping record: {}", error);
                    stats.records_skipped += 1;
                    stats.errors.push(error.to_string());
                }
            }
        }

        info!(
            "loaded {} of {} records ({} skipped)",
            stats.rows_loaded, stats.total_records, stats.records_skipped
        );

        Ok(LoadResult { table, stats })
    }

    /// Bind header names to the fixed column type table.
    fn bind_header(&self, header: &str) -> Result<Schema> {
        let stripped = strip_terminator(header, self.config.delimiter);
        let names: Vec<&str> = stripped.split(self.config.delimiter).collect();
        Schema::bind(&names, &COLUMN_TYPES)
    }

    /// Normalize and parse one data line into a typed row.
    fn parse_data_line(&self, line: &str, line_number: usize, schema: &Schema) -> Result<Row> {
        let mut fields = parse_line(line, self.config.delimiter, schema.len(), line_number)?;

        // Locale decimal fix for the numeric columns
        replace_between_columns(
            &mut fields,
            columns::MARKET_VALUE,
            columns::FORBES_WEBPAGE,
            self.config.decimal_separator,
            self.config.normalized_separator,
        )?;

        build_row(fields, schema)
    }
}
