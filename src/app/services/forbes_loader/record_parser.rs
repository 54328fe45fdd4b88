//! Line splitting and typed row construction
//!
//! Handles the terminator strip and delimiter split of raw export lines,
//! plus the one-time conversion of string fields into their declared
//! column types.

use crate::app::models::{ColumnType, Row, Schema, Value};
use crate::{Error, Result};

/// Strip the trailing line terminator from a raw line.
///
/// The export terminates every line with a single character that is not
/// part of the data: a trailing delimiter on the original export, or a
/// carriage return on CRLF sources. At most one terminator of each kind is
/// removed, so unterminated lines pass through unchanged.
pub fn strip_terminator(line: &str, delimiter: char) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.strip_suffix(delimiter).unwrap_or(line)
}

/// Split a raw line into string fields, enforcing the schema arity.
///
/// `line_number` is 1-based and only used for error reporting.
pub fn parse_line(
    line: &str,
    delimiter: char,
    expected_fields: usize,
    line_number: usize,
) -> Result<Vec<String>> {
    let stripped = strip_terminator(line, delimiter);
    let fields: Vec<String> = stripped.split(delimiter).map(str::to_string).collect();

    if fields.len() != expected_fields {
        return Err(Error::malformed_record(
            line_number,
            expected_fields,
            fields.len(),
        ));
    }

    Ok(fields)
}

/// Convert string fields into a typed row per the schema.
///
/// String columns pass through unchanged; float and integer columns fail
/// with [`Error::TypeConversion`] on non-numeric content.
pub fn build_row(fields: Vec<String>, schema: &Schema) -> Result<Row> {
    if fields.len() != schema.len() {
        return Err(Error::schema_mismatch(
            schema.len(),
            format!(
                "{} fields for a schema of {} columns",
                fields.len(),
                schema.len()
            ),
        ));
    }

    let mut values = Vec::with_capacity(fields.len());
    for (position, field) in fields.into_iter().enumerate() {
        // Arity was checked above, the position is always declared
        let column = schema
            .column(position)
            .ok_or_else(|| Error::schema_mismatch(position, "column not declared"))?;

        let value = match column.column_type() {
            ColumnType::Str => Value::Str(field),
            ColumnType::Float => Value::Float(parse_float(column.name(), &field)?),
            ColumnType::Int => Value::Int(parse_int(column.name(), &field)?),
        };
        values.push(value);
    }

    Ok(Row::new(values))
}

fn parse_float(column: &str, field: &str) -> Result<f64> {
    field
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::type_conversion(column, field, "float"))
}

fn parse_int(column: &str, field: &str) -> Result<i32> {
    field
        .trim()
        .parse::<i32>()
        .map_err(|_| Error::type_conversion(column, field, "integer"))
}
