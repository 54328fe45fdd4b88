//! Data model for the Forbes Global 2000 table.
//!
//! The export is loaded into a typed [`Schema`]/[`Row`]/[`Table`] model:
//! string fields are converted to their declared types once at load time
//! and exposed through positional typed accessors afterwards. The table is
//! append-only during the load phase and read-only once built.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Data type of a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    /// Pass-through string column
    Str,
    /// Floating-point column, parsed after locale normalization
    Float,
    /// Integer column
    Int,
}

impl ColumnType {
    /// Human-readable name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::Str => "string",
            ColumnType::Float => "float",
            ColumnType::Int => "integer",
        }
    }
}

/// A named, typed column definition
///
/// The name comes from the export header, the type from the fixed column
/// type table of the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    column_type: ColumnType,
}

impl Column {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }
}

/// Ordered column declaration shared by every row of a table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Bind header names to a fixed type table, position by position.
    ///
    /// Fails when the header arity does not match the type table, since no
    /// meaningful column binding is possible in that case.
    pub fn bind(names: &[&str], types: &[ColumnType]) -> Result<Self> {
        if names.len() != types.len() {
            return Err(Error::malformed_record(1, types.len(), names.len()));
        }
        let columns = names
            .iter()
            .zip(types.iter())
            .map(|(name, &column_type)| Column::new(*name, column_type))
            .collect();
        Ok(Self { columns })
    }

    pub fn column(&self, position: usize) -> Option<&Column> {
        self.columns.get(position)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// A single typed field value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Float(f64),
    Int(i32),
}

impl Value {
    /// Human-readable type name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Float(_) => "float",
            Value::Int(_) => "integer",
        }
    }
}

/// One typed record aligned to a [`Schema`]
///
/// Immutable once constructed. Accessors are positional and fail with a
/// schema mismatch when the position is out of bounds or holds a value of
/// a different type.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// String value at `position`
    pub fn get_str(&self, position: usize) -> Result<&str> {
        match self.value(position)? {
            Value::Str(s) => Ok(s),
            other => Err(Error::schema_mismatch(
                position,
                format!("expected string, found {}", other.type_name()),
            )),
        }
    }

    /// Float value at `position`
    pub fn get_float(&self, position: usize) -> Result<f64> {
        match self.value(position)? {
            Value::Float(v) => Ok(*v),
            other => Err(Error::schema_mismatch(
                position,
                format!("expected float, found {}", other.type_name()),
            )),
        }
    }

    /// Integer value at `position`
    pub fn get_int(&self, position: usize) -> Result<i32> {
        match self.value(position)? {
            Value::Int(v) => Ok(*v),
            other => Err(Error::schema_mismatch(
                position,
                format!("expected integer, found {}", other.type_name()),
            )),
        }
    }

    fn value(&self, position: usize) -> Result<&Value> {
        self.values.get(position).ok_or_else(|| {
            Error::schema_mismatch(
                position,
                format!("no column at position (row has {} fields)", self.values.len()),
            )
        })
    }
}

/// An ordered sequence of rows sharing one schema
///
/// Append-only during the load phase, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Table {
    schema: Schema,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            rows: Vec::new(),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Append a row, enforcing the schema arity invariant.
    pub fn push(&mut self, row: Row) -> Result<()> {
        if row.len() != self.schema.len() {
            return Err(Error::schema_mismatch(
                self.schema.len(),
                format!(
                    "row has {} fields but the schema declares {} columns",
                    row.len(),
                    self.schema.len()
                ),
            ));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
