//! Locale normalization for numeric fields
//!
//! The export writes decimal values with a comma separator. This module
//! substitutes the separator in place over a fixed column range before the
//! fields are handed to numeric parsing.

use crate::{Error, Result};

/// Replace every occurrence of `old_char` with `new_char` in the fields of
/// the half-open column range `[from_column, to_column)`.
///
/// Fields outside the range are left untouched. The range must satisfy
/// `from_column <= to_column <= fields.len()`; an out-of-range request
/// fails with [`Error::ColumnRange`] instead of silently corrupting data.
pub fn replace_between_columns(
    fields: &mut [String],
    from_column: usize,
    to_column: usize,
    old_char: char,
    new_char: char,
) -> Result<()> {
    if from_column > to_column || to_column > fields.len() {
        return Err(Error::column_range(from_column, to_column, fields.len()));
    }

    for field in &mut fields[from_column..to_column] {
        if field.contains(old_char) {
            *field = field.replace(old_char, &new_char.to_string());
        }
    }

    Ok(())
}
