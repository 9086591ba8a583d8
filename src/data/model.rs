use std::fmt;

use super::error::{DataError, Result};

// ---------------------------------------------------------------------------
// CellValue – a single cell of a loaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring the common dataframe dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v:.4}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl CellValue {
    /// Interpret the value as an `f64` if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Interpret the value as a whole number. Floats are accepted only when integral.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CellValue::Integer(i) => Some(*i),
            CellValue::Float(v) if v.fract() == 0.0 && v.is_finite() => Some(*v as i64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// Table – one loaded CSV file
// ---------------------------------------------------------------------------

/// A row-oriented table with named columns. Never mutated after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Name used in error messages (usually the file name).
    pub name: String,
    /// Column names in file order.
    pub columns: Vec<String>,
    /// Rows of cells; every row has `columns.len()` cells.
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column, or `MissingColumn`.
    pub fn column_index(&self, column: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| DataError::MissingColumn {
                table: self.name.clone(),
                column: column.to_string(),
            })
    }

    /// Position of a column that must also hold at least one non-null value.
    pub fn required_column(&self, column: &str) -> Result<usize> {
        let idx = self.column_index(column)?;
        if self.rows.iter().all(|row| row[idx].is_null()) {
            return Err(DataError::EmptyColumn {
                table: self.name.clone(),
                column: column.to_string(),
            });
        }
        Ok(idx)
    }

    /// Build an `InvalidValue` error for the given cell.
    pub fn invalid(&self, row: usize, col: usize, expected: &'static str) -> DataError {
        let found = match &self.rows[row][col] {
            CellValue::Null => "<null>".to_string(),
            other => other.to_string(),
        };
        DataError::InvalidValue {
            table: self.name.clone(),
            row,
            column: self.columns[col].clone(),
            expected,
            found,
        }
    }
}
