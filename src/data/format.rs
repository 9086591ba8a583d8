use super::error::Result;
use super::model::{CellValue, Table};

/// Columns shown with a fixed number of decimals: (column, decimals).
pub const POLICY_FORMATS: [(&str, usize); 3] = [
    ("HCES_Consumption", 0),
    ("CPI_Stability", 2),
    ("Regional_Dev_Index", 3),
];

/// Decimals for float columns without an explicit format.
pub const DEFAULT_FLOAT_DECIMALS: usize = 6;

/// Display strings for a table. The source table is left untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Format a cell with a fixed number of decimals.
///
/// Integers and floats both go through `f64`; `0` decimals prints a rounded
/// whole number without a decimal point.
pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Apply the per-column display formats to the policy table.
///
/// The formatted columns must exist. Floats elsewhere get
/// [`DEFAULT_FLOAT_DECIMALS`]; other cells use their plain rendering.
pub fn format_policy_table(table: &Table) -> Result<FormattedTable> {
    let mut precision: Vec<Option<usize>> = vec![None; table.columns.len()];
    for (column, decimals) in POLICY_FORMATS {
        precision[table.column_index(column)?] = Some(decimals);
    }

    let mut rows = Vec::with_capacity(table.len());
    for (row_no, row) in table.rows.iter().enumerate() {
        let mut cells = Vec::with_capacity(row.len());
        for (col, cell) in row.iter().enumerate() {
            let text = match (precision[col], cell) {
                (_, CellValue::Null) => String::new(),
                (Some(decimals), cell) => match cell.as_f64() {
                    Some(v) => fixed(v, decimals),
                    None => return Err(table.invalid(row_no, col, "a number")),
                },
                (None, CellValue::Float(v)) => fixed(*v, DEFAULT_FLOAT_DECIMALS),
                (None, cell) => cell.to_string(),
            };
            cells.push(text);
        }
        rows.push(cells);
    }

    Ok(FormattedTable {
        columns: table.columns.clone(),
        rows,
    })
}
