use std::path::PathBuf;

use thiserror::Error;

/// Result type for the data layer.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors raised while loading tables or deriving a view from them.
#[derive(Debug, Error)]
pub enum DataError {
    /// The file could not be opened.
    #[error("cannot read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV syntax error or ragged row.
    #[error("malformed CSV in {table}: {source}")]
    Parse {
        table: String,
        #[source]
        source: csv::Error,
    },

    /// The file has no header row at all.
    #[error("{table} has no header row")]
    NoHeader { table: String },

    /// A column a view depends on does not exist.
    #[error("{table}: missing column '{column}'")]
    MissingColumn { table: String, column: String },

    /// A column exists but holds no values.
    #[error("{table}: column '{column}' has no values")]
    EmptyColumn { table: String, column: String },

    /// A cell cannot be interpreted with the type its view needs.
    #[error("{table} row {row}: column '{column}' expected {expected}, found '{found}'")]
    InvalidValue {
        table: String,
        row: usize,
        column: String,
        expected: &'static str,
        found: String,
    },
}
