//! Error type for table operations

use thiserror::Error;

use aquachem_units::QuantityError;

/// Errors produced by the tabular layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error(transparent)]
    Quantity(#[from] QuantityError),

    #[error("column '{column}' has {actual} rows, table has {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("no column named '{name}'")]
    UnknownColumn { name: String },

    #[error("column '{column}': expected a {expected} column, got {actual}")]
    ColumnType {
        column: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("cannot build a column from an empty quantity list")]
    EmptyColumn,

    #[error("tables have different columns: {left:?} vs {right:?}")]
    ColumnSetMismatch { left: Vec<String>, right: Vec<String> },

    #[error("filter mask has {mask_len} entries, table has {rows} rows")]
    MaskLength { mask_len: usize, rows: usize },
}
