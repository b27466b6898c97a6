//! Error types

use thiserror::Error;

/// Errors raised when a sort cannot be carried out.
///
/// Validation happens before anything is mutated, so a table is left exactly
/// as it was when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// No table is registered under the given identifier.
    #[error("table not found: {id}")]
    TableNotFound { id: String },

    /// The column index is not within the header row.
    #[error("column {column} out of range (table has {columns} columns)")]
    ColumnOutOfRange { column: usize, columns: usize },

    /// A data row has no cell at the sorted column.
    ///
    /// `row` is the zero-based data row index, header excluded.
    #[error("row {row} has {cells} cells, cannot read column {column}")]
    MalformedRow {
        row: usize,
        cells: usize,
        column: usize,
    },

    /// A row order is not a permutation of the table's rows.
    #[error("order of {len} indices is not a permutation of {rows} rows")]
    InvalidOrder { len: usize, rows: usize },
}

impl SortError {
    /// Creates a table-not-found error.
    pub fn table_not_found(id: impl Into<String>) -> Self {
        Self::TableNotFound { id: id.into() }
    }

    /// Returns true if the error was caused by the caller's column index.
    pub fn is_column_error(&self) -> bool {
        matches!(self, Self::ColumnOutOfRange { .. })
    }
}
