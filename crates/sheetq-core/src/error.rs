use std::path::PathBuf;

use thiserror::Error;

/// Fatal workbook-load failures; these abort startup before serving
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open workbook {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("failed to read sheet '{sheet}': {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },
}

/// Recoverable per-request lookup failures.
///
/// Both variants carry the full list of valid names so callers can see
/// what they could have asked for.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("Table '{name}' not found. Available tables: {available:?}")]
    TableNotFound { name: String, available: Vec<String> },

    #[error("Row '{row}' not found in table '{table}'. Available rows: {available:?}")]
    RowNotFound {
        table: String,
        row: String,
        available: Vec<String>,
    },
}
