use core_types::CoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open trade log '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed CSV in trade log: {0}")]
    Csv(#[from] csv::Error),

    #[error("Trade log is missing the required column '{0}'")]
    MissingColumn(String),

    #[error("Row {row}: '{value}' in column '{column}' is not a valid price")]
    InvalidPrice {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Row {row}: {source}")]
    InvalidRecord { row: usize, source: CoreError },
}
