use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to access report file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write report: {0}")]
    Write(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Report is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Unexpected report header '{0}', expected 'Parameter,Value'")]
    UnexpectedHeader(String),

    #[error("Unknown metric '{0}'")]
    UnknownMetric(String),

    #[error("Value '{value}' of metric '{metric}' is not a number")]
    InvalidValue { metric: String, value: String },
}
