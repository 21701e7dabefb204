//! # Report Output
//!
//! The output side of the pipeline. Each sink consumes a finished
//! `MetricsReport` independently of the others:
//!
//! - `render_table`: the interactive, human-readable table.
//! - `export_csv` / `write_csv`: the two-column `Parameter,Value` file (`output.csv`).
//! - `export_json` / `to_json`: the same report keyed by metric label.
//! - `read_csv`: parses a previous CSV export back into `(Metric, f64)` pairs.
//!
//! Non-finite values are never an error here. They are written as `NaN`,
//! `Infinity` and `-Infinity` in text formats and as `null` in JSON.

// Declare the modules that constitute this crate.
pub mod error;
pub mod export;
pub mod table;

// Re-export the key components to create a clean, public-facing API.
pub use error::ExportError;
pub use export::{
    DEFAULT_EXPORT_FILE, EXPORT_HEADER, export, export_csv, export_json, read_csv, to_csv_string,
    to_json, write_csv,
};
pub use table::render_table;
