//! # Trade Log Loader
//!
//! Reads the tabular trade log (one row per closed trade, rows in chronological
//! order) into a `TradeLog`. Only the `Entry Price` and `Exit Price` columns are
//! required; any other columns are ignored.
//!
//! Every input problem is fatal: the loader either returns the complete log or
//! a `LoadError`, never a partial result.

pub mod error;

pub use error::LoadError;

use core_types::{TradeLog, TradeRecord};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::Path;
use std::str::FromStr;

pub const ENTRY_PRICE_COLUMN: &str = "Entry Price";
pub const EXIT_PRICE_COLUMN: &str = "Exit Price";

/// Loads a trade log from a CSV file on disk.
pub fn load_trade_log<P: AsRef<Path>>(path: P) -> Result<TradeLog, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let log = read_trade_log(file)?;
    tracing::info!(path = %path.display(), trades = log.len(), "Loaded trade log.");
    Ok(log)
}

/// Reads a trade log from any CSV source with a header row.
pub fn read_trade_log<R: io::Read>(source: R) -> Result<TradeLog, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let entry_idx = column_index(&headers, ENTRY_PRICE_COLUMN)?;
    let exit_idx = column_index(&headers, EXIT_PRICE_COLUMN)?;

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row?;
        // Data rows are numbered from 1, the header is not counted.
        let row_number = i + 1;

        let entry = parse_price(&row, entry_idx, ENTRY_PRICE_COLUMN, row_number)?;
        let exit = parse_price(&row, exit_idx, EXIT_PRICE_COLUMN, row_number)?;
        let record = TradeRecord::new(entry, exit).map_err(|source| LoadError::InvalidRecord {
            row: row_number,
            source,
        })?;
        records.push(record);
    }

    tracing::debug!(rows = records.len(), "Parsed trade log rows.");
    Ok(TradeLog::new(records))
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
}

fn parse_price(
    row: &csv::StringRecord,
    idx: usize,
    column: &str,
    row_number: usize,
) -> Result<Decimal, LoadError> {
    let raw = row.get(idx).unwrap_or_default();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| LoadError::InvalidPrice {
            row: row_number,
            column: column.to_string(),
            value: raw.to_string(),
        })
}
