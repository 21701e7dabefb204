use crate::error::ExportError;
use analytics::{Metric, MetricsReport};
use configuration::ExportFormat;
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// File name of the downloadable report artifact.
pub const DEFAULT_EXPORT_FILE: &str = "output.csv";

/// Header row of the CSV export.
pub const EXPORT_HEADER: [&str; 2] = ["Parameter", "Value"];

/// Writes the report to `path` in the requested format.
pub fn export(report: &MetricsReport, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv => export_csv(report, path),
        ExportFormat::Json => export_json(report, path),
    }
}

/// Writes the two-column `Parameter,Value` CSV to `path`.
pub fn export_csv(report: &MetricsReport, path: &Path) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv(report, file)?;

    tracing::info!(path = %path.display(), "Exported report as CSV.");
    Ok(())
}

/// Writes the CSV export to any writer: header row, then one row per metric.
pub fn write_csv<W: io::Write>(report: &MetricsReport, writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(EXPORT_HEADER)?;

    for (metric, value) in report.entries() {
        let value = value.to_string();
        wtr.write_record([metric.label(), value.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

/// The CSV export as an in-memory string.
pub fn to_csv_string(report: &MetricsReport) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(report, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Parses a CSV export back into `(Metric, value)` pairs, in file order.
pub fn read_csv<R: io::Read>(source: R) -> Result<Vec<(Metric, f64)>, ExportError> {
    let mut reader = csv::Reader::from_reader(source);

    let headers = reader.headers()?;
    if headers.iter().ne(EXPORT_HEADER) {
        return Err(ExportError::UnexpectedHeader(
            headers.iter().collect::<Vec<_>>().join(","),
        ));
    }

    let mut entries = Vec::with_capacity(Metric::ALL.len());
    for row in reader.records() {
        let row = row?;
        let label = row.get(0).unwrap_or_default();
        let raw = row.get(1).unwrap_or_default();

        let metric =
            Metric::from_label(label).ok_or_else(|| ExportError::UnknownMetric(label.to_string()))?;
        let value = raw.parse::<f64>().map_err(|_| ExportError::InvalidValue {
            metric: label.to_string(),
            value: raw.to_string(),
        })?;
        entries.push((metric, value));
    }

    Ok(entries)
}

/// The report as pretty-printed JSON keyed by metric label.
pub fn to_json(report: &MetricsReport) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Writes the JSON export to `path`.
pub fn export_json(report: &MetricsReport, path: &Path) -> Result<(), ExportError> {
    let json = to_json(report)?;
    fs::write(path, json).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "Exported report as JSON.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn scenario_a() -> MetricsReport {
        MetricsReport {
            total_trades: 2,
            profitable_trades: 1,
            loss_making_trades: 1,
            win_rate: 0.5,
            average_profit_per_trade: 10.0,
            average_loss_per_trade: -10.0,
            risk_reward_ratio: -1.0,
            expectancy: 10.0,
            average_ror_per_trade: 0.0,
            sharpe_ratio: -0.35355339059327373,
            max_drawdown: -0.09999999999999991,
            max_drawdown_percentage: -9.999999999999991,
            cagr: 0.0,
            calmar_ratio: -0.0,
        }
    }

    fn same(a: f64, b: f64) -> bool {
        (a.is_nan() && b.is_nan()) || a == b
    }

    #[test]
    fn csv_has_header_and_fixed_rows() {
        let csv = to_csv_string(&scenario_a()).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines.len(), 15);
        assert_eq!(lines[0], "Parameter,Value");
        assert_eq!(lines[1], "Total Trades,2");
        assert_eq!(lines[4], "Win Rate,0.5");
        assert_eq!(lines[6], "Average Loss per Trade,-10");
        assert_eq!(lines[14], "Calmar Ratio,-0");
    }

    #[test]
    fn non_finite_values_are_written_as_text() {
        let mut report = scenario_a();
        report.sharpe_ratio = f64::NAN;
        report.calmar_ratio = f64::INFINITY;
        report.risk_reward_ratio = f64::NEG_INFINITY;

        let csv = to_csv_string(&report).unwrap();
        assert!(csv.contains("Sharpe Ratio,NaN\n"));
        assert!(csv.contains("Calmar Ratio,Infinity\n"));
        assert!(csv.contains("Risk Reward Ratio,-Infinity\n"));

        let parsed = read_csv(csv.as_bytes()).unwrap();
        assert!(parsed[9].1.is_nan());
        assert_eq!(parsed[13].1, f64::INFINITY);
        assert_eq!(parsed[6].1, f64::NEG_INFINITY);
    }

    #[test]
    fn read_rejects_foreign_files() {
        let err = read_csv("Name,Amount\nTotal Trades,2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ExportError::UnexpectedHeader(_)));

        let err = read_csv("Parameter,Value\nSortino Ratio,1.2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ExportError::UnknownMetric(ref m) if m == "Sortino Ratio"));

        let err = read_csv("Parameter,Value\nCAGR,high\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ExportError::InvalidValue { .. }));
    }

    #[test]
    fn exports_to_disk_in_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join(DEFAULT_EXPORT_FILE);
        let json_path = dir.path().join("output.json");

        export(&scenario_a(), &csv_path, ExportFormat::Csv).unwrap();
        export(&scenario_a(), &json_path, ExportFormat::Json).unwrap();

        let parsed = read_csv(File::open(&csv_path).unwrap()).unwrap();
        assert_eq!(parsed.len(), 14);

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(json["Total Trades"], 2);
        assert_eq!(json["Win Rate"], 0.5);
    }

    #[test]
    fn unwritable_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("output.csv");
        let err = export_csv(&scenario_a(), &path).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }

    fn real() -> impl Strategy<Value = f64> {
        prop_oneof![
            any::<f64>(),
            Just(f64::NAN),
            Just(f64::INFINITY),
            Just(f64::NEG_INFINITY),
        ]
    }

    prop_compose! {
        fn reports()(
            counts in (0usize..100_000, 0usize..100_000),
            reals in prop::collection::vec(real(), 11),
        ) -> MetricsReport {
            let (profitable_trades, loss_making_trades) = counts;
            MetricsReport {
                total_trades: profitable_trades + loss_making_trades,
                profitable_trades,
                loss_making_trades,
                win_rate: reals[0],
                average_profit_per_trade: reals[1],
                average_loss_per_trade: reals[2],
                risk_reward_ratio: reals[3],
                expectancy: reals[4],
                average_ror_per_trade: reals[5],
                sharpe_ratio: reals[6],
                max_drawdown: reals[7],
                max_drawdown_percentage: reals[8],
                cagr: reals[9],
                calmar_ratio: reals[10],
            }
        }
    }

    proptest! {
        #[test]
        fn csv_round_trip_preserves_labels_and_values(report in reports()) {
            let csv = to_csv_string(&report).unwrap();
            let parsed = read_csv(csv.as_bytes()).unwrap();

            prop_assert_eq!(parsed.len(), Metric::ALL.len());
            for ((metric, value), (expected_metric, expected)) in parsed.iter().zip(report.entries()) {
                prop_assert_eq!(*metric, expected_metric);
                prop_assert!(same(*value, expected.as_f64()), "{}: {} != {}", metric, value, expected);
            }
        }
    }
}
