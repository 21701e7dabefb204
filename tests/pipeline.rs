use analytics::{AnalyticsEngine, Metric};
use approx::assert_relative_eq;
use configuration::{AnalysisParams, ExportFormat};
use std::fs::{self, File};

const TRADE_LOG: &str = "\
Date,Symbol,Entry Price,Exit Price
2023-01-03,AAPL,125.07,126.36
2023-01-10,MSFT,227.76,235.77
2023-01-17,AAPL,135.94,133.49
2023-01-24,NVDA,192.58,198.02
2023-01-31,MSFT,247.81,242.58
2023-02-07,AAPL,151.92,151.92
";

#[test]
fn trade_log_to_csv_and_back() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tradelog.csv");
    let output = dir.path().join(reporter::DEFAULT_EXPORT_FILE);
    fs::write(&input, TRADE_LOG).unwrap();

    let log = trade_loader::load_trade_log(&input).unwrap();
    let report = AnalyticsEngine::new()
        .calculate(&log, &AnalysisParams::default())
        .unwrap();

    assert_eq!(report.total_trades, 6);
    assert_eq!(report.profitable_trades, 3);
    // The flat AAPL trade is neither a win nor a loss, but is not profitable.
    assert_eq!(report.loss_making_trades, 3);
    assert_relative_eq!(report.win_rate, 0.5);
    assert!(report.max_drawdown < 0.0);

    reporter::export(&report, &output, ExportFormat::Csv).unwrap();
    let parsed = reporter::read_csv(File::open(&output).unwrap()).unwrap();

    let labels: Vec<_> = parsed.iter().map(|(m, _)| *m).collect();
    assert_eq!(labels, Metric::ALL.to_vec());
    for ((_, value), (_, expected)) in parsed.iter().zip(report.entries()) {
        assert_relative_eq!(*value, expected.as_f64(), max_relative = 1e-12);
    }
}

#[test]
fn degenerate_log_exports_non_finite_values() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.json");

    let log = trade_loader::read_trade_log("Entry Price,Exit Price\n100,120\n".as_bytes()).unwrap();
    let report = AnalyticsEngine::new()
        .calculate(&log, &AnalysisParams::default())
        .unwrap();

    let csv = reporter::to_csv_string(&report).unwrap();
    assert!(csv.contains("Sharpe Ratio,NaN\n"));
    assert!(csv.contains("Average Loss per Trade,NaN\n"));

    reporter::export(&report, &output, ExportFormat::Json).unwrap();
    let json = fs::read_to_string(&output).unwrap();
    assert!(json.contains("\"Sharpe Ratio\": null"));
    assert!(json.contains("\"Total Trades\": 1"));
}
