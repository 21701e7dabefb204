use analytics::AnalyticsEngine;
use anyhow::{Context, Result};
use clap::Parser;
use configuration::{Config, Overrides};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the tradestats application.
fn main() -> Result<()> {
    // Load TRADESTATS_* variables from a .env file, if there is one.
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout only carries the report.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = configuration::load_config(cli.config.as_deref(), &cli.overrides)
        .context("Failed to load configuration")?;

    run(&cli, &config)
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Computes trading-performance statistics (win rate, expectancy, Sharpe ratio,
/// drawdown, CAGR, Calmar ratio, ...) from a CSV log of closed trades.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML). Without it, ./tradestats.toml is used when present.
    #[arg(long, short)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,

    /// Do not write the export file.
    #[arg(long)]
    no_export: bool,

    /// Do not print the results table.
    #[arg(long, short)]
    quiet: bool,
}

// ==============================================================================
// Analysis Command Logic
// ==============================================================================

/// Load the trade log, calculate the metrics, then display and export them.
fn run(cli: &Cli, config: &Config) -> Result<()> {
    let log = trade_loader::load_trade_log(&config.io.input).with_context(|| {
        format!("Failed to read trade log {}", config.io.input.display())
    })?;

    let report = AnalyticsEngine::new()
        .calculate(&log, &config.analysis)
        .context("Failed to calculate trade statistics")?;

    if !cli.quiet {
        println!("Stock Market Analysis");
        println!();
        println!("Analysis Results:");
        println!("{}", reporter::render_table(&report));
    }

    if !cli.no_export {
        reporter::export(&report, &config.io.output, config.io.format).with_context(|| {
            format!("Failed to export report to {}", config.io.output.display())
        })?;
        tracing::info!(
            path = %config.io.output.display(),
            format = config.io.format.as_str(),
            "Report exported."
        );
    }

    Ok(())
}
