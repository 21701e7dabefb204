use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_INITIAL_CAPITAL: f64 = 6500.0;
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.05;
pub const DEFAULT_INPUT: &str = "tradelog.csv";
pub const DEFAULT_OUTPUT: &str = "output.csv";

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    pub analysis: AnalysisParams,
    pub io: IoSettings,
}

/// The two scalar inputs of the metrics calculation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AnalysisParams {
    /// Starting capital used as the CAGR beginning value.
    pub initial_capital: f64,
    /// Per-period risk-free rate subtracted in the Sharpe Ratio (0.05 = 5%).
    pub risk_free_rate: f64,
}

/// Where the trade log is read from and where the report is written.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IoSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: ExportFormat,
}

/// File format of the exported report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Values given on the command line. Anything set here wins over the file
/// and the environment.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct Overrides {
    /// Trade log to analyse (CSV with `Entry Price` and `Exit Price` columns).
    #[cfg_attr(feature = "clap", arg(long, short))]
    pub input: Option<PathBuf>,

    /// Where to write the exported report.
    #[cfg_attr(feature = "clap", arg(long, short))]
    pub output: Option<PathBuf>,

    /// Export format.
    #[cfg_attr(feature = "clap", arg(long, value_enum))]
    pub format: Option<ExportFormat>,

    /// Starting capital used for CAGR.
    #[cfg_attr(feature = "clap", arg(long))]
    pub initial_capital: Option<f64>,

    /// Risk-free rate used for the Sharpe Ratio.
    #[cfg_attr(feature = "clap", arg(long, allow_hyphen_values = true))]
    pub risk_free_rate: Option<f64>,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            initial_capital: DEFAULT_INITIAL_CAPITAL,
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
        }
    }
}

impl AnalysisParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_capital.is_finite() || self.initial_capital <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "initial_capital must be a positive number, got {}",
                self.initial_capital
            )));
        }
        if !self.risk_free_rate.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "risk_free_rate must be a finite number, got {}",
                self.risk_free_rate
            )));
        }
        Ok(())
    }
}

impl Default for IoSettings {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            format: ExportFormat::default(),
        }
    }
}

impl Config {
    /// Layers command-line values on top of the loaded configuration.
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(input) = &overrides.input {
            self.io.input = input.clone();
        }
        if let Some(output) = &overrides.output {
            self.io.output = output.clone();
        }
        if let Some(format) = overrides.format {
            self.io.format = format;
        }
        if let Some(capital) = overrides.initial_capital {
            self.analysis.initial_capital = capital;
        }
        if let Some(rate) = overrides.risk_free_rate {
            self.analysis.risk_free_rate = rate;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.analysis.validate()
    }
}
