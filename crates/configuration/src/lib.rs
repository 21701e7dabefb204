use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{AnalysisParams, Config, ExportFormat, IoSettings, Overrides};

/// Base name of the optional configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "tradestats";

/// Prefix of environment variables, e.g. `TRADESTATS_ANALYSIS__RISK_FREE_RATE`.
pub const ENV_PREFIX: &str = "TRADESTATS";

/// Loads the application configuration.
///
/// Sources are layered, later ones winning: built-in defaults, the config
/// file (`path` if given, in which case it must exist, otherwise an optional
/// `tradestats.toml`), `TRADESTATS_*` environment variables and finally the
/// command-line `overrides`. The result is validated before it is returned.
pub fn load_config(path: Option<&Path>, overrides: &Overrides) -> Result<Config, ConfigError> {
    let mut config = build(path, environment())?;
    config.apply(overrides);
    config.validate()?;

    tracing::debug!(?config, "Configuration loaded.");
    Ok(config)
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn build(path: Option<&Path>, env: config::Environment) -> Result<Config, ConfigError> {
    let defaults = Config::default();

    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .set_default("analysis.initial_capital", defaults.analysis.initial_capital)?
        .set_default("analysis.risk_free_rate", defaults.analysis.risk_free_rate)?
        .set_default("io.input", settings::DEFAULT_INPUT)?
        .set_default("io.output", settings::DEFAULT_OUTPUT)?
        .set_default("io.format", defaults.io.format.as_str())?
        .add_source(file)
        .add_source(env)
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;

    Ok(config)
}
