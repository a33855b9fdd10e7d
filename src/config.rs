//! Runner configuration.
//!
//! Configuration is read once at startup from environment variables and
//! validated before use.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: `tracing` filter directive (optional, takes precedence over
//!   `MAYBE_LAWS_LOG`)
//! - `MAYBE_LAWS_LOG`: `tracing` filter directive used when `RUST_LOG` is
//!   unset (optional, default: `warn`)
//! - `MAYBE_LAWS_SCENARIO_TRACE`: log every scenario at `info` instead of
//!   `debug` (optional, `true`/`false`/`1`/`0`, default: `false`)
//!
//! # Example
//!
//! ```rust
//! use maybe_laws::config::HarnessConfig;
//!
//! let config = HarnessConfig::from_lookup(|key| match key {
//!     "MAYBE_LAWS_SCENARIO_TRACE" => Some("1".to_string()),
//!     _ => None,
//! })
//! .expect("valid configuration");
//!
//! assert!(config.trace_scenarios);
//! assert_eq!(config.log_filter, "warn");
//! ```

use std::env;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the conventional `tracing` filter.
pub const RUST_LOG_VAR: &str = "RUST_LOG";

/// Environment variable holding the fallback log filter.
pub const LOG_FILTER_VAR: &str = "MAYBE_LAWS_LOG";

/// Environment variable enabling per-scenario `info` logging.
pub const SCENARIO_TRACE_VAR: &str = "MAYBE_LAWS_SCENARIO_TRACE";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Validated runner configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Filter directive for the `tracing` subscriber.
    pub log_filter: String,
    /// Whether each scenario check is logged at `info` level.
    pub trace_scenarios: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            trace_scenarios: false,
        }
    }
}

impl HarnessConfig {
    /// Loads configuration from the process environment.
    ///
    /// Variables that are unset, or are not valid Unicode, take their
    /// default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set to a value
    /// that does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the log filter is not a valid
    /// `tracing` directive, or if the scenario trace flag is not a boolean.
    /// Only the filter variable that is used is validated.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let log_filter = [RUST_LOG_VAR, LOG_FILTER_VAR]
            .into_iter()
            .find_map(|key| lookup(key).map(|raw| (key, raw)))
            .map(|(key, raw)| parse_filter(key, &raw).map(|()| raw))
            .transpose()?
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());

        let trace_scenarios = lookup(SCENARIO_TRACE_VAR)
            .map(|raw| parse_flag(SCENARIO_TRACE_VAR, &raw))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            log_filter,
            trace_scenarios,
        })
    }
}

fn parse_filter(key: &str, raw: &str) -> Result<(), ConfigError> {
    if raw.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            key: key.to_owned(),
            message: "filter must not be empty".to_owned(),
        });
    }
    EnvFilter::try_new(raw)
        .map(|_| ())
        .map_err(|error| ConfigError::InvalidValue {
            key: key.to_owned(),
            message: error.to_string(),
        })
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key: key.to_owned(),
            message: format!("expected true, false, 1 or 0, got `{other}`"),
        }),
    }
}
