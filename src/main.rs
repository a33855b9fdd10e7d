//! Law runner entry point.
//!
//! Prints each law statement to stdout, checks its scenarios, and finishes
//! with the assertion count. Diagnostics go to stderr: through `tracing`,
//! and as a plain line for any error that ends the run.

use std::io;
use std::process::ExitCode;

use maybe_laws::config::HarnessConfig;
use maybe_laws::laws::{self, Verifier};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let config = match HarnessConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("maybe-laws: {error}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize tracing; the filter was validated with the configuration
    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::debug!(?config, "configuration loaded");

    match laws::verify_all(Verifier::with_config(io::stdout().lock(), &config)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "law verification failed");
            // Reported even when the filter silences `tracing`
            eprintln!("maybe-laws: {error}");
            ExitCode::FAILURE
        }
    }
}
