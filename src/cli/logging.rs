//! Tracing subscriber setup.
//!
//! Logs go to `--log-file` when given. Otherwise one-shot modes log to
//! stderr and the search screen does not log at all, since stderr output
//! would corrupt the alternate screen.

use std::fs::OpenOptions;
use std::sync::Mutex;

use appraise::{AnalysisError, OperationMode};
use camino::Utf8Path;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "appraise=warn";

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns [`AnalysisError::Io`] when the log file cannot be opened, or
/// [`AnalysisError::Configuration`] when a subscriber is already installed.
pub fn init_tracing(log_file: Option<&Utf8Path>, mode: OperationMode) -> Result<(), AnalysisError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|error| AnalysisError::Io {
                message: format!("failed to open log file '{path}': {error}"),
            })?;

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false),
            )
            .try_init()
    } else if mode == OperationMode::SearchTui {
        return Ok(());
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    installed.map_err(|error| AnalysisError::Configuration {
        message: format!("failed to initialise logging: {error}"),
    })
}
