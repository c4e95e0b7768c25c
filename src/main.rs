//! Appraise CLI entrypoint for product review analysis.

use std::io::{self, Write};
use std::process::ExitCode;

use appraise::{AnalysisError, AppraiseConfig, OperationMode};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AnalysisError> {
    let config = load_config()?;
    config.validate()?;

    let mode = config.operation_mode();
    cli::logging::init_tracing(config.log_file_path(), mode)?;
    tracing::debug!(?mode, "starting appraise");

    match mode {
        OperationMode::HealthCheck => cli::health::run(&config).await,
        OperationMode::SearchTui => cli::search_tui::run(&config).await,
        OperationMode::SingleQuery => cli::single_query::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`AnalysisError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<AppraiseConfig, AnalysisError> {
    AppraiseConfig::load().map_err(|error| AnalysisError::Configuration {
        message: error.to_string(),
    })
}
