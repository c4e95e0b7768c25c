//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.appraise.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `APPRAISE_API_BASE`, `APPRAISE_PRODUCT`,
//!    and friends; the legacy `ANALYZER_API_BASE` is consulted last
//! 4. **Command-line arguments** – `--api-base`/`-a`, `--product`/`-p`, ...
//!
//! # Configuration File
//!
//! ```toml
//! api_base = "http://localhost:8000"
//! format = "markdown"
//! timeout_seconds = 45
//! ```

use std::env;
use std::time::Duration;

use camino::Utf8Path;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::analysis::AnalysisError;
use crate::report::ReportFormat;

/// API base used when no source provides one.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Legacy environment variable shared with the web front end.
pub const LEGACY_API_BASE_ENV: &str = "ANALYZER_API_BASE";

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Print the report for one product and exit.
    SingleQuery,
    /// Interactive search screen.
    SearchTui,
    /// Probe the backend's health endpoint and exit.
    HealthCheck,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use appraise::AppraiseConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = AppraiseConfig::load().expect("failed to load configuration");
/// let api_base = config.resolve_api_base().expect("API base should be valid");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "APPRAISE",
    discovery(
        dotfile_name = ".appraise.toml",
        config_file_name = "appraise.toml",
        app_name = "appraise"
    )
)]
pub struct AppraiseConfig {
    /// Base URL of the analysis backend.
    ///
    /// Can be provided via:
    /// - CLI: `--api-base <URL>` or `-a <URL>`
    /// - Environment: `APPRAISE_API_BASE` or `ANALYZER_API_BASE` (legacy)
    /// - Config file: `api_base = "..."`
    #[ortho_config(cli_short = 'a')]
    pub api_base: Option<String>,

    /// Product to analyse.
    ///
    /// Without `--tui`, a product runs a single query and prints the report.
    /// With `--tui`, it pre-fills the search screen.
    ///
    /// Can be provided via:
    /// - CLI: `--product <NAME>` or `-p <NAME>`
    /// - Environment: `APPRAISE_PRODUCT`
    #[ortho_config(cli_short = 'p')]
    pub product: Option<String>,

    /// Report format: `text`, `markdown`, `json` or `template`.
    ///
    /// Can be provided via:
    /// - CLI: `--format <FORMAT>` or `-f <FORMAT>`
    /// - Environment: `APPRAISE_FORMAT`
    /// - Config file: `format = "..."`
    #[ortho_config(cli_short = 'f')]
    pub format: Option<String>,

    /// Path to a Jinja2 template used by the `template` format.
    ///
    /// Can be provided via:
    /// - CLI: `--template <PATH>` or `-t <PATH>`
    /// - Environment: `APPRAISE_TEMPLATE`
    /// - Config file: `template = "..."`
    #[ortho_config(cli_short = 't')]
    pub template: Option<String>,

    /// HTTP request timeout, in seconds.
    ///
    /// Defaults to 30 seconds.
    ///
    /// Can be provided via:
    /// - CLI: `--timeout-seconds <SECS>` or `-s <SECS>`
    /// - Environment: `APPRAISE_TIMEOUT_SECONDS`
    #[ortho_config(cli_short = 's')]
    pub timeout_seconds: u64,

    /// Launches the interactive search screen.
    ///
    /// Can be provided via:
    /// - CLI: `--tui` / `-T`
    /// - Config file: `tui = true`
    #[ortho_config(cli_short = 'T')]
    pub tui: bool,

    /// Checks the backend's health endpoint and exits.
    ///
    /// Can be provided via:
    /// - CLI: `--health`
    #[ortho_config()]
    pub health: bool,

    /// Writes logs to this file instead of stderr.
    ///
    /// The search screen only logs when a file is given.
    ///
    /// Can be provided via:
    /// - CLI: `--log-file <PATH>`
    /// - Environment: `APPRAISE_LOG_FILE`
    #[ortho_config()]
    pub log_file: Option<String>,

    /// Emits telemetry events to stderr as JSON lines.
    ///
    /// Can be provided via:
    /// - CLI: `--telemetry`
    /// - Config file: `telemetry = true`
    #[ortho_config()]
    pub telemetry: bool,
}

impl Default for AppraiseConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            product: None,
            format: None,
            template: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            tui: false,
            health: false,
            log_file: None,
            telemetry: false,
        }
    }
}

impl AppraiseConfig {
    /// Resolves and validates the backend base URL.
    ///
    /// Falls back to the legacy `ANALYZER_API_BASE` environment variable and
    /// then to [`DEFAULT_API_BASE`].
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidUrl`] when the value is not an
    /// absolute `http` or `https` URL.
    pub fn resolve_api_base(&self) -> Result<Url, AnalysisError> {
        let raw = self
            .api_base
            .clone()
            .or_else(|| env::var(LEGACY_API_BASE_ENV).ok())
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_owned());

        let url = Url::parse(raw.trim())
            .map_err(|error| AnalysisError::InvalidUrl(format!("{raw}: {error}")))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(AnalysisError::InvalidUrl(format!(
                "{raw}: unsupported scheme '{scheme}'"
            ))),
        }
    }

    /// Returns the product query, or an error if missing or blank.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::MissingQuery`] when no product is configured.
    pub fn require_product(&self) -> Result<&str, AnalysisError> {
        self.product
            .as_deref()
            .filter(|product| !product.trim().is_empty())
            .ok_or(AnalysisError::MissingQuery)
    }

    /// Parses the configured report format, defaulting to text.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Configuration`] for unknown formats.
    pub fn report_format(&self) -> Result<ReportFormat, AnalysisError> {
        self.format
            .as_deref()
            .map_or(Ok(ReportFormat::default()), str::parse)
    }

    /// Returns the template path, if configured.
    #[must_use]
    pub fn template_path(&self) -> Option<&Utf8Path> {
        self.template.as_deref().map(Utf8Path::new)
    }

    /// Returns the log file path, if configured.
    #[must_use]
    pub fn log_file_path(&self) -> Option<&Utf8Path> {
        self.log_file.as_deref().map(Utf8Path::new)
    }

    /// Returns the HTTP request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Determines the operation mode based on provided configuration.
    ///
    /// Returns `HealthCheck` when `--health` is set, `SearchTui` when `--tui`
    /// is set or no product is given, and `SingleQuery` otherwise.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.health {
            OperationMode::HealthCheck
        } else if self.tui || self.product.is_none() {
            OperationMode::SearchTui
        } else {
            OperationMode::SingleQuery
        }
    }

    /// Checks that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Configuration`] when the format is unknown,
    /// the template format lacks a template, or the timeout is zero.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let format = self.report_format()?;

        if format == ReportFormat::Template && self.template.is_none() {
            return Err(AnalysisError::Configuration {
                message: "template format requires --template <PATH>".to_owned(),
            });
        }

        if self.timeout_seconds == 0 {
            return Err(AnalysisError::Configuration {
                message: "timeout_seconds must be at least 1".to_owned(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
