//! CLI operation mode handlers.
//!
//! This module contains the implementations for the operation modes:
//! - [`health`]: Probe the backend's health endpoint
//! - [`search_tui`]: Interactive search screen
//! - [`single_query`]: Analyse one product and print the report
//!
//! Tracing setup lives in [`logging`].

use appraise::{
    AnalysisError, AppraiseConfig, HttpAnalysisGateway, NoopTelemetrySink,
    StderrJsonlTelemetrySink, TelemetrySink,
};

pub mod health;
pub mod logging;
pub mod search_tui;
pub mod single_query;

/// Builds the HTTP gateway from the resolved API base and timeout.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidUrl`] for a bad API base, or
/// [`AnalysisError::Configuration`] when the HTTP client cannot be built.
pub fn build_gateway(config: &AppraiseConfig) -> Result<HttpAnalysisGateway, AnalysisError> {
    HttpAnalysisGateway::new(config.resolve_api_base()?, config.request_timeout())
}

/// Selects the telemetry sink for this run.
pub fn telemetry_sink(config: &AppraiseConfig) -> Box<dyn TelemetrySink> {
    if config.telemetry {
        Box::new(StderrJsonlTelemetrySink)
    } else {
        Box::new(NoopTelemetrySink)
    }
}
