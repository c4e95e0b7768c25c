//! Appraise library crate providing product review analysis.
//!
//! The library talks to a review analysis backend over HTTP, keeps the
//! state of one search (query, loading flag, error, result), and renders
//! the backend's payload as text, Markdown, JSON or a user template. A
//! bubbletea-rs search screen and a one-shot CLI are built on top.

pub mod analysis;
pub mod config;
pub mod report;
pub mod telemetry;
pub mod tui;

pub use analysis::{
    AnalysisError, AnalysisGateway, AnalysisResult, HealthStatus, HttpAnalysisGateway,
    SearchSession,
};
pub use config::{AppraiseConfig, OperationMode};
pub use report::{AnalysisReport, ReportFormat, ReportRequest, write_report};
pub use telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};
