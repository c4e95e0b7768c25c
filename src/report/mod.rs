//! Rendering of analysis results.
//!
//! Every output is a pure projection of the current [`AnalysisResult`]:
//! nothing is cached or merged between searches.
//!
//! # Supported Formats
//!
//! - **Text**: plain sections, also used by the search screen
//! - **Markdown**: headings, pipe tables and bullet lists
//! - **JSON**: the backend payload as received
//! - **Template**: a user-supplied Jinja2 template

mod format;
mod markdown;
mod model;
mod projection;
mod template;
mod text;

use std::io::Write;

use crate::analysis::{AnalysisError, AnalysisResult};

pub use format::{
    DEFAULT_CURRENCY, MISSING, format_amount, format_percentage, format_price, format_rating,
};
pub use markdown::write_markdown;
pub use model::ReportFormat;
pub use projection::{
    AnalysisReport, ComparisonRow, ComparisonTable, PriceRow, ProductSummary, ReviewGroup,
    ReviewLine, SentimentRow,
};
pub use template::{read_template, write_template};
pub use text::{render_text, write_text};

/// What a report needs besides the payload.
#[derive(Debug, Clone, Copy)]
pub struct ReportRequest<'a> {
    /// Output format.
    pub format: ReportFormat,
    /// Query the payload answers; exposed to templates.
    pub query: &'a str,
    /// Template source, required for [`ReportFormat::Template`].
    pub template: Option<&'a str>,
}

/// Writes `result` in the requested format.
///
/// # Errors
///
/// Returns [`AnalysisError::Configuration`] when the template format is
/// requested without a template or the template fails, and
/// [`AnalysisError::Io`] when writing fails.
pub fn write_report<W: Write>(
    writer: &mut W,
    result: &AnalysisResult,
    request: &ReportRequest<'_>,
) -> Result<(), AnalysisError> {
    match request.format {
        ReportFormat::Json => write_json(writer, result),
        ReportFormat::Text => write_text(writer, &AnalysisReport::from_result(result)),
        ReportFormat::Markdown => write_markdown(writer, &AnalysisReport::from_result(result)),
        ReportFormat::Template => {
            let template = request.template.ok_or_else(|| AnalysisError::Configuration {
                message: "template output requires a template (use --template <PATH>)".to_owned(),
            })?;
            write_template(
                writer,
                &AnalysisReport::from_result(result),
                request.query,
                template,
            )
        }
    }
}

/// Writes the backend payload verbatim, falling back to the typed result
/// when no payload was kept.
fn write_json<W: Write>(writer: &mut W, result: &AnalysisResult) -> Result<(), AnalysisError> {
    let written = match result.raw_payload() {
        Some(payload) => serde_json::to_writer_pretty(&mut *writer, payload),
        None => serde_json::to_writer_pretty(&mut *writer, result),
    };
    written.map_err(|error| AnalysisError::Io {
        message: format!("failed to write JSON output: {error}"),
    })?;
    writeln!(writer).map_err(|error| AnalysisError::io(&error))
}
