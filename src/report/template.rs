//! Template-driven report output using Jinja2-compatible syntax.
//!
//! Users supply a template file to control the layout of a report. The
//! projected [`AnalysisReport`] is exposed to the template.
//!
//! # Available Variables
//!
//! - `query`: the product query that was submitted
//! - `generated_at`: report timestamp (ISO 8601)
//! - `product`: `name`, `score`, `best_platform`
//! - `prices`: list of `platform`, `price`, `link`
//! - `sentiment`: `positive`, `neutral`, `negative` (absent when missing)
//! - `comparison`: `rows` and `best_platform` (absent when missing)
//! - `pros`, `cons`: lists of strings
//! - `review_groups`: list of `platform` and `reviews` (`title`, `rating`,
//!   `content`)

use std::io::Write;

use camino::Utf8Path;
use chrono::Utc;
use minijinja::{Environment, context};

use crate::analysis::AnalysisError;

use super::projection::AnalysisReport;

/// Reads a template file from disk.
///
/// # Errors
///
/// Returns [`AnalysisError::Io`] when the file cannot be read.
pub fn read_template(path: &Utf8Path) -> Result<String, AnalysisError> {
    std::fs::read_to_string(path).map_err(|error| AnalysisError::Io {
        message: format!("failed to read template '{path}': {error}"),
    })
}

/// Renders `report` through a user-provided Jinja2 template.
///
/// # Errors
///
/// Returns [`AnalysisError::Configuration`] if the template has syntax
/// errors or fails to render. Returns [`AnalysisError::Io`] if writing fails.
///
/// # Example Template
///
/// ```jinja2
/// {{ product.name }}
/// {% for row in prices %}- {{ row.platform }}: {{ row.price }}
/// {% endfor %}
/// ```
pub fn write_template<W: Write>(
    writer: &mut W,
    report: &AnalysisReport,
    query: &str,
    template_content: &str,
) -> Result<(), AnalysisError> {
    let mut env = Environment::new();

    // Users control the output format, so nothing is escaped.
    env.set_auto_escape_callback(|_| minijinja::AutoEscape::None);

    env.add_template("report", template_content)
        .map_err(|e| AnalysisError::Configuration {
            message: format!("invalid template syntax: {e}"),
        })?;

    let ctx = context! {
        query => query,
        generated_at => Utc::now().to_rfc3339(),
        product => &report.product,
        prices => &report.prices,
        sentiment => &report.sentiment,
        comparison => &report.comparison,
        pros => &report.pros,
        cons => &report.cons,
        review_groups => &report.review_groups,
    };

    let tmpl = env
        .get_template("report")
        .map_err(|e| AnalysisError::Configuration {
            message: format!("failed to retrieve template: {e}"),
        })?;

    let output = tmpl.render(ctx).map_err(|e| AnalysisError::Configuration {
        message: format!("template rendering failed: {e}"),
    })?;

    writer
        .write_all(output.as_bytes())
        .map_err(|e| AnalysisError::Io {
            message: format!("failed to write template output: {e}"),
        })
}
