//! Markdown formatter for analysis reports.
//!
//! Produces headings, a pipe table for prices and the platform comparison,
//! and bullet lists for pros, cons and reviews.

use std::io::Write;

use crate::analysis::AnalysisError;

use super::projection::AnalysisReport;
use super::text::review_line;

/// Writes `report` as Markdown to the given writer.
///
/// # Errors
///
/// Returns [`AnalysisError::Io`] if writing to the output fails.
pub fn write_markdown<W: Write>(
    writer: &mut W,
    report: &AnalysisReport,
) -> Result<(), AnalysisError> {
    write_summary(writer, report)?;
    write_prices(writer, report)?;
    write_sentiment(writer, report)?;
    write_comparison(writer, report)?;
    write_list(writer, "Pros", &report.pros)?;
    write_list(writer, "Cons", &report.cons)?;
    write_reviews(writer, report)
}

fn write_summary<W: Write>(writer: &mut W, report: &AnalysisReport) -> Result<(), AnalysisError> {
    writeln!(writer, "# {}", report.product.name).map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;

    if let Some(score) = &report.product.score {
        writeln!(writer, "- **Score:** {score}").map_err(|e| io_error(&e))?;
    }
    if let Some(platform) = &report.product.best_platform {
        writeln!(writer, "- **Best platform:** {platform}").map_err(|e| io_error(&e))?;
    }
    if report.product.score.is_some() || report.product.best_platform.is_some() {
        writeln!(writer).map_err(|e| io_error(&e))?;
    }
    Ok(())
}

fn write_prices<W: Write>(writer: &mut W, report: &AnalysisReport) -> Result<(), AnalysisError> {
    writeln!(writer, "## Prices").map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(writer, "| Platform | Price | Link |").map_err(|e| io_error(&e))?;
    writeln!(writer, "| --- | --- | --- |").map_err(|e| io_error(&e))?;
    for row in &report.prices {
        writeln!(
            writer,
            "| {} | {} | {} |",
            escape_cell(&row.platform),
            escape_cell(&row.price),
            escape_cell(&row.link)
        )
        .map_err(|e| io_error(&e))?;
    }
    writeln!(writer).map_err(|e| io_error(&e))
}

fn write_sentiment<W: Write>(
    writer: &mut W,
    report: &AnalysisReport,
) -> Result<(), AnalysisError> {
    writeln!(writer, "## Sentiment").map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;
    match &report.sentiment {
        Some(sentiment) => {
            writeln!(writer, "- Positive: {}", sentiment.positive).map_err(|e| io_error(&e))?;
            writeln!(writer, "- Neutral: {}", sentiment.neutral).map_err(|e| io_error(&e))?;
            writeln!(writer, "- Negative: {}", sentiment.negative).map_err(|e| io_error(&e))?;
        }
        None => writeln!(writer, "_No sentiment available_").map_err(|e| io_error(&e))?,
    }
    writeln!(writer).map_err(|e| io_error(&e))
}

fn write_comparison<W: Write>(
    writer: &mut W,
    report: &AnalysisReport,
) -> Result<(), AnalysisError> {
    let Some(table) = &report.comparison else {
        return Ok(());
    };

    writeln!(writer, "## Platform Comparison").map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "| Platform | Avg rating | Reviews | Sentiment | Overall |"
    )
    .map_err(|e| io_error(&e))?;
    writeln!(writer, "| --- | --- | --- | --- | --- |").map_err(|e| io_error(&e))?;
    for row in &table.rows {
        let platform = if row.is_best {
            format!("**{}**", escape_cell(&row.platform))
        } else {
            escape_cell(&row.platform)
        };
        writeln!(
            writer,
            "| {platform} | {} | {} | {} | {} |",
            row.average_rating,
            row.review_count,
            escape_cell(&row.sentiment),
            escape_cell(&row.overall_sentiment)
        )
        .map_err(|e| io_error(&e))?;
    }
    writeln!(writer).map_err(|e| io_error(&e))
}

fn write_list<W: Write>(writer: &mut W, title: &str, items: &[String]) -> Result<(), AnalysisError> {
    writeln!(writer, "## {title}").map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;
    if items.is_empty() {
        writeln!(writer, "_None listed_").map_err(|e| io_error(&e))?;
    }
    for item in items {
        writeln!(writer, "- {item}").map_err(|e| io_error(&e))?;
    }
    writeln!(writer).map_err(|e| io_error(&e))
}

fn write_reviews<W: Write>(writer: &mut W, report: &AnalysisReport) -> Result<(), AnalysisError> {
    if report.review_groups.is_empty() {
        return Ok(());
    }

    writeln!(writer, "## Reviews").map_err(|e| io_error(&e))?;
    for group in &report.review_groups {
        writeln!(writer).map_err(|e| io_error(&e))?;
        writeln!(writer, "### {}", group.platform).map_err(|e| io_error(&e))?;
        writeln!(writer).map_err(|e| io_error(&e))?;
        for review in &group.reviews {
            writeln!(writer, "- {}", review_line(review)).map_err(|e| io_error(&e))?;
        }
    }
    Ok(())
}

/// Escapes pipe characters so cell text cannot split a table row.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Converts an I/O error to an `AnalysisError`.
fn io_error(error: &std::io::Error) -> AnalysisError {
    AnalysisError::io(error)
}
