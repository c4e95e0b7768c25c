//! Plain-text report used by the default CLI output and the search screen.

use std::io::Write;

use crate::analysis::AnalysisError;

use super::projection::{AnalysisReport, ComparisonRow, ReviewLine};

/// Renders `report` as plain-text sections separated by blank lines.
#[must_use]
pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();

    push_summary(&mut out, report);
    push_prices(&mut out, report);
    push_sentiment(&mut out, report);

    if let Some(table) = &report.comparison {
        line(&mut out, "Platform Comparison");
        for row in &table.rows {
            line(&mut out, &format!("  {}", comparison_line(row)));
        }
        out.push('\n');
    }

    push_bullets(&mut out, "Pros", &report.pros);
    push_bullets(&mut out, "Cons", &report.cons);

    if !report.review_groups.is_empty() {
        line(&mut out, "Reviews");
        for group in &report.review_groups {
            line(
                &mut out,
                &format!("  {} ({})", group.platform, group.reviews.len()),
            );
            for review in &group.reviews {
                line(&mut out, &format!("    - {}", review_line(review)));
            }
        }
        out.push('\n');
    }

    let trimmed_len = out.trim_end().len();
    out.truncate(trimmed_len);
    out.push('\n');
    out
}

/// Writes the plain-text report to `writer`.
///
/// # Errors
///
/// Returns [`AnalysisError::Io`] if writing fails.
pub fn write_text<W: Write>(writer: &mut W, report: &AnalysisReport) -> Result<(), AnalysisError> {
    writer
        .write_all(render_text(report).as_bytes())
        .map_err(|error| AnalysisError::io(&error))
}

fn push_summary(out: &mut String, report: &AnalysisReport) {
    line(out, "Product Summary");
    line(out, &format!("  {}", report.product.name));
    if let Some(score) = &report.product.score {
        line(out, &format!("  Score: {score}"));
    }
    if let Some(platform) = &report.product.best_platform {
        line(out, &format!("  Best platform: {platform}"));
    }
    out.push('\n');
}

fn push_prices(out: &mut String, report: &AnalysisReport) {
    line(out, "Prices (platform / price / link)");
    for row in &report.prices {
        line(out, &format!("  {}", row.summary()));
    }
    out.push('\n');
}

fn push_sentiment(out: &mut String, report: &AnalysisReport) {
    line(out, "Sentiment (positive / neutral / negative)");
    match &report.sentiment {
        Some(sentiment) => line(out, &format!("  {}", sentiment.summary())),
        None => line(out, "  No sentiment available"),
    }
    out.push('\n');
}

fn push_bullets(out: &mut String, title: &str, items: &[String]) {
    line(out, title);
    if items.is_empty() {
        line(out, "  None listed");
    }
    for item in items {
        line(out, &format!("  - {item}"));
    }
    out.push('\n');
}

fn comparison_line(row: &ComparisonRow) -> String {
    let best = if row.is_best { " [best]" } else { "" };
    format!(
        "{}: rating {}, reviews {}, sentiment {}, overall {}{best}",
        row.platform, row.average_rating, row.review_count, row.sentiment, row.overall_sentiment
    )
}

/// Formats a review as `[rating] title: content`, skipping absent parts.
pub(crate) fn review_line(review: &ReviewLine) -> String {
    let mut text = String::new();
    if let Some(rating) = &review.rating {
        text.push_str(&format!("[{rating}] "));
    }
    match (&review.title, review.content.is_empty()) {
        (Some(title), true) => text.push_str(title),
        (Some(title), false) => text.push_str(&format!("{title}: {}", review.content)),
        (None, _) => text.push_str(&review.content),
    }
    text
}

fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
