//! Output format selection for CLI integration.

use std::fmt;
use std::str::FromStr;

use crate::analysis::AnalysisError;

/// Supported report formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Plain-text sections.
    #[default]
    Text,
    /// Markdown headings, tables and lists.
    Markdown,
    /// The payload re-serialised as pretty JSON.
    Json,
    /// A user-supplied Jinja2 template.
    Template,
}

impl FromStr for ReportFormat {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "template" | "jinja" => Ok(Self::Template),
            _ => Err(AnalysisError::Configuration {
                message: format!(
                    "unsupported output format '{s}': valid options are 'text', 'markdown', \
                     'json' or 'template'"
                ),
            }),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
            Self::Template => write!(f, "template"),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("text", ReportFormat::Text)]
    #[case("PLAIN", ReportFormat::Text)]
    #[case("md", ReportFormat::Markdown)]
    #[case("Markdown", ReportFormat::Markdown)]
    #[case("json", ReportFormat::Json)]
    #[case("jinja", ReportFormat::Template)]
    fn parses_known_formats(#[case] input: &str, #[case] expected: ReportFormat) {
        assert_eq!(input.parse::<ReportFormat>().ok(), Some(expected));
    }

    #[rstest]
    fn rejects_unknown_format() {
        let error = "csv".parse::<ReportFormat>().expect_err("csv is unsupported");

        assert!(error.to_string().contains("unsupported output format 'csv'"));
    }

    #[rstest]
    fn display_round_trips_through_parse() {
        for format in [
            ReportFormat::Text,
            ReportFormat::Markdown,
            ReportFormat::Json,
            ReportFormat::Template,
        ] {
            assert_eq!(format.to_string().parse::<ReportFormat>().ok(), Some(format));
        }
    }
}
