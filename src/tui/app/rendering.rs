//! Rendering logic for the search screen.
//!
//! These are pure query methods that read state without modification. The
//! report body reuses the plain-text renderer so the screen and the one-shot
//! CLI always agree.

use super::SearchApp;
use crate::report::{AnalysisReport, render_text};

/// Title shown in the header bar.
pub(crate) const TITLE: &str = "Appraise - Product Review Analyzer";

/// Body shown before the first search.
pub(crate) const WELCOME_TEXT: &str = "Enter a product name to compare prices and reviews.";

const STATUS_HINTS: &str = "Enter:analyze  Up/Down:scroll  Ctrl+U:clear  Esc:quit";

impl SearchApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let loading_indicator = if self.session.is_loading() {
            " [Analyzing…]"
        } else {
            ""
        };
        format!("{TITLE}{loading_indicator}\n")
    }

    /// Renders the query input line.
    pub(super) fn render_input(&self) -> String {
        format!("Product: {}_\n", self.session.query())
    }

    /// Returns every line of the body before scrolling is applied.
    pub(crate) fn body_lines(&self) -> Vec<String> {
        if let Some(error) = self.session.error() {
            return vec![format!("Error: {error}")];
        }

        if let Some(result) = self.session.result() {
            return render_text(&AnalysisReport::from_result(result))
                .lines()
                .map(str::to_owned)
                .collect();
        }

        if self.session.is_loading() {
            return vec!["Analyzing…".to_owned()];
        }

        vec![WELCOME_TEXT.to_owned()]
    }

    /// Renders the visible slice of the body, padded to the body height.
    pub(super) fn render_body(&self) -> String {
        let height = self.body_height();
        let mut lines: Vec<String> = self
            .body_lines()
            .into_iter()
            .skip(self.scroll_offset)
            .take(height)
            .collect();
        lines.resize(height, String::new());

        let mut output = String::new();
        for line in lines {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    /// Renders the status bar with the current hint or key help.
    pub(super) fn render_status_bar(&self) -> String {
        let hints = self.hint.unwrap_or(STATUS_HINTS);
        format!("{hints}\n")
    }
}
