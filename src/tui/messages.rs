//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::analysis::{AnalysisError, AnalysisResult};

/// Messages for the search screen.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Query editing
    /// Append a character to the query.
    InsertChar(char),
    /// Delete the last character of the query.
    Backspace,
    /// Clear the query.
    ClearQuery,

    // Requests
    /// Submit the current query.
    Submit,
    /// A request settled with a payload or an error.
    AnalysisSettled(Result<AnalysisResult, AnalysisError>),

    // Scrolling
    /// Scroll the report up one line.
    ScrollUp,
    /// Scroll the report down one line.
    ScrollDown,
    /// Scroll the report up one page.
    PageUp,
    /// Scroll the report down one page.
    PageDown,
    /// Scroll to the top of the report.
    Home,
    /// Scroll to the bottom of the report.
    End,

    // Application lifecycle
    /// Quit the application.
    Quit,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true if this is a query editing message.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self, Self::InsertChar(_) | Self::Backspace | Self::ClearQuery)
    }

    /// Returns true if this is a scrolling message.
    #[must_use]
    pub const fn is_scroll(&self) -> bool {
        matches!(
            self,
            Self::ScrollUp | Self::ScrollDown | Self::PageUp | Self::PageDown | Self::Home | Self::End
        )
    }
}
