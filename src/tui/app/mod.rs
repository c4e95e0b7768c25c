//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the application state and update logic for the
//! search screen. It owns the [`SearchSession`], dispatches analysis
//! requests as async commands, and tracks the report scroll position.
//!
//! # Module Structure
//!
//! - `model_impl`: `bubbletea_rs::Model` implementation and frame sizing
//! - `rendering`: View rendering methods for terminal output

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use bubbletea_rs::Cmd;
use tracing::debug;

use crate::analysis::{AnalysisError, AnalysisGateway, AnalysisResult, SearchSession};

use super::messages::AppMsg;

mod model_impl;
mod rendering;

/// Hint shown when Enter is pressed without a usable query.
pub(crate) const EMPTY_QUERY_HINT: &str = "Type a product name, then press Enter";

/// Hint shown when Enter is pressed while a request is in flight.
pub(crate) const LOADING_HINT: &str = "Analysis already in progress";

/// Rows used by the header, input line, separator and status bar.
const CHROME_HEIGHT: usize = 4;

/// Main application model for the search screen.
pub struct SearchApp {
    /// Query, loading flag, error and result.
    pub(crate) session: SearchSession,
    /// Backend used for submits; `None` when no context was configured.
    gateway: Option<Arc<dyn AnalysisGateway>>,
    /// First visible line of the report body.
    pub(crate) scroll_offset: usize,
    /// Transient hint shown in the status bar.
    pub(crate) hint: Option<&'static str>,
    /// Terminal dimensions.
    width: u16,
    height: u16,
}

impl fmt::Debug for SearchApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchApp")
            .field("session", &self.session)
            .field("has_gateway", &self.gateway.is_some())
            .field("scroll_offset", &self.scroll_offset)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl SearchApp {
    /// Creates a new application that submits queries through `gateway`.
    #[must_use]
    pub fn new(gateway: Option<Arc<dyn AnalysisGateway>>) -> Self {
        Self {
            session: SearchSession::new(),
            gateway,
            scroll_offset: 0,
            hint: None,
            width: 80,
            height: 24,
        }
    }

    /// Pre-fills the query input.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.session.set_query(query);
        self
    }

    /// Returns the search session.
    #[must_use]
    pub const fn session(&self) -> &SearchSession {
        &self.session
    }

    /// Returns the first visible line of the report body.
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_editing() {
            self.handle_editing_msg(msg);
            return None;
        }
        if msg.is_scroll() {
            self.handle_scroll_msg(msg);
            return None;
        }

        match msg {
            AppMsg::Submit => self.handle_submit(),
            AppMsg::AnalysisSettled(outcome) => {
                self.handle_settled(outcome.clone());
                None
            }
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::WindowResized { width, height } => {
                self.handle_resize(*width, *height);
                None
            }
            _ => {
                debug_assert!(false, "unrouted message reached handle_message");
                None
            }
        }
    }

    fn handle_editing_msg(&mut self, msg: &AppMsg) {
        self.hint = None;
        match msg {
            AppMsg::InsertChar(character) => self.session.push_char(*character),
            AppMsg::Backspace => self.session.backspace(),
            AppMsg::ClearQuery => self.session.clear_query(),
            _ => debug_assert!(false, "non-editing message routed to handle_editing_msg"),
        }
    }

    /// Starts a request when the query is usable and none is in flight.
    fn handle_submit(&mut self) -> Option<Cmd> {
        if !self.session.has_query() {
            self.hint = Some(EMPTY_QUERY_HINT);
            return None;
        }
        if self.session.is_loading() {
            self.hint = Some(LOADING_HINT);
            return None;
        }

        let query = self.session.begin_submit()?;
        self.hint = None;
        self.scroll_offset = 0;

        let Some(gateway) = self.gateway.as_ref().map(Arc::clone) else {
            self.session.settle(Err(AnalysisError::Configuration {
                message: "search context not configured".to_owned(),
            }));
            return None;
        };

        debug!(product = %query, "dispatching analysis from search screen");
        Some(Box::pin(async move {
            let outcome = gateway.analyze(&query).await;
            Some(Box::new(AppMsg::AnalysisSettled(outcome)) as Box<dyn Any + Send>)
        }))
    }

    fn handle_settled(&mut self, outcome: Result<AnalysisResult, AnalysisError>) {
        self.session.settle(outcome);
        self.scroll_offset = 0;
    }

    fn handle_scroll_msg(&mut self, msg: &AppMsg) {
        let page = self.body_height().max(1);
        let max_offset = self.max_scroll_offset();

        self.scroll_offset = match msg {
            AppMsg::ScrollUp => self.scroll_offset.saturating_sub(1),
            AppMsg::ScrollDown => self.scroll_offset.saturating_add(1),
            AppMsg::PageUp => self.scroll_offset.saturating_sub(page),
            AppMsg::PageDown => self.scroll_offset.saturating_add(page),
            AppMsg::Home => 0,
            AppMsg::End => max_offset,
            _ => {
                debug_assert!(false, "non-scroll message routed to handle_scroll_msg");
                self.scroll_offset
            }
        }
        .min(max_offset);
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
    }

    /// Rows available to the report body.
    pub(crate) fn body_height(&self) -> usize {
        (self.height as usize).saturating_sub(CHROME_HEIGHT)
    }

    fn max_scroll_offset(&self) -> usize {
        self.body_lines().len().saturating_sub(self.body_height())
    }
}
