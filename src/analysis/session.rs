//! Search session state shared by the CLI and the search screen.
//!
//! A session holds the query being edited, the advisory loading flag, the
//! last error message, and the last successful payload. A submit clears the
//! previous outcome before dispatching; whichever request settles last
//! decides what is shown. There is no cancellation and no generation
//! counter, so a slow early request can overwrite a later one.

use super::error::AnalysisError;
use super::gateway::AnalysisGateway;
use super::model::AnalysisResult;

/// Message shown in place of a failure whose detail text is blank.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to analyze";

/// Query, loading flag, error and result of the current search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSession {
    query: String,
    loading: bool,
    error: Option<String>,
    result: Option<AnalysisResult>,
}

impl SearchSession {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with a pre-filled query.
    #[must_use]
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Returns the query text.
    #[must_use]
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    /// Replaces the query text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Appends one character to the query.
    pub fn push_char(&mut self, character: char) {
        self.query.push(character);
    }

    /// Removes the last character of the query, if any.
    pub fn backspace(&mut self) {
        let _ = self.query.pop();
    }

    /// Clears the query text.
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Returns whether a request is believed to be in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the last error message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the last successful payload, if any.
    #[must_use]
    pub const fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Returns whether the query is non-blank and may be submitted.
    ///
    /// A query of only whitespace counts as blank. This is stricter than a
    /// plain emptiness check: such a query is never sent to the backend.
    #[must_use]
    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Returns whether the submit control should be shown as enabled.
    ///
    /// This mirrors the button state only; [`Self::begin_submit`] does not
    /// consult the loading flag.
    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        self.has_query() && !self.loading
    }

    /// Starts a submit.
    ///
    /// Sets the loading flag, clears the previous error and result, and
    /// returns the query to send. Returns `None` and leaves the session
    /// untouched when the query is blank.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.has_query() {
            return None;
        }

        self.loading = true;
        self.error = None;
        self.result = None;
        Some(self.query.clone())
    }

    /// Records the outcome of a request and clears the loading flag.
    ///
    /// A success replaces the payload wholesale. A failure drops any payload
    /// and stores the error message, or [`FALLBACK_ERROR_MESSAGE`] when the
    /// error has no detail of its own (an empty transport message, say).
    pub fn settle(&mut self, outcome: Result<AnalysisResult, AnalysisError>) {
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(error) => {
                self.result = None;
                self.error = Some(error_message(&error));
            }
        }
        self.loading = false;
    }

    /// Runs a full submit cycle against `gateway`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::MissingQuery`] when the query is blank, or
    /// the request error after it has been recorded in the session.
    pub async fn submit<G>(&mut self, gateway: &G) -> Result<(), AnalysisError>
    where
        G: AnalysisGateway + ?Sized,
    {
        let query = self.begin_submit().ok_or(AnalysisError::MissingQuery)?;
        let outcome = gateway.analyze(&query).await;
        let failure = outcome.as_ref().err().cloned();
        self.settle(outcome);
        failure.map_or(Ok(()), Err)
    }
}

fn error_message(error: &AnalysisError) -> String {
    if error.has_blank_detail() {
        FALLBACK_ERROR_MESSAGE.to_owned()
    } else {
        error.to_string()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
