//! Terminal search screen for product review analysis.
//!
//! This module provides an interactive TUI for typing a product query,
//! submitting it to the analysis backend, and scrolling through the
//! resulting report using the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::SearchApp`]
//! - **View**: Rendering logic in `app::rendering`
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, we use a module-level storage pattern for the gateway and the
//! pre-filled query. Call [`set_search_context`] before starting the
//! program, and `SearchApp::init()` will retrieve it.

use std::sync::{Arc, OnceLock};

use crate::analysis::AnalysisGateway;

pub mod app;
pub mod input;
pub mod messages;

pub use app::SearchApp;

/// Global storage for the search context.
///
/// This is set before the TUI program starts and read by `SearchApp::init()`.
static SEARCH_CONTEXT: OnceLock<SearchContext> = OnceLock::new();

/// Gateway and initial query handed to the search screen.
struct SearchContext {
    gateway: Arc<dyn AnalysisGateway>,
    initial_query: Option<String>,
}

/// Sets the gateway and optional pre-filled query for the search screen.
///
/// This must be called before starting the bubbletea-rs program. Without a
/// context, submits fail with a configuration error shown on screen.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_search_context(
    gateway: Arc<dyn AnalysisGateway>,
    initial_query: Option<String>,
) -> bool {
    SEARCH_CONTEXT
        .set(SearchContext {
            gateway,
            initial_query,
        })
        .is_ok()
}

/// Builds the initial application from the stored context.
pub(crate) fn initial_app() -> SearchApp {
    SEARCH_CONTEXT.get().map_or_else(
        || SearchApp::new(None),
        |context| {
            let app = SearchApp::new(Some(Arc::clone(&context.gateway)));
            match &context.initial_query {
                Some(query) => app.with_query(query.clone()),
                None => app,
            }
        },
    )
}
