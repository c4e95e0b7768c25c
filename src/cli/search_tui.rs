//! TUI mode for interactive product searches.
//!
//! This module provides the entry point for the search screen, optionally
//! pre-filled with the configured product.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use appraise::tui::{SearchApp, set_search_context};
use appraise::{AnalysisError, AppraiseConfig};

use super::build_gateway;

/// Runs the search screen.
///
/// # Errors
///
/// Returns an error if:
/// - The API base is invalid
/// - The HTTP client cannot be built
/// - The TUI fails to initialise
pub async fn run(config: &AppraiseConfig) -> Result<(), AnalysisError> {
    let gateway = build_gateway(config)?;
    let initial_query = config
        .product
        .clone()
        .filter(|product| !product.trim().is_empty());

    // If already set (e.g. re-running the TUI in the same process), the
    // existing context is kept.
    let _ = set_search_context(Arc::new(gateway), initial_query);

    run_tui().await.map_err(|error| AnalysisError::Io {
        message: format!("TUI error: {error}"),
    })
}

/// Runs the bubbletea-rs program with the `SearchApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<SearchApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
