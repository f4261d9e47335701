//! Interactive mode for browsing reviews and the footer.
//!
//! This module provides the entry point for the terminal user interface that
//! lets users page, filter, and expand reviews and toggle footer sections.

use std::io::{self, Write};

use bubbletea_rs::Program;

use storefront::tui::{StorefrontApp, set_fetch_context};
use storefront::{StorefrontConfig, StorefrontError};

/// Runs the interactive TUI.
///
/// # Errors
///
/// Returns an error if:
/// - The API base URL is missing or invalid
/// - A configured identifier is blank
/// - The TUI fails to initialise
pub async fn run(config: &StorefrontConfig) -> Result<(), StorefrontError> {
    let context = super::fetch_context(config)?;

    // Store the context in global state for Model::init() and the fetch
    // commands. If already set, the existing context remains.
    let _ = set_fetch_context(context);

    run_tui().await.map_err(|error| StorefrontError::Terminal {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `StorefrontApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // StorefrontApp::init() issues the initial fetches.
    let program = Program::<StorefrontApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
