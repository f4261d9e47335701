//! Storefront CLI entrypoint for the review list and footer panels.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use storefront::{OperationMode, StorefrontConfig, StorefrontError};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StorefrontError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::Snapshot => cli::snapshot::run(&config).await,
        OperationMode::Interactive => cli::review_tui::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`StorefrontError::Configuration`] when ortho-config fails to
/// parse arguments or load configuration files.
fn load_config() -> Result<StorefrontConfig, StorefrontError> {
    StorefrontConfig::load().map_err(|error| StorefrontError::Configuration {
        message: error.to_string(),
    })
}
