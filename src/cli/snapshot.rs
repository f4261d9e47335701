//! Non-interactive mode: render both panels once to stdout.
//!
//! Review failures render the panel's error state and settings failures
//! render the footer defaults, exactly as the interactive UI would. The
//! process still exits successfully so that snapshots can be captured from
//! a flaky backend.

use std::io::{self, Write};

use storefront::tui::messages::AppMsg;
use storefront::tui::{FetchContext, StorefrontApp};
use storefront::{StorefrontConfig, StorefrontError};

/// Fetches reviews and settings, then writes both panels to stdout.
///
/// # Errors
///
/// Returns an error when the configuration is invalid or stdout cannot be
/// written.
pub async fn run(config: &StorefrontConfig) -> Result<(), StorefrontError> {
    let context = super::fetch_context(config)?;
    let app = load_app(&context, config.snapshot_width).await;

    let mut stdout = io::stdout().lock();
    write_snapshot_to(&mut stdout, &app)
}

/// Builds an application model holding the results of both fetches.
pub async fn load_app(context: &FetchContext, width: u16) -> StorefrontApp {
    let (reviews, settings) = tokio::join!(context.load_reviews(), context.load_site_settings());

    let mut app = StorefrontApp::loading()
        .with_site_url(context.site_url().cloned())
        .with_size(width, u16::MAX);

    let reviews_msg = match reviews {
        Ok(loaded) => AppMsg::ReviewsLoaded(loaded),
        Err(error) => AppMsg::from_error(&error),
    };
    let settings_msg = match settings {
        Ok(loaded) => AppMsg::SettingsLoaded(loaded),
        Err(error) => AppMsg::SettingsFailed(error.to_string()),
    };
    app.handle_message(&reviews_msg);
    app.handle_message(&settings_msg);
    app
}

/// Writes the rendered panels to the given writer.
///
/// # Errors
///
/// Returns [`StorefrontError::Io`] when writing fails.
pub fn write_snapshot_to<W: Write>(writer: &mut W, app: &StorefrontApp) -> Result<(), StorefrontError> {
    write!(writer, "{}", app.snapshot()).map_err(|error| StorefrontError::Io {
        message: error.to_string(),
    })
}
