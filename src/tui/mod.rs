//! Terminal User Interface for the storefront review list and footer.
//!
//! This module provides an interactive TUI for browsing a product variant's
//! reviews and the site footer using the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::StorefrontApp`]
//! - **View**: Rendering logic in each component's `view()` function
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Filter, pagination, and section state
//! - [`components`]: Stateless renderers
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Fetch context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the gateway and scope are stored at module level. Call
//! [`set_fetch_context`] before starting the program; `StorefrontApp::init()`
//! and the refresh handler read it back.

use std::sync::{Arc, OnceLock};
use std::time::Instant;

use tracing::{debug, warn};
use url::Url;

use crate::api::{
    Review, ReviewGateway, ReviewScope, SettingsNamespace, SiteSettings, SiteSettingsGateway,
    StorefrontError, StorefrontGateway,
};
use crate::telemetry::{FetchResource, NoopTelemetrySink, TelemetryEvent, TelemetrySink};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::{Panel, StorefrontApp};

/// Global storage for the fetch context.
///
/// This is set before the TUI program starts and read by the fetch commands.
static FETCH_CONTEXT: OnceLock<FetchContext> = OnceLock::new();

/// Everything the fetch commands need to reach the backend.
pub struct FetchContext {
    gateway: Arc<dyn StorefrontGateway>,
    scope: Option<ReviewScope>,
    namespace: SettingsNamespace,
    site_url: Option<Url>,
    telemetry: Arc<dyn TelemetrySink>,
}

impl std::fmt::Debug for FetchContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchContext")
            .field("scope", &self.scope)
            .field("namespace", &self.namespace)
            .field("site_url", &self.site_url)
            .finish_non_exhaustive()
    }
}

impl FetchContext {
    /// Creates a context that records no telemetry.
    ///
    /// A missing `scope` means no variant was configured: review loads
    /// succeed with an empty list without contacting the backend.
    #[must_use]
    pub fn new(
        gateway: Arc<dyn StorefrontGateway>,
        scope: Option<ReviewScope>,
        namespace: SettingsNamespace,
    ) -> Self {
        Self {
            gateway,
            scope,
            namespace,
            site_url: None,
            telemetry: Arc::new(NoopTelemetrySink),
        }
    }

    /// Sets the storefront root used to resolve footer routes.
    #[must_use]
    pub fn with_site_url(mut self, site_url: Option<Url>) -> Self {
        self.site_url = site_url;
        self
    }

    /// Sets the sink that receives fetch telemetry.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// The review scope, if a variant was configured.
    #[must_use]
    pub const fn scope(&self) -> Option<&ReviewScope> {
        self.scope.as_ref()
    }

    /// The storefront root, if configured.
    #[must_use]
    pub const fn site_url(&self) -> Option<&Url> {
        self.site_url.as_ref()
    }

    /// Loads the reviews in scope, recording latency or failure.
    ///
    /// # Errors
    ///
    /// Returns the gateway's error when the fetch fails.
    pub async fn load_reviews(&self) -> Result<Vec<Review>, StorefrontError> {
        let Some(scope) = self.scope.as_ref() else {
            debug!("no variant configured, skipping review fetch");
            return Ok(Vec::new());
        };

        let start = Instant::now();
        match self.gateway.list_reviews(scope).await {
            Ok(reviews) => {
                self.telemetry.record(TelemetryEvent::ReviewsLoaded {
                    review_count: reviews.len(),
                    latency_ms: elapsed_ms(start),
                });
                Ok(reviews)
            }
            Err(error) => {
                self.record_failure(FetchResource::Reviews, &error);
                Err(error)
            }
        }
    }

    /// Loads the site settings, recording latency or failure.
    ///
    /// # Errors
    ///
    /// Returns the gateway's error when the fetch fails. Callers fall back
    /// to default settings.
    pub async fn load_site_settings(&self) -> Result<SiteSettings, StorefrontError> {
        let start = Instant::now();
        match self.gateway.site_settings(&self.namespace).await {
            Ok(settings) => {
                self.telemetry.record(TelemetryEvent::SiteSettingsLoaded {
                    latency_ms: elapsed_ms(start),
                });
                Ok(settings)
            }
            Err(error) => {
                warn!(
                    namespace = self.namespace.as_str(),
                    %error,
                    "site settings unavailable, using defaults"
                );
                self.record_failure(FetchResource::SiteSettings, &error);
                Err(error)
            }
        }
    }

    fn record_failure(&self, resource: FetchResource, error: &StorefrontError) {
        self.telemetry.record(TelemetryEvent::FetchFailed {
            resource,
            message: error.to_string(),
        });
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Latency over u64::MAX milliseconds is unrealistic"
)]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

/// Sets the fetch context for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. Without it,
/// fetches fail with a configuration error.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_fetch_context(context: FetchContext) -> bool {
    FETCH_CONTEXT.set(context).is_ok()
}

/// Returns the stored fetch context, if any.
pub(crate) fn fetch_context() -> Option<&'static FetchContext> {
    FETCH_CONTEXT.get()
}

fn missing_context() -> StorefrontError {
    StorefrontError::Configuration {
        message: "fetch context not configured".to_owned(),
    }
}

/// Fetches reviews through the stored context.
pub(crate) async fn fetch_reviews() -> Result<Vec<Review>, StorefrontError> {
    let context = fetch_context().ok_or_else(missing_context)?;
    context.load_reviews().await
}

/// Fetches site settings through the stored context.
pub(crate) async fn fetch_site_settings() -> Result<SiteSettings, StorefrontError> {
    let context = fetch_context().ok_or_else(missing_context)?;
    context.load_site_settings().await
}

#[cfg(test)]
mod tests;
