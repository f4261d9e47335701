//! CLI operation mode handlers.
//!
//! This module contains the implementations for the two operation modes:
//! - [`review_tui`]: Interactive TUI with the review and footer panels
//! - [`snapshot`]: Render both panels once to stdout
//!
//! Both modes build their backend access through [`fetch_context`].

use std::sync::Arc;

use storefront::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};
use storefront::tui::FetchContext;
use storefront::{CachingGateway, HttpStorefrontGateway, StorefrontConfig, StorefrontError};

pub mod review_tui;
pub mod snapshot;

/// Builds the fetch context described by the configuration.
///
/// The HTTP gateway is wrapped in the memoizing cache so that settings are
/// served from memory within the configured stale time.
///
/// # Errors
///
/// Returns an error when the API base URL is missing or invalid, when a
/// configured identifier is blank, or when the HTTP client cannot be built.
pub fn fetch_context(config: &StorefrontConfig) -> Result<FetchContext, StorefrontError> {
    let base = config.require_api_base_url()?;
    let scope = config.review_scope()?;
    let site_url = config.site_url()?.map(|url| url.as_url().clone());

    let http = HttpStorefrontGateway::new(base)?;
    let gateway = CachingGateway::new(http, config.settings_stale_time());

    Ok(
        FetchContext::new(Arc::new(gateway), scope, config.settings_namespace())
            .with_site_url(site_url)
            .with_telemetry(telemetry_sink(config)),
    )
}

fn telemetry_sink(config: &StorefrontConfig) -> Arc<dyn TelemetrySink> {
    if config.telemetry {
        Arc::new(StderrJsonlTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_context_requires_api_base_url() {
        let config = StorefrontConfig::default();
        let error = fetch_context(&config).expect_err("missing base URL");
        assert_eq!(error, StorefrontError::MissingApiBaseUrl);
    }

    #[test]
    fn fetch_context_carries_scope_and_site_url() {
        let config = StorefrontConfig {
            api_base_url: Some("https://shop.example/api".to_owned()),
            variant_id: Some("v1".to_owned()),
            site_url: Some("https://shop.example".to_owned()),
            ..StorefrontConfig::default()
        };

        let context = fetch_context(&config).expect("context builds");

        assert_eq!(
            context.scope().map(|scope| scope.variant().as_str()),
            Some("v1")
        );
        assert_eq!(
            context.site_url().map(url::Url::as_str),
            Some("https://shop.example/")
        );
    }

    #[test]
    fn blank_variant_is_rejected() {
        let config = StorefrontConfig {
            api_base_url: Some("https://shop.example/api".to_owned()),
            variant_id: Some("  ".to_owned()),
            ..StorefrontConfig::default()
        };

        assert_eq!(
            fetch_context(&config).expect_err("blank variant"),
            StorefrontError::InvalidVariantId
        );
    }
}
