//! Gateways for loading reviews and site settings from the storefront API.
//!
//! The trait-based design lets the UI depend on behaviour rather than on a
//! concrete HTTP client: tests substitute mocks, the binary wires the
//! `reqwest` implementation behind the memoizing [`CachingGateway`].

mod caching;
mod error_mapping;
mod http_client;
mod query_cache;

pub use caching::{CachingGateway, DEFAULT_SETTINGS_STALE_TIME};
pub use http_client::HttpStorefrontGateway;
pub use query_cache::QueryCache;

use async_trait::async_trait;

use crate::api::error::StorefrontError;
use crate::api::models::{Review, SiteSettings};
use crate::api::scope::{ReviewScope, SettingsNamespace};

/// Gateway that can load the reviews in a scope.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewGateway: Send + Sync {
    /// Fetch the reviews visible in `scope`.
    ///
    /// Order-scoped results contain only reviews of the scope's variant.
    async fn list_reviews(&self, scope: &ReviewScope) -> Result<Vec<Review>, StorefrontError>;
}

/// Gateway that can load site settings from a namespace.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SiteSettingsGateway: Send + Sync {
    /// Fetch the settings singleton stored under `namespace`.
    async fn site_settings(
        &self,
        namespace: &SettingsNamespace,
    ) -> Result<SiteSettings, StorefrontError>;
}

/// Everything the storefront panels need from the backend.
pub trait StorefrontGateway: ReviewGateway + SiteSettingsGateway {}

impl<T> StorefrontGateway for T where T: ReviewGateway + SiteSettingsGateway {}
