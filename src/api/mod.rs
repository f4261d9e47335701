//! Storefront backend access: reviews and site settings.
//!
//! This module validates the identifiers a storefront page is scoped by,
//! decodes the backend's loosely typed JSON into domain models, and exposes
//! trait-based gateways so the UI can be driven by mocks in tests. Errors are
//! mapped into [`StorefrontError`] variants that render cleanly in the
//! terminal.

pub mod error;
pub mod gateway;
pub mod models;
pub mod scope;

pub use error::StorefrontError;
pub use gateway::{
    CachingGateway, DEFAULT_SETTINGS_STALE_TIME, HttpStorefrontGateway, QueryCache, ReviewGateway,
    SiteSettingsGateway, StorefrontGateway,
};
pub use models::{
    AppLinks, FooterSettings, Review, ReviewAuthor, ReviewImage, SiteSettings, SocialLinks,
    SocialPlatform,
};
pub use scope::{ApiBaseUrl, OrderId, ReviewScope, SettingsNamespace, VariantId};

#[cfg(test)]
pub use gateway::{MockReviewGateway, MockSiteSettingsGateway};
