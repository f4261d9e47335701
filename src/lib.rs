//! Storefront library crate: product review list and site footer panels.
//!
//! The library loads a product variant's reviews and the site-wide settings
//! from a storefront backend, then renders them as two terminal panels: a
//! filterable, paginated review list with expandable comments and an image
//! zoom overlay, and a footer with social, contact, and app links. Errors are
//! surfaced as [`StorefrontError`] values that display cleanly in the CLI.

pub mod api;
pub mod config;
pub mod telemetry;
pub mod tui;

pub use api::{
    ApiBaseUrl, CachingGateway, HttpStorefrontGateway, OrderId, Review, ReviewGateway,
    ReviewScope, SettingsNamespace, SiteSettings, SiteSettingsGateway, StorefrontError,
    StorefrontGateway, VariantId,
};
pub use config::{OperationMode, StorefrontConfig};
