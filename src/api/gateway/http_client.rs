//! `reqwest`-backed gateway talking to the storefront REST API.

use async_trait::async_trait;
use http::header::ACCEPT;
use reqwest::Client;
use url::Url;

use crate::api::error::StorefrontError;
use crate::api::models::wire::{decode_reviews, decode_site_settings};
use crate::api::models::{Review, SiteSettings};
use crate::api::scope::{ApiBaseUrl, ReviewScope, SettingsNamespace};

use super::error_mapping::{extract_api_message, map_http_error, map_transport_error};
use super::{ReviewGateway, SiteSettingsGateway};

const USER_AGENT: &str = concat!("storefront/", env!("CARGO_PKG_VERSION"));

/// HTTP gateway for review and settings endpoints.
#[derive(Debug, Clone)]
pub struct HttpStorefrontGateway {
    client: Client,
    base: ApiBaseUrl,
}

impl HttpStorefrontGateway {
    /// Builds a gateway for the given API root.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Configuration`] when the HTTP client cannot
    /// be constructed.
    pub fn new(base: ApiBaseUrl) -> Result<Self, StorefrontError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|error| StorefrontError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;
        Ok(Self { client, base })
    }

    /// The API root this gateway talks to.
    #[must_use]
    pub const fn base(&self) -> &ApiBaseUrl {
        &self.base
    }

    async fn get_body(&self, operation: &str, url: Url) -> Result<String, StorefrontError> {
        tracing::debug!("{operation}: GET {url}");
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| StorefrontError::Decode {
                message: format!("{operation}: failed to read response body: {error}"),
            })?;

        if !status.is_success() {
            return Err(map_http_error(operation, status, extract_api_message(&body)));
        }
        Ok(body)
    }
}

#[async_trait]
impl ReviewGateway for HttpStorefrontGateway {
    async fn list_reviews(&self, scope: &ReviewScope) -> Result<Vec<Review>, StorefrontError> {
        let body = self
            .get_body("list reviews", scope.endpoint(&self.base))
            .await?;
        let mut reviews = decode_reviews(&body);
        reviews.retain(|review| scope.admits(review.variant_id.as_deref()));
        Ok(reviews)
    }
}

#[async_trait]
impl SiteSettingsGateway for HttpStorefrontGateway {
    async fn site_settings(
        &self,
        namespace: &SettingsNamespace,
    ) -> Result<SiteSettings, StorefrontError> {
        let url = self.base.endpoint(&[namespace.as_str()], &[]);
        let body = self.get_body("load site settings", url).await?;
        Ok(decode_site_settings(&body))
    }
}
