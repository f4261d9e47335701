//! Gateway decorator that memoizes review and settings queries.

use std::time::Duration;

use async_trait::async_trait;

use crate::api::error::StorefrontError;
use crate::api::models::{Review, SiteSettings};
use crate::api::scope::{ReviewScope, SettingsNamespace};

use super::query_cache::QueryCache;
use super::{ReviewGateway, SiteSettingsGateway};

/// Default stale time for site settings: five minutes.
pub const DEFAULT_SETTINGS_STALE_TIME: Duration = Duration::from_secs(300);

/// Wraps a gateway with per-query memoization.
///
/// Reviews use a zero stale time: every load refetches, but concurrent loads
/// of the same scope share one request. Settings are reused until their
/// stale time elapses.
#[derive(Debug)]
pub struct CachingGateway<G> {
    inner: G,
    reviews: QueryCache<ReviewScope, Vec<Review>>,
    settings: QueryCache<SettingsNamespace, SiteSettings>,
}

impl<G> CachingGateway<G> {
    /// Wraps `inner`, keeping settings for `settings_stale_time`.
    #[must_use]
    pub fn new(inner: G, settings_stale_time: Duration) -> Self {
        Self {
            inner,
            reviews: QueryCache::new(Duration::ZERO),
            settings: QueryCache::new(settings_stale_time),
        }
    }

    /// Borrow the wrapped gateway.
    #[must_use]
    pub const fn inner(&self) -> &G {
        &self.inner
    }
}

#[async_trait]
impl<G> ReviewGateway for CachingGateway<G>
where
    G: ReviewGateway,
{
    async fn list_reviews(&self, scope: &ReviewScope) -> Result<Vec<Review>, StorefrontError> {
        self.reviews
            .get_or_fetch(scope, || self.inner.list_reviews(scope))
            .await
    }
}

#[async_trait]
impl<G> SiteSettingsGateway for CachingGateway<G>
where
    G: SiteSettingsGateway,
{
    async fn site_settings(
        &self,
        namespace: &SettingsNamespace,
    ) -> Result<SiteSettings, StorefrontError> {
        self.settings
            .get_or_fetch(namespace, || self.inner.site_settings(namespace))
            .await
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::api::gateway::{MockReviewGateway, MockSiteSettingsGateway};
    use crate::api::models::test_support::review;
    use crate::api::scope::VariantId;

    #[tokio::test(start_paused = true)]
    async fn settings_are_fetched_once_within_stale_time() {
        let mut inner = MockSiteSettingsGateway::new();
        inner
            .expect_site_settings()
            .with(eq(SettingsNamespace::default()))
            .times(1)
            .returning(|_| Ok(SiteSettings::default()));

        let gateway = CachingGateway::new(inner, DEFAULT_SETTINGS_STALE_TIME);
        let namespace = SettingsNamespace::default();

        for _ in 0..3 {
            gateway
                .site_settings(&namespace)
                .await
                .expect("settings load");
            tokio::time::advance(Duration::from_secs(60)).await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn settings_refetch_once_stale() {
        let mut inner = MockSiteSettingsGateway::new();
        inner
            .expect_site_settings()
            .times(2)
            .returning(|_| Ok(SiteSettings::default()));

        let gateway = CachingGateway::new(inner, DEFAULT_SETTINGS_STALE_TIME);
        let namespace = SettingsNamespace::default();

        gateway
            .site_settings(&namespace)
            .await
            .expect("settings load");
        tokio::time::advance(DEFAULT_SETTINGS_STALE_TIME).await;
        gateway
            .site_settings(&namespace)
            .await
            .expect("settings reload");
    }

    #[tokio::test]
    async fn reviews_refetch_on_every_load() {
        let mut inner = MockReviewGateway::new();
        inner
            .expect_list_reviews()
            .times(2)
            .returning(|_| Ok(vec![review("r1", 5, "Great")]));

        let gateway = CachingGateway::new(inner, DEFAULT_SETTINGS_STALE_TIME);
        let scope = ReviewScope::for_variant(VariantId::new("v1").expect("valid variant"));

        let first = gateway.list_reviews(&scope).await.expect("first load");
        let second = gateway.list_reviews(&scope).await.expect("second load");

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn review_errors_propagate() {
        let mut inner = MockReviewGateway::new();
        inner.expect_list_reviews().returning(|_| {
            Err(StorefrontError::Network {
                message: "offline".to_owned(),
            })
        });

        let gateway = CachingGateway::new(inner, DEFAULT_SETTINGS_STALE_TIME);
        let scope = ReviewScope::for_variant(VariantId::new("v1").expect("valid variant"));

        let result = gateway.list_reviews(&scope).await;
        assert!(matches!(result, Err(StorefrontError::Network { .. })));
    }
}
