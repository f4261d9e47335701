//! Tests for the TUI fetch context.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use crate::api::models::test_support::{review, settings_with_social};
use crate::api::{OrderId, SocialPlatform, VariantId};
use crate::telemetry::test_support::RecordingTelemetrySink;
use crate::telemetry::{FetchResource, TelemetryEvent};

use super::*;

mock! {
    pub Storefront {}

    #[async_trait]
    impl ReviewGateway for Storefront {
        async fn list_reviews(&self, scope: &ReviewScope) -> Result<Vec<Review>, StorefrontError>;
    }

    #[async_trait]
    impl SiteSettingsGateway for Storefront {
        async fn site_settings(
            &self,
            namespace: &SettingsNamespace,
        ) -> Result<SiteSettings, StorefrontError>;
    }
}

fn variant_scope() -> ReviewScope {
    ReviewScope::for_variant(VariantId::new("v1").expect("valid variant"))
}

fn context_with(
    gateway: MockStorefront,
    scope: Option<ReviewScope>,
) -> (FetchContext, Arc<RecordingTelemetrySink>) {
    let telemetry = Arc::new(RecordingTelemetrySink::default());
    let context = FetchContext::new(Arc::new(gateway), scope, SettingsNamespace::default())
        .with_telemetry(telemetry.clone());
    (context, telemetry)
}

#[tokio::test]
async fn load_reviews_records_count() {
    let mut gateway = MockStorefront::new();
    gateway
        .expect_list_reviews()
        .withf(|scope| scope.variant().as_str() == "v1" && scope.order().is_none())
        .times(1)
        .returning(|_| Ok(vec![review("a", 5, "Great"), review("b", 4, "Good")]));
    let (context, telemetry) = context_with(gateway, Some(variant_scope()));

    let reviews = context.load_reviews().await.expect("reviews load");

    assert_eq!(reviews.len(), 2);
    let events = telemetry.take();
    assert!(matches!(
        events.as_slice(),
        [TelemetryEvent::ReviewsLoaded { review_count: 2, .. }]
    ));
}

#[tokio::test]
async fn load_reviews_passes_order_scope() {
    let mut gateway = MockStorefront::new();
    gateway
        .expect_list_reviews()
        .withf(|scope| scope.order().map(OrderId::as_str) == Some("o-7"))
        .times(1)
        .returning(|_| Ok(Vec::new()));
    let scope = variant_scope().within_order(OrderId::new("o-7").expect("valid order"));
    let (context, _telemetry) = context_with(gateway, Some(scope));

    assert!(context.load_reviews().await.expect("reviews load").is_empty());
}

#[tokio::test]
async fn load_reviews_without_variant_skips_backend() {
    let mut gateway = MockStorefront::new();
    gateway.expect_list_reviews().never();
    let (context, telemetry) = context_with(gateway, None);

    let reviews = context.load_reviews().await.expect("empty result");

    assert!(reviews.is_empty());
    assert!(telemetry.take().is_empty());
}

#[tokio::test]
async fn load_reviews_failure_is_recorded() {
    let mut gateway = MockStorefront::new();
    gateway.expect_list_reviews().returning(|_| {
        Err(StorefrontError::Network {
            message: "connection reset".to_owned(),
        })
    });
    let (context, telemetry) = context_with(gateway, Some(variant_scope()));

    let error = context.load_reviews().await.expect_err("fetch fails");

    assert!(matches!(error, StorefrontError::Network { .. }));
    assert_eq!(
        telemetry.take(),
        vec![TelemetryEvent::FetchFailed {
            resource: FetchResource::Reviews,
            message: error.to_string(),
        }]
    );
}

#[tokio::test]
async fn load_site_settings_uses_namespace() {
    let mut gateway = MockStorefront::new();
    gateway
        .expect_site_settings()
        .withf(|namespace| namespace.as_str() == "site-settings")
        .times(1)
        .returning(|_| {
            Ok(settings_with_social(&[(
                SocialPlatform::Youtube,
                "https://youtube.com/@shop",
            )]))
        });
    let (context, telemetry) = context_with(gateway, None);

    let settings = context.load_site_settings().await.expect("settings load");

    assert_eq!(
        settings.footer.social_links.get(SocialPlatform::Youtube),
        Some("https://youtube.com/@shop")
    );
    assert!(matches!(
        telemetry.take().as_slice(),
        [TelemetryEvent::SiteSettingsLoaded { .. }]
    ));
}

#[tokio::test]
async fn load_site_settings_failure_is_recorded() {
    let mut gateway = MockStorefront::new();
    gateway.expect_site_settings().returning(|_| {
        Err(StorefrontError::Api {
            status: 503,
            message: "maintenance".to_owned(),
        })
    });
    let (context, telemetry) = context_with(gateway, None);

    assert!(context.load_site_settings().await.is_err());
    assert!(matches!(
        telemetry.take().as_slice(),
        [TelemetryEvent::FetchFailed {
            resource: FetchResource::SiteSettings,
            ..
        }]
    ));
}

#[test]
fn site_url_is_optional() {
    let gateway = MockStorefront::new();
    let (context, _telemetry) = context_with(gateway, None);
    assert!(context.site_url().is_none());

    let site = Url::parse("https://shop.example/").expect("valid url");
    let with_site = context.with_site_url(Some(site.clone()));
    assert_eq!(with_site.site_url(), Some(&site));
}
