//! Tests for API URL, review scope, namespace, and site URL resolution.

use std::time::Duration;

use rstest::rstest;

use crate::StorefrontConfig;
use crate::api::error::StorefrontError;

#[rstest]
fn require_api_base_url_returns_parsed_url() {
    let config = StorefrontConfig {
        api_base_url: Some("https://shop.example/api".to_owned()),
        ..Default::default()
    };

    let base = config
        .require_api_base_url()
        .expect("API base URL should resolve");

    assert_eq!(base.as_url().as_str(), "https://shop.example/api/");
}

#[rstest]
#[case::unset(None)]
#[case::blank(Some("   "))]
fn require_api_base_url_errors_when_missing(#[case] value: Option<&str>) {
    let config = StorefrontConfig {
        api_base_url: value.map(ToOwned::to_owned),
        ..Default::default()
    };

    assert_eq!(
        config.require_api_base_url(),
        Err(StorefrontError::MissingApiBaseUrl)
    );
}

#[rstest]
fn require_api_base_url_rejects_other_schemes() {
    let config = StorefrontConfig {
        api_base_url: Some("ftp://shop.example".to_owned()),
        ..Default::default()
    };

    assert!(matches!(
        config.require_api_base_url(),
        Err(StorefrontError::InvalidUrl(_))
    ));
}

#[rstest]
fn review_scope_is_none_without_variant() {
    let config = StorefrontConfig {
        order_id: Some("o1".to_owned()),
        ..Default::default()
    };

    assert_eq!(config.review_scope(), Ok(None));
}

#[rstest]
fn review_scope_carries_variant_and_order() {
    let config = StorefrontConfig {
        variant_id: Some(" v1 ".to_owned()),
        order_id: Some("o1".to_owned()),
        ..Default::default()
    };

    let scope = config
        .review_scope()
        .expect("scope should resolve")
        .expect("scope should be present");

    assert_eq!(scope.variant().as_str(), "v1");
    assert_eq!(scope.order().map(|order| order.as_str()), Some("o1"));
}

#[rstest]
fn blank_settings_namespace_falls_back_to_default() {
    let config = StorefrontConfig {
        settings_namespace: String::new(),
        ..Default::default()
    };

    assert_eq!(config.settings_namespace().as_str(), "site-settings");
}

#[rstest]
fn settings_stale_time_is_in_seconds() {
    let config = StorefrontConfig {
        settings_stale_seconds: 90,
        ..Default::default()
    };

    assert_eq!(config.settings_stale_time(), Duration::from_secs(90));
}

#[rstest]
#[case::unset(None, None)]
#[case::blank(Some(""), None)]
#[case::set(Some("https://shop.example"), Some("https://shop.example/"))]
fn site_url_is_optional(#[case] value: Option<&str>, #[case] expected: Option<&str>) {
    let config = StorefrontConfig {
        site_url: value.map(ToOwned::to_owned),
        ..Default::default()
    };

    let resolved = config.site_url().expect("site URL should resolve");

    assert_eq!(resolved.as_ref().map(|url| url.as_url().as_str()), expected);
}
