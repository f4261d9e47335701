//! Behavioural tests for the site footer and its cached settings.

mod support {
    #[path = "../support/mod.rs"]
    mod common;

    pub use common::api_base;

    #[path = "../support/runtime.rs"]
    pub mod runtime;
}

#[path = "footer_bdd/mod.rs"]
mod footer_bdd_support;

use std::sync::Arc;
use std::time::Duration;

use footer_bdd_support::FooterState;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::json;
use storefront::api::models::test_support::settings_with_social;
use storefront::tui::components::test_utils::strip_ansi_codes;
use storefront::tui::components::{FooterComponent, FooterViewContext};
use storefront::tui::messages::AppMsg;
use storefront::tui::state::{FooterSection, SectionToggles};
use storefront::tui::{FetchContext, StorefrontApp};
use storefront::api::SocialPlatform;
use storefront::{CachingGateway, HttpStorefrontGateway, SettingsNamespace, SiteSettings};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use support::runtime::ensure_runtime_and_server;

const SETTINGS_STALE_TIME: Duration = Duration::from_secs(300);

#[fixture]
fn footer_state() -> FooterState {
    FooterState::default()
}

impl FooterState {
    #[expect(clippy::expect_used, reason = "test helper; panics acceptable")]
    fn rendered_text(&self) -> String {
        self.rendered
            .with_ref(|raw| strip_ansi_codes(raw))
            .expect("footer not rendered")
    }

    #[expect(clippy::expect_used, reason = "test helper; panics acceptable")]
    fn rendered_raw(&self) -> String {
        self.rendered
            .with_ref(Clone::clone)
            .expect("footer not rendered")
    }

    #[expect(clippy::expect_used, reason = "test helper; panics acceptable")]
    fn toggle(&self, section: FooterSection) {
        if self.toggles.with_ref(|_| ()).is_none() {
            self.toggles.set(SectionToggles::default());
        }
        self.toggles
            .with_mut(|toggles| toggles.toggle(section))
            .expect("toggles initialised");
    }

    #[expect(clippy::expect_used, reason = "test helper; panics acceptable")]
    fn mount_settings(&self, response: ResponseTemplate) {
        let runtime =
            ensure_runtime_and_server(&self.runtime, &self.server).expect("runtime and server");
        self.server
            .with_ref(|server| {
                runtime.block_on(
                    Mock::given(method("GET"))
                        .and(path("/api/site-settings"))
                        .respond_with(response)
                        .mount(server),
                );
            })
            .expect("server not initialised");
    }
}

fn section_named(name: &str) -> FooterSection {
    match name {
        "About" => FooterSection::About,
        "Contact" => FooterSection::Contact,
        _ => FooterSection::Services,
    }
}

// Given steps

#[given("site settings with a facebook link {url}")]
fn given_settings_with_facebook(footer_state: &FooterState, url: String) {
    footer_state
        .settings
        .set(settings_with_social(&[(SocialPlatform::Facebook, url.as_str())]));
}

#[given("default site settings")]
fn given_default_settings(footer_state: &FooterState) {
    footer_state.settings.set(SiteSettings::default());
}

#[given("the shopper closes the {section} section")]
fn given_section_closed(footer_state: &FooterState, section: String) {
    footer_state.toggle(section_named(&section));
}

#[given("the shopper opens the {section} section")]
fn given_section_opened(footer_state: &FooterState, section: String) {
    footer_state.toggle(section_named(&section));
}

#[given("a backend serving site settings with phone {phone}")]
fn given_backend_with_phone(footer_state: &FooterState, phone: String) {
    footer_state.mount_settings(ResponseTemplate::new(200).set_body_json(json!({
        "data": [{ "footer": { "phone": phone } }]
    })));
}

#[given("a backend whose site settings fail")]
fn given_failing_backend(footer_state: &FooterState) {
    footer_state.mount_settings(
        ResponseTemplate::new(500).set_body_json(json!({ "message": "settings unavailable" })),
    );
}

// When steps

#[when("the footer is rendered at width {width:u16}")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn when_footer_rendered(footer_state: &FooterState, width: u16) {
    let settings = footer_state
        .settings
        .with_ref(Clone::clone)
        .expect("settings not initialised");
    let toggles = footer_state
        .toggles
        .with_ref(|toggles| *toggles)
        .unwrap_or_default();
    let view = FooterComponent::view(&FooterViewContext {
        settings: &settings,
        toggles: &toggles,
        width,
        site_url: None,
    });
    footer_state.rendered.set(view);
}

#[when("site settings are loaded {count:usize} times")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn when_settings_loaded(footer_state: &FooterState, count: usize) {
    let runtime = footer_state
        .runtime
        .get()
        .expect("runtime not initialised");
    let base = footer_state
        .server
        .with_ref(support::api_base)
        .expect("server not initialised");
    let http = HttpStorefrontGateway::new(base).expect("gateway builds");
    let gateway = CachingGateway::new(http, SETTINGS_STALE_TIME);
    let context = FetchContext::new(Arc::new(gateway), None, SettingsNamespace::default());

    let mut app = StorefrontApp::loading().with_size(80, 40);
    for _ in 0..count {
        let msg = match runtime.block_on(context.load_site_settings()) {
            Ok(settings) => AppMsg::SettingsLoaded(settings),
            Err(error) => AppMsg::SettingsFailed(error.to_string()),
        };
        app.handle_message(&msg);
    }

    footer_state.rendered.set(app.snapshot());
    footer_state.app.set(app);
}

// Then steps

#[then("the {icon} icon links to {url}")]
fn then_icon_links(footer_state: &FooterState, icon: String, url: String) {
    let raw = footer_state.rendered_raw();
    let expected = format!("\x1b]8;;{url}\x1b\\{icon}\x1b]8;;\x1b\\");
    assert!(raw.contains(&expected), "{icon} should link to {url}");
}

#[then("the {icon} icon is dimmed")]
fn then_icon_dimmed(footer_state: &FooterState, icon: String) {
    let raw = footer_state.rendered_raw();
    let expected = format!("\x1b[2m{icon}\x1b[0m");
    assert!(raw.contains(&expected), "{icon} should render dimmed");
}

#[then("the footer lists {label}")]
fn then_footer_lists(footer_state: &FooterState, label: String) {
    let text = footer_state.rendered_text();
    assert!(text.contains(&label), "expected {label} in:\n{text}");
}

#[then("the footer does not list {label}")]
fn then_footer_omits(footer_state: &FooterState, label: String) {
    let text = footer_state.rendered_text();
    assert!(!text.contains(&label), "unexpected {label} in:\n{text}");
}

#[then("the backend received {count:usize} settings request")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_backend_received(footer_state: &FooterState, count: usize) {
    let runtime = footer_state
        .runtime
        .get()
        .expect("runtime not initialised");
    let received = footer_state
        .server
        .with_ref(|server| runtime.block_on(server.received_requests()))
        .expect("server not initialised")
        .expect("request recording enabled");
    assert_eq!(received.len(), count);
}

#[then("the footer hotline reads {phone}")]
fn then_hotline_reads(footer_state: &FooterState, phone: String) {
    let text = footer_state.rendered_text();
    assert!(
        text.contains(&format!("HOTLINE: {phone}")),
        "expected hotline {phone} in:\n{text}"
    );
}

// Scenarios

#[scenario(path = "tests/features/footer.feature", index = 0)]
fn missing_social_links_are_dimmed(footer_state: FooterState) {
    let _ = footer_state;
}

#[scenario(path = "tests/features/footer.feature", index = 1)]
fn wide_viewports_show_every_section(footer_state: FooterState) {
    let _ = footer_state;
}

#[scenario(path = "tests/features/footer.feature", index = 2)]
fn narrow_viewports_honour_toggles(footer_state: FooterState) {
    let _ = footer_state;
}

#[scenario(path = "tests/features/footer.feature", index = 3)]
fn settings_are_fetched_once(footer_state: FooterState) {
    let _ = footer_state;
}

#[scenario(path = "tests/features/footer.feature", index = 4)]
fn failed_settings_use_defaults(footer_state: FooterState) {
    let _ = footer_state;
}
