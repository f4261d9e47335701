//! Scenario state for footer BDD tests.

use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use storefront::SiteSettings;
use storefront::tui::StorefrontApp;
use storefront::tui::state::SectionToggles;
use wiremock::MockServer;

use crate::support::runtime::SharedRuntime;

/// State shared across steps in a footer scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct FooterState {
    /// Settings rendered by the footer.
    pub(crate) settings: Slot<SiteSettings>,
    /// Section toggles chosen by the shopper.
    pub(crate) toggles: Slot<SectionToggles>,
    /// The most recently rendered footer, escapes included.
    pub(crate) rendered: Slot<String>,
    /// Application model fed with the outcome of settings loads.
    pub(crate) app: Slot<StorefrontApp>,
    /// Runtime driving the mock backend.
    pub(crate) runtime: Slot<SharedRuntime>,
    /// Mock storefront backend.
    pub(crate) server: Slot<MockServer>,
}
