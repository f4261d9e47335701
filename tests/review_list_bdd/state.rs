//! Scenario state for review list BDD tests.

use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use storefront::Review;
use storefront::tui::StorefrontApp;
use wiremock::MockServer;

use crate::support::runtime::SharedRuntime;

/// State shared across steps in a review list scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct ReviewListState {
    /// The application model under test.
    pub(crate) app: Slot<StorefrontApp>,
    /// The most recently rendered frame, with escapes stripped.
    pub(crate) rendered_view: Slot<String>,
    /// Runtime driving the mock backend.
    pub(crate) runtime: Slot<SharedRuntime>,
    /// Mock storefront backend.
    pub(crate) server: Slot<MockServer>,
    /// Reviews returned by a gateway load.
    pub(crate) loaded: Slot<Vec<Review>>,
}
