//! Shared test utilities.

use storefront::ApiBaseUrl;
use wiremock::MockServer;

/// Builds the API root served by a mock backend.
///
/// # Panics
///
/// Panics if the server URI does not form a valid API base URL.
#[expect(clippy::expect_used, reason = "test helper; panics acceptable")]
pub fn api_base(server: &MockServer) -> ApiBaseUrl {
    ApiBaseUrl::parse(&format!("{}/api", server.uri())).expect("mock server URI is a valid base")
}
