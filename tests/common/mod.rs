use plagtracker_client::PlagtrackerClient;
use wiremock::matchers::header;
use wiremock::MockBuilder;

pub const HASH: &str = "f00cdac492b59749e8ea7436cd7c8a96";

/// Set up a test client pointed at the mock server with predefined credentials
#[allow(dead_code)]
pub fn setup_test_client(server_url: &str) -> PlagtrackerClient {
    PlagtrackerClient::builder()
        .login("test-user")
        .password("test-password")
        .base_url(server_url)
        .build()
        .expect("Failed to build PlagtrackerClient")
}

/// Require the Basic auth header of the test credentials.
#[allow(dead_code)]
pub fn with_auth(mock: MockBuilder) -> MockBuilder {
    // base64("test-user:test-password")
    mock.and(header(
        "authorization",
        "Basic dGVzdC11c2VyOnRlc3QtcGFzc3dvcmQ=",
    ))
}
