use std::time::Duration;

use plagtracker_client::{ApiVersion, PlagtrackerClient, PlagtrackerError, DEFAULT_API_DOMAIN};

#[test]
fn test_defaults_target_public_api() {
    let client = PlagtrackerClient::new("test-user", "test-password").unwrap();

    assert_eq!(client.base_url().host_str(), Some(DEFAULT_API_DOMAIN));
    assert_eq!(client.base_url().scheme(), "https");
    assert_eq!(client.api_version(), ApiVersion::V1);
    assert_eq!(client.timeout(), Duration::from_secs(120));
    assert_eq!(client.login(), "test-user");
}

#[test]
fn test_missing_credentials_rejected() {
    let err = PlagtrackerClient::builder()
        .password("test-password")
        .build()
        .unwrap_err();
    match err {
        PlagtrackerError::ConfigurationError(msg) => assert_eq!(msg, "Login is required"),
        other => panic!("Expected ConfigurationError for missing login, got {other:?}"),
    }

    let err = PlagtrackerClient::builder()
        .login("test-user")
        .build()
        .unwrap_err();
    match err {
        PlagtrackerError::ConfigurationError(msg) => assert_eq!(msg, "Password is required"),
        other => panic!("Expected ConfigurationError for missing password, got {other:?}"),
    }
}

#[test]
fn test_blank_credentials_rejected() {
    for (login, password, expected) in [
        ("", "test-password", "Login is required"),
        ("   ", "test-password", "Login is required"),
        ("test-user", "", "Password is required"),
        ("test-user", "   ", "Password is required"),
    ] {
        match PlagtrackerClient::new(login, password) {
            Err(PlagtrackerError::ConfigurationError(msg)) => assert_eq!(msg, expected),
            other => panic!("Expected ConfigurationError for {login:?}/{password:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_password_from_missing_env_var_reported_at_build() {
    let err = PlagtrackerClient::builder()
        .login("test-user")
        .password_from_env("PLAGTRACKER_TEST_PASSWORD_THAT_IS_NEVER_SET")
        .build()
        .unwrap_err();
    match err {
        PlagtrackerError::ConfigurationError(msg) => {
            assert!(msg.contains("PLAGTRACKER_TEST_PASSWORD_THAT_IS_NEVER_SET"), "{msg}")
        }
        other => panic!("Expected ConfigurationError for env var, got {other:?}"),
    }
}

#[test]
fn test_custom_domain_and_version() {
    let client = PlagtrackerClient::builder()
        .login("test-user")
        .password("test-password")
        .api_domain("staging.plagtracker.com")
        .api_version(ApiVersion::Legacy)
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    assert_eq!(client.base_url().as_str(), "https://staging.plagtracker.com/");
    assert_eq!(client.api_version(), ApiVersion::Legacy);
    assert_eq!(client.timeout(), Duration::from_secs(5));
}

#[test]
fn test_invalid_locations_rejected() {
    let cases = [
        PlagtrackerClient::builder().api_domain(""),
        PlagtrackerClient::builder().api_domain("api.plagtracker.com/api"),
        PlagtrackerClient::builder().base_url("not a url"),
        PlagtrackerClient::builder().base_url("ftp://api.plagtracker.com"),
        PlagtrackerClient::builder()
            .api_domain("api.plagtracker.com")
            .base_url("https://api.plagtracker.com"),
    ];

    for builder in cases {
        match builder.login("test-user").password("test-password").build() {
            Err(PlagtrackerError::ConfigurationError(_)) => {}
            other => panic!("Expected ConfigurationError, got {other:?}"),
        }
    }
}

#[test]
fn test_debug_output_hides_password() {
    let client = PlagtrackerClient::new("test-user", "super-secret").unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("test-user"));
    assert!(!debug.contains("super-secret"));
}
