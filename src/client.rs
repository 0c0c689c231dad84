use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use log::debug;
use reqwest::Client as ReqwestClient;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::api::endpoint::{ApiVersion, Endpoint};
use crate::api::text::TextHandler;
use crate::models::api_response::Response;
use crate::{PlagtrackerError, PlagtrackerResult};

/// Host of the public Plagtracker API.
pub const DEFAULT_API_DOMAIN: &str = "api.plagtracker.com";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Builder for the Plagtracker client.
///
/// This builder provides a fluent API for creating clients with validation
/// at build time.
#[derive(Default)]
pub struct PlagtrackerClientBuilder {
    login: Option<String>,
    password: Option<String>,
    password_env_error: Option<String>,
    api_domain: Option<String>,
    base_url: Option<String>,
    api_version: ApiVersion,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    accept_invalid_certs: bool,
    http_client: Option<ReqwestClient>,
}

impl PlagtrackerClientBuilder {
    /// Sets the account login.
    pub fn login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    /// Sets the account password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self.password_env_error = None;
        self
    }

    /// Sets the password from an environment variable.
    ///
    /// A missing or non-unicode variable is reported by [`build`](Self::build).
    pub fn password_from_env(mut self, var_name: &str) -> Self {
        match std::env::var(var_name) {
            Ok(password) => {
                self.password = Some(password);
                self.password_env_error = None;
            }
            Err(e) => {
                self.password = None;
                self.password_env_error =
                    Some(format!("Failed to read environment variable '{var_name}': {e}"));
            }
        }
        self
    }

    /// Sets the API host name. Requests go to `https://<domain>`.
    pub fn api_domain(mut self, domain: impl Into<String>) -> Self {
        self.api_domain = Some(domain.into());
        self
    }

    /// Sets the full base URL, scheme included, in place of an API domain.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the API path layout. Defaults to [`ApiVersion::V1`].
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = version;
        self
    }

    /// Sets the HTTP request timeout. Defaults to 120 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a custom user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets whether invalid TLS certificates are accepted.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Sets a custom reqwest client (e.g., for testing or custom middleware).
    ///
    /// The user agent and certificate settings of this builder are not applied
    /// to a custom client; the timeout still is.
    pub fn http_client(mut self, http_client: ReqwestClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn build(self) -> PlagtrackerResult<PlagtrackerClient> {
        let login = self
            .login
            .filter(|login| !login.trim().is_empty())
            .ok_or_else(|| PlagtrackerError::ConfigurationError("Login is required".into()))?;

        if let Some(env_error) = self.password_env_error {
            return Err(PlagtrackerError::ConfigurationError(env_error));
        }
        let password = self
            .password
            .filter(|password| !password.trim().is_empty())
            .ok_or_else(|| PlagtrackerError::ConfigurationError("Password is required".into()))?;

        let base_url = match (self.base_url, self.api_domain) {
            (Some(_), Some(_)) => {
                return Err(PlagtrackerError::ConfigurationError(
                    "Set either an API domain or a base URL, not both".into(),
                ))
            }
            (Some(url), None) => parse_base_url(&url)?,
            (None, domain) => {
                domain_url(domain.as_deref().unwrap_or(DEFAULT_API_DOMAIN))?
            }
        };

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        let http_client = match self.http_client {
            Some(custom_client) => custom_client,
            None => {
                let user_agent = self
                    .user_agent
                    .as_deref()
                    .unwrap_or(concat!("plagtracker-client/", env!("CARGO_PKG_VERSION")));

                ReqwestClient::builder()
                    .timeout(timeout)
                    .danger_accept_invalid_certs(self.accept_invalid_certs)
                    .user_agent(user_agent)
                    .build()
                    .map_err(|e| {
                        PlagtrackerError::ConfigurationError(format!(
                            "Failed to create HTTP client: {e}"
                        ))
                    })?
            }
        };

        Ok(PlagtrackerClient {
            base_url,
            api_version: self.api_version,
            login,
            password: Arc::new(SecretString::from(password)),
            timeout,
            http_client,
        })
    }
}

fn parse_base_url(url: &str) -> PlagtrackerResult<Url> {
    let url = Url::parse(url)
        .map_err(|e| PlagtrackerError::ConfigurationError(format!("Invalid base URL: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(PlagtrackerError::ConfigurationError(format!(
            "Invalid base URL: {url} is not an http(s) URL"
        )));
    }
    Ok(url)
}

fn domain_url(domain: &str) -> PlagtrackerResult<Url> {
    let domain = domain.trim();
    if domain.is_empty() || domain.contains(['/', '?', '#']) {
        return Err(PlagtrackerError::ConfigurationError(format!(
            "Invalid API domain: {domain:?}"
        )));
    }

    Url::parse(&format!("https://{domain}"))
        .map_err(|e| PlagtrackerError::ConfigurationError(format!("Invalid API domain: {e}")))
}

/// The client for the Plagtracker API.
///
/// Holds the credentials and the HTTP connection pool. Cloning is cheap and
/// clones share the pool.
#[derive(Clone)]
pub struct PlagtrackerClient {
    base_url: Url,
    api_version: ApiVersion,
    login: String,
    password: Arc<SecretString>,
    timeout: Duration,
    http_client: ReqwestClient,
}

impl fmt::Debug for PlagtrackerClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlagtrackerClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_version", &self.api_version)
            .field("login", &self.login)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl PlagtrackerClient {
    pub fn builder() -> PlagtrackerClientBuilder {
        PlagtrackerClientBuilder::default()
    }

    /// Creates a client for the public API with default settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if the login or password is blank.
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> PlagtrackerResult<Self> {
        Self::builder().login(login).password(password).build()
    }

    /// Gets the text API interface.
    pub fn texts(&self) -> TextHandler {
        TextHandler::new(self.clone())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the full URL of an endpoint for this client.
    ///
    /// # Examples
    ///
    /// ```
    /// use plagtracker_client::{Endpoint, PlagtrackerClient};
    ///
    /// let client = PlagtrackerClient::new("login", "password")?;
    /// let url = client.endpoint_url(&Endpoint::PlagiarismPercent("f00cdac4"))?;
    /// assert_eq!(
    ///     url.as_str(),
    ///     "https://api.plagtracker.com/api/v1/text/f00cdac4/plagiarism-percent/"
    /// );
    /// # Ok::<(), plagtracker_client::PlagtrackerError>(())
    /// ```
    pub fn endpoint_url(&self, endpoint: &Endpoint<'_>) -> PlagtrackerResult<Url> {
        endpoint.url(&self.base_url, self.api_version)
    }

    /// Sends an authenticated request and decodes the response envelope.
    ///
    /// `form` is sent as an `application/x-www-form-urlencoded` body.
    /// Unsuccessful HTTP statuses are not errors: they are reported through
    /// the returned [`Response`].
    pub(crate) async fn request<F, T>(
        &self,
        endpoint: Endpoint<'_>,
        form: Option<F>,
    ) -> PlagtrackerResult<Response<T>>
    where
        F: Serialize,
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(&endpoint)?;
        let method = endpoint.method();
        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, url)
            .basic_auth(&self.login, Some(self.password.expose_secret()))
            .timeout(self.timeout);

        if let Some(form) = form {
            request = request.form(&form);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("{:?} answered {}", endpoint, status);

        Response::from_envelope(status, &body)
    }
}
