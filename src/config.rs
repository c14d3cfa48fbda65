//! Endpoint configuration for the remote-call client.
//!
//! The browser build has no runtime environment, so the endpoint is baked in
//! at compile time via `SSAP_ENDPOINT_URL`. Native consumers may pass it
//! explicitly or read it from the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Placeholder endpoint shipped before the web app is deployed.
pub const UNCONFIGURED_ENDPOINT: &str = "YOUR_GAS_DEPLOYMENT_URL_HERE";

/// Environment variable holding the web app deployment URL.
pub const ENDPOINT_ENV: &str = "SSAP_ENDPOINT_URL";

/// Errors produced while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The endpoint environment variable is not set.
    #[error("missing endpoint: env var {var} not set")]
    MissingEndpoint { var: &'static str },
}

/// Typed client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::unconfigured()
    }
}

impl ClientConfig {
    /// Build a config pointing at `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into().trim().to_owned();
        Self { endpoint }
    }

    /// Config carrying the placeholder endpoint. Every call made with it
    /// fails with a configuration error.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self::new(UNCONFIGURED_ENDPOINT)
    }

    /// Config baked in at compile time from `SSAP_ENDPOINT_URL`, falling back
    /// to the placeholder.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("SSAP_ENDPOINT_URL"))
    }

    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEndpoint`] if `SSAP_ENDPOINT_URL` is unset.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(ENDPOINT_ENV).map_err(|_| ConfigError::MissingEndpoint { var: ENDPOINT_ENV })?;
        Ok(Self::new(raw))
    }

    fn from_raw(raw: Option<&str>) -> Self {
        raw.map_or_else(Self::unconfigured, Self::new)
    }

    /// The configured endpoint URL, placeholder included.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `false` when the endpoint is blank or still the placeholder.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty() && self.endpoint != UNCONFIGURED_ENDPOINT
    }

    /// The endpoint, or `None` when unconfigured.
    #[must_use]
    pub fn configured_endpoint(&self) -> Option<&str> {
        self.is_configured().then_some(self.endpoint.as_str())
    }
}
