//! Configuration types for address-client.

use std::env;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::error::ApiError;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default path of the address collection (`endpoints.address`).
pub const DEFAULT_ADDRESS_PATH: &str = "/api/addresses/";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to the storefront API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "https://shop.example.com").
    pub base_url: String,
    /// Path of the address collection, relative to `base_url`.
    pub address_path: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Bearer token sent with every request.
    api_token: Option<SecretString>,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            address_path: DEFAULT_ADDRESS_PATH.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            api_token: None,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `STOREFRONT_API_URL` | API base URL | `http://localhost:8000` |
    /// | `STOREFRONT_ADDRESS_PATH` | Address collection path | `/api/addresses/` |
    /// | `STOREFRONT_API_TOKEN` | Bearer token | (none) |
    /// | `STOREFRONT_TIMEOUT_SECS` | Request timeout | `30` |
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url =
            env::var("STOREFRONT_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let address_path = env::var("STOREFRONT_ADDRESS_PATH")
            .unwrap_or_else(|_| DEFAULT_ADDRESS_PATH.to_string());

        let timeout_secs = env::var("STOREFRONT_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|e| ApiError::Config(format!("Invalid STOREFRONT_TIMEOUT_SECS: {}", e)))?;

        let mut config = Self::new(base_url)
            .with_address_path(address_path)
            .with_timeout(Duration::from_secs(timeout_secs));

        if let Ok(token) = env::var("STOREFRONT_API_TOKEN") {
            if !token.trim().is_empty() {
                config = config.with_api_token(token);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the base URL looks usable.
    pub fn validate(&self) -> Result<(), ApiError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ApiError::Config(format!(
                "base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Builder method to set the address collection path.
    pub fn with_address_path(mut self, path: impl Into<String>) -> Self {
        self.address_path = path.into();
        self
    }

    /// Builder method to set the bearer token.
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(SecretString::from(token.into()));
        self
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether a bearer token is configured.
    pub fn has_api_token(&self) -> bool {
        self.api_token.is_some()
    }

    /// Get the token (exposes the secret).
    pub(crate) fn api_token(&self) -> Option<&str> {
        self.api_token.as_ref().map(|t| t.expose_secret())
    }

    /// Get the address collection URL.
    pub fn collection_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.address_path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Get the URL of a single address.
    pub fn item_url(&self, id: &str) -> String {
        let collection = self.collection_url();
        let encoded = urlencoding::encode(id);
        if collection.ends_with('/') {
            format!("{}{}/", collection, encoded)
        } else {
            format!("{}/{}", collection, encoded)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
