//! Storefront address HTTP client.

use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::{debug, warn};

use address_book::{extract_items, normalize_all, AddressPayload, NormalizedAddress};

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};

/// Client for the address REST resource.
///
/// Every operation is a single request. Responses are returned verbatim;
/// there is no caching or retry.
#[derive(Clone)]
pub struct AddressClient {
    http: Client,
    config: ClientConfig,
}

impl AddressClient {
    /// Create a client for the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::Http)?;

        Ok(Self { http, config })
    }

    /// Create a client around an existing `reqwest::Client`.
    ///
    /// The configured timeout is not applied; `http` keeps its own settings.
    pub fn with_http_client(config: ClientConfig, http: Client) -> Result<Self> {
        config.validate()?;
        Ok(Self { http, config })
    }

    /// Fetch the address list.
    ///
    /// The body may be an array, `{"results": [...]}` or `{"data": [...]}`.
    pub async fn list(&self) -> Result<Value> {
        let url = self.config.collection_url();
        self.execute("list", self.http.get(&url)).await
    }

    /// Create an address.
    pub async fn create(&self, payload: &AddressPayload) -> Result<Value> {
        let url = self.config.collection_url();
        self.execute("create", self.http.post(&url).json(payload))
            .await
    }

    /// Update an address (partial update).
    pub async fn update(&self, id: &str, payload: &AddressPayload) -> Result<Value> {
        let url = self.config.item_url(id);
        self.execute("update", self.http.patch(&url).json(payload))
            .await
    }

    /// Delete an address. An empty response body comes back as `null`.
    pub async fn delete(&self, id: &str) -> Result<Value> {
        let url = self.config.item_url(id);
        self.execute("delete", self.http.delete(&url)).await
    }

    /// Fetch and normalize the address list.
    pub async fn fetch_addresses(&self) -> Result<Vec<NormalizedAddress>> {
        let body = self.list().await?;
        Ok(normalize_all(&extract_items(&body)))
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the underlying HTTP client.
    pub fn http_client(&self) -> &Client {
        &self.http
    }

    /// Send a request and decode the JSON body.
    async fn execute(&self, operation: &str, request: RequestBuilder) -> Result<Value> {
        let request = match self.config.api_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        debug!("Address API call: {}", operation);

        let response = request
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!("Address API {} failed: {}", operation, e);
                ApiError::Http(e)
            })?;

        let status = response.status();
        let text = response.text().await.map_err(ApiError::Http)?;

        if !status.is_success() {
            warn!("Address API {} returned HTTP {}", operation, status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: serde_json::from_str(&text).ok(),
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }
}

impl std::fmt::Debug for AddressClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressClient")
            .field("config", &self.config)
            .finish()
    }
}
