//! SneakerDesk HTTP client

pub mod auth;
pub mod error;
pub mod shoes;
pub mod users;

use error::ClientError;
use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;

const DEFAULT_USER_AGENT: &str = concat!("sneakerdesk/", env!("CARGO_PKG_VERSION"));

/// Sneaker order API client
///
/// The client holds no credentials of its own. Every authenticated call takes
/// the bearer token explicitly so the session stays the single owner of it.
#[derive(Clone, Debug)]
pub struct SneakerClient {
    client: Client,
    base_url: String,
}

impl SneakerClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> SneakerClientBuilder {
        SneakerClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Create a request builder carrying `token` as a bearer credential
    pub fn authorized(
        &self,
        method: reqwest::Method,
        path: &str,
        token: &str,
    ) -> reqwest::RequestBuilder {
        self.request(method, path)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
    }

    /// Execute a request and decode the JSON body of a successful response
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = Self::send(request).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Execute a request where only the status matters
    pub async fn execute_status(&self, request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        Self::send(request).await.map(drop)
    }

    async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            tracing::debug!(status = status.as_u16(), "request rejected");
            Err(ClientError::from_status(status, message))
        }
    }
}

/// Builder for SneakerClient
#[derive(Default)]
pub struct SneakerClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SneakerClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout (ignored on WASM, where fetch has no timeout)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<SneakerClient, ClientError> {
        let base_url = self
            .base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        #[cfg(target_arch = "wasm32")]
        let _ = self.timeout;

        client_builder = client_builder.user_agent(
            self.user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        );

        let client = client_builder.build()?;

        Ok(SneakerClient { client, base_url })
    }
}
