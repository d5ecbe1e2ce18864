// ABOUTME: Defines the PasteTransport trait - raw HTTP calls used by the
// ABOUTME: paste client - and its reqwest implementation.

use async_trait::async_trait;

use super::GistConfig;
use crate::error::PasteError;

/// HTTP operations the paste client needs.
///
/// Implementations return the full response body and fail on any
/// non-success status. Timeouts and retries belong here, not in the client.
#[async_trait]
pub trait PasteTransport: Send + Sync {
    /// GET a paste service URL and return its body.
    async fn get(&self, url: &str) -> Result<String, PasteError>;

    /// GET a URL handed out by the service, such as a raw file link.
    /// Service credentials and headers must not be attached.
    async fn get_raw(&self, url: &str) -> Result<String, PasteError>;

    /// POST a JSON body to a URL and return the response body.
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<String, PasteError>;
}

/// Transport backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    token: Option<String>,
}

impl ReqwestTransport {
    /// Create a transport with the timeout, user agent and token from `config`.
    pub fn new(config: &GistConfig) -> Result<Self, PasteError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| PasteError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            token: config.token.clone(),
        })
    }

    /// Create with a custom reqwest client.
    pub fn with_client(http: reqwest::Client, token: Option<String>) -> Self {
        Self { http, token }
    }

    pub(super) fn api_get(&self, url: &str) -> reqwest::RequestBuilder {
        self.request(self.http.get(url))
    }

    pub(super) fn raw_get(&self, url: &str) -> reqwest::RequestBuilder {
        self.http.get(url)
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = builder.header("Accept", "application/vnd.github+json");
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn read(response: reqwest::Response) -> Result<String, PasteError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PasteError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl PasteTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<String, PasteError> {
        let response = self.api_get(url).send().await?;
        Self::read(response).await
    }

    async fn get_raw(&self, url: &str) -> Result<String, PasteError> {
        let response = self.raw_get(url).send().await?;
        Self::read(response).await
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<String, PasteError> {
        let response = self
            .request(self.http.post(url))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;
        Self::read(response).await
    }
}
