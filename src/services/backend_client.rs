// Client for the remote analysis backend
// URL analysis, content (ML) analysis and scan history live behind this trait

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::app_config::BackendConfig;
use crate::models::{
    ContentAnalysisRequest, ContentAnalysisResponse, ScanListResponse, ScanRecord,
    UrlAnalysisRequest, UrlAnalysisResponse,
};

// =============================================================================
// ERROR TYPES
// =============================================================================

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Could not decode backend response: {0}")]
    Decode(String),

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
}

// =============================================================================
// BACKEND TRAIT
// =============================================================================

/// The remote collaborators the core consumes. `auth_token` is the caller's
/// bearer token when one was supplied; implementations may fall back to a
/// configured service token.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    async fn analyze_url(
        &self,
        url: &str,
        auth_token: Option<&str>,
    ) -> Result<UrlAnalysisResponse, BackendError>;

    async fn analyze_content(
        &self,
        request: &ContentAnalysisRequest,
        auth_token: Option<&str>,
    ) -> Result<ContentAnalysisResponse, BackendError>;

    async fn list_scans(&self, auth_token: Option<&str>) -> Result<Vec<ScanRecord>, BackendError>;

    async fn delete_scan(&self, id: &str, auth_token: Option<&str>) -> Result<(), BackendError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

pub struct HttpBackendClient {
    client: reqwest::Client,
    base_url: String,
    service_token: Option<String>,
}

impl HttpBackendClient {
    pub fn new(config: &BackendConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            service_token: config.api_token.clone(),
        }
    }

    /// Base URL with each segment appended and percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Result<Url, BackendError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| BackendError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| BackendError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    fn request(
        &self,
        method: Method,
        url: Url,
        auth_token: Option<&str>,
    ) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match auth_token.or(self.service_token.as_deref()) {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(
        &self,
        operation: &str,
        builder: RequestBuilder,
    ) -> Result<Response, BackendError> {
        let start_time = Instant::now();
        let response = builder.send().await?;
        let status = response.status();

        debug!(
            "Backend {} responded {} in {}ms",
            operation,
            status.as_u16(),
            start_time.elapsed().as_millis()
        );

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body: truncate(&body, 512),
            });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
        response
            .json::<T>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }
}

#[async_trait]
impl AnalysisBackend for HttpBackendClient {
    async fn analyze_url(
        &self,
        url: &str,
        auth_token: Option<&str>,
    ) -> Result<UrlAnalysisResponse, BackendError> {
        let endpoint = self.endpoint(&["analyze", "url"])?;
        let builder = self
            .request(Method::POST, endpoint, auth_token)
            .json(&UrlAnalysisRequest { url });

        let response = self.send("URL analysis", builder).await?;
        Self::decode(response).await
    }

    async fn analyze_content(
        &self,
        request: &ContentAnalysisRequest,
        auth_token: Option<&str>,
    ) -> Result<ContentAnalysisResponse, BackendError> {
        let endpoint = self.endpoint(&["analyze", "content"])?;
        let builder = self.request(Method::POST, endpoint, auth_token).json(request);

        let response = self.send("content analysis", builder).await?;
        Self::decode(response).await
    }

    async fn list_scans(&self, auth_token: Option<&str>) -> Result<Vec<ScanRecord>, BackendError> {
        let endpoint = self.endpoint(&["scans"])?;
        let builder = self.request(Method::GET, endpoint, auth_token);

        let response = self.send("scan listing", builder).await?;
        let scans: ScanListResponse = Self::decode(response).await?;
        Ok(scans.into_records())
    }

    async fn delete_scan(&self, id: &str, auth_token: Option<&str>) -> Result<(), BackendError> {
        let endpoint = self.endpoint(&["scans", id])?;
        let builder = self.request(Method::DELETE, endpoint, auth_token);

        self.send("scan deletion", builder).await?;
        Ok(())
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
