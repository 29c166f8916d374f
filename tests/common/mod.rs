// Common test utilities and helper structs
// Shared across all test files to avoid duplication

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use phishguard_core::{
    app::AppState,
    app_config::{AnalysisConfig, AppConfig, BackendConfig, Environment, ServerConfig},
    build_router,
    models::{ContentAnalysisRequest, ContentAnalysisResponse, ScanRecord, UrlAnalysisResponse},
    services::{AnalysisBackend, BackendError},
};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt;

// =============================================================================
// MOCK BACKEND
// =============================================================================

/// Scripted backend. A `None` response makes the matching call fail with
/// a 503 so the fallback paths can be driven deterministically.
#[derive(Default)]
pub struct MockBackend {
    pub url_response: Option<UrlAnalysisResponse>,
    pub content_response: Option<ContentAnalysisResponse>,
    pub scans: Option<Vec<ScanRecord>>,
    pub delete_ok: bool,
    pub calls: Mutex<Vec<String>>,
    pub tokens: Mutex<Vec<Option<String>>>,
}

impl MockBackend {
    /// Every call fails
    pub fn offline() -> Self {
        Self::default()
    }

    pub fn with_url_response(mut self, response: UrlAnalysisResponse) -> Self {
        self.url_response = Some(response);
        self
    }

    pub fn with_content_response(mut self, response: ContentAnalysisResponse) -> Self {
        self.content_response = Some(response);
        self
    }

    pub fn with_scans(mut self, scans: Vec<ScanRecord>) -> Self {
        self.scans = Some(scans);
        self
    }

    pub fn with_delete_ok(mut self) -> Self {
        self.delete_ok = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn tokens(&self) -> Vec<Option<String>> {
        self.tokens.lock().unwrap().clone()
    }

    fn record(&self, call: &str, auth_token: Option<&str>) {
        self.calls.lock().unwrap().push(call.to_string());
        self.tokens
            .lock()
            .unwrap()
            .push(auth_token.map(String::from));
    }

    fn unavailable() -> BackendError {
        BackendError::Status {
            status: 503,
            body: "backend offline".to_string(),
        }
    }
}

#[async_trait]
impl AnalysisBackend for MockBackend {
    async fn analyze_url(
        &self,
        url: &str,
        auth_token: Option<&str>,
    ) -> Result<UrlAnalysisResponse, BackendError> {
        self.record(&format!("analyze_url:{}", url), auth_token);
        self.url_response.clone().ok_or_else(Self::unavailable)
    }

    async fn analyze_content(
        &self,
        request: &ContentAnalysisRequest,
        auth_token: Option<&str>,
    ) -> Result<ContentAnalysisResponse, BackendError> {
        self.record(&format!("analyze_content:{}", request.body), auth_token);
        self.content_response.clone().ok_or_else(Self::unavailable)
    }

    async fn list_scans(&self, auth_token: Option<&str>) -> Result<Vec<ScanRecord>, BackendError> {
        self.record("list_scans", auth_token);
        self.scans.clone().ok_or_else(Self::unavailable)
    }

    async fn delete_scan(&self, id: &str, auth_token: Option<&str>) -> Result<(), BackendError> {
        self.record(&format!("delete_scan:{}", id), auth_token);
        if self.delete_ok {
            Ok(())
        } else {
            Err(BackendError::Status {
                status: 404,
                body: "not found".to_string(),
            })
        }
    }
}

// =============================================================================
// FIXTURES
// =============================================================================

pub fn test_config() -> AppConfig {
    AppConfig {
        environment: Environment::Test,
        server: ServerConfig {
            bind_address: "127.0.0.1:0".to_string(),
            cors_allowed_origins: vec!["*".to_string()],
        },
        backend: BackendConfig::default(),
        analysis: AnalysisConfig::default(),
    }
}

pub fn url_response(risk_score: f64, risk_level: &str, factors: &[&str]) -> UrlAnalysisResponse {
    UrlAnalysisResponse {
        risk_score,
        risk_level: Some(risk_level.to_string()),
        risk_factors: Some(factors.iter().map(|f| f.to_string()).collect()),
        ..Default::default()
    }
}

pub fn content_response(phishing_score: f64, indicators: &[&str]) -> ContentAnalysisResponse {
    ContentAnalysisResponse {
        phishing_score,
        indicators: indicators.iter().map(|i| i.to_string()).collect(),
        ..Default::default()
    }
}

pub fn scan(id: &str, target: &str) -> ScanRecord {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "target": target,
        "type": "url",
        "verdict": "safe",
        "riskScore": 4.0
    }))
    .unwrap()
}

// =============================================================================
// HTTP HARNESS
// =============================================================================

pub struct TestApp {
    pub app: Router,
    pub backend: Arc<MockBackend>,
}

pub fn setup_test_app(backend: MockBackend) -> TestApp {
    let backend = Arc::new(backend);
    let state = AppState::new(test_config(), backend.clone());

    TestApp {
        app: build_router(state),
        backend,
    }
}

impl TestApp {
    pub fn post(&self, uri: &str) -> TestRequest {
        TestRequest::new(self, "POST", uri)
    }

    pub fn get(&self, uri: &str) -> TestRequest {
        TestRequest::new(self, "GET", uri)
    }

    pub fn delete(&self, uri: &str) -> TestRequest {
        TestRequest::new(self, "DELETE", uri)
    }
}

pub struct TestRequest<'a> {
    app: &'a TestApp,
    method: &'static str,
    uri: String,
    body: Option<String>,
    bearer: Option<String>,
}

impl<'a> TestRequest<'a> {
    fn new(app: &'a TestApp, method: &'static str, uri: &str) -> Self {
        Self {
            app,
            method,
            uri: uri.to_string(),
            body: None,
            bearer: None,
        }
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> Self {
        self.body = Some(serde_json::to_string(body).unwrap());
        self
    }

    pub fn bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_string());
        self
    }

    pub async fn send(self) -> TestResponse {
        let mut builder = Request::builder().method(self.method).uri(&self.uri);
        if let Some(token) = &self.bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match self.body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.app.clone().oneshot(request).await.unwrap();
        TestResponse { response }
    }
}

pub struct TestResponse {
    response: Response<Body>,
}

impl TestResponse {
    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    pub async fn json<T: serde::de::DeserializeOwned>(self) -> T {
        let body = axum::body::to_bytes(self.response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }
}
