// Library exports for PhishGuard Core
// Local phishing heuristics with a remote analysis backend in front of them

pub mod app;
pub mod app_config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use app::AppState;
pub use app_config::AppConfig;
pub use middleware::ForwardedToken;
pub use models::{
    AnalysisOutcome, DomainInfo, EmailVerdict, RiskLevel, RiskVerdict, ScanRecord,
    UrlAnalysisReport, VerdictBucket, VerdictLabel,
};
pub use services::{
    AnalysisBackend, BackendError, EmailAnalysisService, HttpBackendClient, ScanHistoryService,
    UrlAnalysisService,
};
pub use utils::{
    attempt, attempt_or_default, classify_email_locally, detect_typosquat_targets,
    extract_domain_info, levenshtein, score_domain,
};

// Re-export handler route builders
pub use handlers::{analysis_routes, history_routes};

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Library initialization function for external consumers
pub async fn initialize_app_state() -> Result<AppState, Box<dyn std::error::Error>> {
    use tracing::info;

    // Load environment
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;

    info!(
        "Using analysis backend at {} (timeout {}s)",
        config.backend.api_url, config.backend.timeout_secs
    );
    let backend = Arc::new(HttpBackendClient::new(&config.backend));

    Ok(AppState::new(config, backend))
}

/// Full router: `/api/v1/analyze/*`, `/api/v1/scans` and `/health`
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/analyze", analysis_routes())
        .nest("/scans", history_routes());

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors_layer(&state.config))
        .with_state(state)
}

// Health check handler
pub async fn health_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> impl axum::response::IntoResponse {
    use axum::Json;

    Json(serde_json::json!({
        "status": "healthy",
        "service": "phishguard-core",
        "environment": state.config.environment.to_string(),
        "secondaryMl": state.config.analysis.enable_secondary_ml,
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
