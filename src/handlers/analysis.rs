// URL and email analysis endpoints
// Both always answer 200 with a tagged outcome once the request validates;
// backend failures surface as a "fallback" source, never as an error status

use axum::{extract::State, response::IntoResponse, Json};
use tracing::debug;
use validator::Validate;

use crate::{
    app::AppState,
    middleware::auth::ForwardedToken,
    models::{AnalyzeEmailRequest, AnalyzeUrlRequest, ContentAnalysisRequest},
    utils::service_error::ServiceError,
};

// =============================================================================
// ANALYSIS HANDLERS
// =============================================================================

/// Analyze a URL
/// POST /api/v1/analyze/url
pub async fn analyze_url(
    State(state): State<AppState>,
    token: ForwardedToken,
    Json(request): Json<AnalyzeUrlRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    request.validate()?;

    if request.url.trim().is_empty() {
        return Err(ServiceError::ValidationError("URL must not be blank".to_string()));
    }

    debug!("URL analysis requested for {}", request.url);
    let outcome = state.url_analysis.analyze(&request.url, token.as_deref()).await;

    Ok(Json(outcome))
}

/// Classify an email
/// POST /api/v1/analyze/email
pub async fn analyze_email(
    State(state): State<AppState>,
    token: ForwardedToken,
    Json(request): Json<AnalyzeEmailRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    request.validate()?;

    let content = ContentAnalysisRequest {
        subject: request.subject,
        body: request.body,
        sender: request.sender,
        content: None,
    };

    let outcome = state.email_analysis.analyze(content, token.as_deref()).await;

    Ok(Json(outcome))
}
