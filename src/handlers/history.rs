// Scan history endpoints, proxied to the backend

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::{app::AppState, middleware::auth::ForwardedToken};

/// List past scans
/// GET /api/v1/scans
pub async fn list_scans(State(state): State<AppState>, token: ForwardedToken) -> impl IntoResponse {
    let scans = state.scan_history.list_scans(token.as_deref()).await;

    Json(json!({
        "scans": scans,
        "count": scans.len()
    }))
}

/// Delete a past scan
/// DELETE /api/v1/scans/{id}
pub async fn delete_scan(
    State(state): State<AppState>,
    token: ForwardedToken,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let deleted = state.scan_history.delete_scan(&id, token.as_deref()).await;

    Json(json!({ "deleted": deleted }))
}
