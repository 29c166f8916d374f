pub mod analysis;
pub mod history;

use crate::app::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

// Analysis routes
pub fn analysis_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(analysis::analyze_url))
        .route("/email", post(analysis::analyze_email))
}

// Scan history routes
pub fn history_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(history::list_scans))
        .route("/{id}", delete(history::delete_scan))
}
