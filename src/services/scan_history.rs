// Scan history pass-through
// The backend persists scans; failures here surface as empty results

use std::sync::Arc;
use tracing::{info, warn};

use crate::models::ScanRecord;
use crate::services::backend_client::AnalysisBackend;
use crate::utils::attempt::{attempt, attempt_or_default};

pub struct ScanHistoryService {
    backend: Arc<dyn AnalysisBackend>,
}

impl ScanHistoryService {
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        Self { backend }
    }

    /// Past scans, newest ordering as returned by the backend. Empty on failure.
    pub async fn list_scans(&self, auth_token: Option<&str>) -> Vec<ScanRecord> {
        attempt_or_default("Scan history fetch", self.backend.list_scans(auth_token)).await
    }

    /// Whether the backend confirmed the deletion
    pub async fn delete_scan(&self, id: &str, auth_token: Option<&str>) -> bool {
        if id.trim().is_empty() {
            warn!("Refusing to delete scan with empty id");
            return false;
        }

        let deleted = attempt("Scan deletion", self.backend.delete_scan(id, auth_token))
            .await
            .is_some();

        if deleted {
            info!("Deleted scan {}", id);
        }
        deleted
    }
}
