// Application state shared across handlers
use std::sync::Arc;

use crate::{
    app_config::AppConfig,
    services::{AnalysisBackend, EmailAnalysisService, ScanHistoryService, UrlAnalysisService},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub url_analysis: Arc<UrlAnalysisService>,
    pub email_analysis: Arc<EmailAnalysisService>,
    pub scan_history: Arc<ScanHistoryService>,
}

impl AppState {
    /// Wire every service against one backend client
    pub fn new(config: AppConfig, backend: Arc<dyn AnalysisBackend>) -> Self {
        Self {
            url_analysis: Arc::new(UrlAnalysisService::new(
                backend.clone(),
                config.analysis.clone(),
            )),
            email_analysis: Arc::new(EmailAnalysisService::new(backend.clone())),
            scan_history: Arc::new(ScanHistoryService::new(backend)),
            config: Arc::new(config),
        }
    }
}
