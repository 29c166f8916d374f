// Services module for PhishGuard Core
// Remote backend access and the analysis flows built on it

pub mod backend_client;
pub mod email_analysis;
pub mod scan_history;
pub mod url_analysis;
pub mod verdict;

// Re-export commonly used services
pub use backend_client::{AnalysisBackend, BackendError, HttpBackendClient};
pub use email_analysis::EmailAnalysisService;
pub use scan_history::ScanHistoryService;
pub use url_analysis::UrlAnalysisService;
pub use verdict::{combine_scores, combine_verdict, trusted_verdict, RemoteSignals};
