pub mod analysis;
pub mod backend;
pub mod domain;
pub mod verdict;

// Re-export common types
pub use analysis::{AnalyzeEmailRequest, AnalyzeUrlRequest, EmailVerdict, UrlAnalysisReport};
pub use backend::{
    ContentAnalysisRequest, ContentAnalysisResponse, ScanListResponse, ScanRecord,
    UrlAnalysisRequest, UrlAnalysisResponse,
};
pub use domain::DomainInfo;
pub use verdict::{AnalysisOutcome, RiskLevel, RiskVerdict, VerdictBucket, VerdictLabel};
