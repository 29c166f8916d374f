// Analysis requests accepted from the dashboard and the reports returned to it

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{domain::DomainInfo, verdict::RiskVerdict, verdict::VerdictBucket};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AnalyzeUrlRequest {
    #[validate(length(min = 1, max = 2048, message = "URL must be 1-2048 characters"))]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AnalyzeEmailRequest {
    #[validate(length(max = 998, message = "Subject must be less than 998 characters"))]
    pub subject: Option<String>,

    #[validate(length(min = 1, max = 100000, message = "Body must be 1-100000 characters"))]
    pub body: String,

    #[validate(length(max = 320, message = "Sender must be less than 320 characters"))]
    pub sender: Option<String>,
}

/// Result of one URL analysis, remote-assisted or local.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlAnalysisReport {
    pub analysis_id: Uuid,
    pub url: String,
    pub domain_info: DomainInfo,
    #[serde(flatten)]
    pub verdict: RiskVerdict,
    /// Combined score on the online path, raw heuristic score offline
    pub score: u32,
    pub ml_score: Option<u8>,
    pub visual_score: Option<u8>,
    pub trusted: bool,
    pub dns_info: Option<serde_json::Value>,
    pub url_intelligence: Option<serde_json::Value>,
    pub analyzed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailVerdict {
    pub analysis_id: Uuid,
    pub label: VerdictBucket,
    pub phishing_score: Option<u8>,
    /// Absent when the keyword fallback produced the label
    pub confidence: Option<f64>,
    pub indicators: Vec<String>,
    pub reason: Option<String>,
    pub analyzed_at: DateTime<Utc>,
}
