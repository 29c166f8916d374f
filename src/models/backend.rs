// Wire types for the remote analysis backend
// The backend speaks camelCase JSON; unknown fields are ignored

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// URL ANALYSIS
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct UrlAnalysisRequest<'a> {
    pub url: &'a str,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlAnalysisResponse {
    #[serde(default)]
    pub is_trusted: bool,
    /// Visual / URL-intelligence risk score, 0-100
    #[serde(default)]
    pub risk_score: f64,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub risk_factors: Option<Vec<String>>,
    #[serde(default, alias = "dns")]
    pub dns_info: Option<serde_json::Value>,
    #[serde(default, alias = "urlIntel")]
    pub url_intelligence: Option<serde_json::Value>,
}

// =============================================================================
// CONTENT ANALYSIS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentAnalysisRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ContentAnalysisRequest {
    /// A URL submitted to the content classifier as if it were an email body
    pub fn for_url(url: &str) -> Self {
        Self {
            body: url.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysisResponse {
    /// 0-100
    #[serde(default)]
    pub phishing_score: f64,
    #[serde(default)]
    pub is_phishing: bool,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub indicators: Vec<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub verdict: Option<String>,
}

// =============================================================================
// SCAN HISTORY
// =============================================================================

/// A persisted scan as stored by the backend. Fields the core does not
/// interpret are kept in `extra` and forwarded untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, alias = "url")]
    pub target: Option<String>,
    #[serde(default, alias = "type")]
    pub scan_type: Option<String>,
    #[serde(default)]
    pub verdict: Option<String>,
    #[serde(default)]
    pub risk_score: Option<f64>,
    /// Forwarded as sent; backends differ on offsets and precision
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScanListResponse {
    Bare(Vec<ScanRecord>),
    Wrapped { scans: Vec<ScanRecord> },
}

impl ScanListResponse {
    pub fn into_records(self) -> Vec<ScanRecord> {
        match self {
            ScanListResponse::Wrapped { scans } => scans,
            ScanListResponse::Bare(scans) => scans,
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}
