// Verdict types shared by the online combiner and the offline heuristic

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// RISK LEVEL
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LOW" => Ok(RiskLevel::Low),
            "MEDIUM" => Ok(RiskLevel::Medium),
            "HIGH" => Ok(RiskLevel::High),
            "CRITICAL" => Ok(RiskLevel::Critical),
            other => Err(format!("Unknown risk level: {}", other)),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
            RiskLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}

// =============================================================================
// LABELS
// =============================================================================

/// User-facing label. `Uncertain` is only produced by the offline heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerdictLabel {
    Safe,
    Suspicious,
    Phishing,
    Uncertain,
}

const SAFE_RECOMMENDATION: &str =
    "No action needed. Stay alert for unexpected requests for credentials.";
const SUSPICIOUS_RECOMMENDATION: &str = "Proceed with caution. \
    Verify the site through a known address before entering any information.";
const PHISHING_RECOMMENDATION: &str = "Do not visit this site or enter credentials. \
    Report the link to your security team.";
const UNCERTAIN_RECOMMENDATION: &str = "Remote analysis was unavailable. \
    Verify this link through another channel before trusting it.";

impl VerdictLabel {
    pub fn recommendation(&self) -> &'static str {
        match self {
            VerdictLabel::Safe => SAFE_RECOMMENDATION,
            VerdictLabel::Suspicious => SUSPICIOUS_RECOMMENDATION,
            VerdictLabel::Phishing => PHISHING_RECOMMENDATION,
            VerdictLabel::Uncertain => UNCERTAIN_RECOMMENDATION,
        }
    }
}

impl fmt::Display for VerdictLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerdictLabel::Safe => write!(f, "Safe"),
            VerdictLabel::Suspicious => write!(f, "Suspicious"),
            VerdictLabel::Phishing => write!(f, "Phishing"),
            VerdictLabel::Uncertain => write!(f, "Uncertain"),
        }
    }
}

/// Three-way verdict the dashboard renders. Also the label set of the
/// email classifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictBucket {
    Safe,
    Suspicious,
    Phishing,
}

impl FromStr for VerdictBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "safe" | "legitimate" | "benign" => Ok(VerdictBucket::Safe),
            "suspicious" => Ok(VerdictBucket::Suspicious),
            "phishing" | "malicious" => Ok(VerdictBucket::Phishing),
            other => Err(format!("Unknown verdict: {}", other)),
        }
    }
}

impl From<VerdictLabel> for VerdictBucket {
    fn from(label: VerdictLabel) -> Self {
        match label {
            VerdictLabel::Safe => VerdictBucket::Safe,
            VerdictLabel::Suspicious | VerdictLabel::Uncertain => VerdictBucket::Suspicious,
            VerdictLabel::Phishing => VerdictBucket::Phishing,
        }
    }
}

impl fmt::Display for VerdictBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerdictBucket::Safe => write!(f, "safe"),
            VerdictBucket::Suspicious => write!(f, "suspicious"),
            VerdictBucket::Phishing => write!(f, "phishing"),
        }
    }
}

// =============================================================================
// RISK VERDICT
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskVerdict {
    /// 0-100
    pub confidence: u8,
    pub label: VerdictLabel,
    pub verdict: RiskLevel,
    pub bucket: VerdictBucket,
    pub indicators: Vec<String>,
    pub recommendation: String,
}

// =============================================================================
// ANALYSIS OUTCOME
// =============================================================================

/// Which path produced a result: the remote backend, or the local
/// approximation that stands in for it when the backend cannot be reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "result", rename_all = "lowercase")]
pub enum AnalysisOutcome<T> {
    Remote(T),
    Fallback(T),
}

impl<T> AnalysisOutcome<T> {
    pub fn result(&self) -> &T {
        match self {
            AnalysisOutcome::Remote(inner) | AnalysisOutcome::Fallback(inner) => inner,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            AnalysisOutcome::Remote(inner) | AnalysisOutcome::Fallback(inner) => inner,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, AnalysisOutcome::Fallback(_))
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> AnalysisOutcome<U> {
        match self {
            AnalysisOutcome::Remote(inner) => AnalysisOutcome::Remote(f(inner)),
            AnalysisOutcome::Fallback(inner) => AnalysisOutcome::Fallback(f(inner)),
        }
    }
}
