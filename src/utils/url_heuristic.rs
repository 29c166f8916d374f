// Offline URL risk heuristic
// Stands in for the remote URL analysis when the backend cannot be reached

use crate::models::{DomainInfo, RiskLevel, RiskVerdict, VerdictBucket, VerdictLabel};

// =============================================================================
// WEIGHTS AND THRESHOLDS
// =============================================================================

pub const NO_SSL_WEIGHT: u32 = 15;
pub const SUSPICIOUS_TLD_WEIGHT: u32 = 20;
pub const IP_ADDRESS_WEIGHT: u32 = 25;
pub const TYPOSQUAT_WEIGHT: u32 = 30;
pub const LONG_DOMAIN_WEIGHT: u32 = 10;
pub const DEEP_PATH_WEIGHT: u32 = 5;

pub const LONG_DOMAIN_THRESHOLD: usize = 40;
pub const DEEP_PATH_THRESHOLD: usize = 4;

const HIGH_RISK_SCORE: u32 = 50;
const MEDIUM_RISK_SCORE: u32 = 25;

/// Fallback confidence is padded so a quiet local result is not shown as a
/// near-zero number, and capped below 100 so it never reads as certain.
const CONFIDENCE_PADDING: u32 = 20;
const CONFIDENCE_CAP: u32 = 99;

pub const NO_LOCAL_THREATS: &str = "No significant threats detected locally";

// =============================================================================
// INDICATORS
// =============================================================================

pub fn no_ssl_indicator() -> String {
    "No SSL/TLS encryption (plain HTTP)".to_string()
}

pub fn suspicious_tld_indicator(info: &DomainInfo) -> String {
    match info.tld() {
        Some(tld) => format!("Suspicious top-level domain (.{})", tld),
        None => "Suspicious top-level domain".to_string(),
    }
}

pub fn ip_address_indicator() -> String {
    "IP address used instead of a domain name".to_string()
}

pub fn typosquat_indicator(targets: &[String]) -> String {
    format!("Possible typosquatting of: {}", targets.join(", "))
}

pub fn long_domain_indicator(length: usize) -> String {
    format!("Unusually long domain name ({} characters)", length)
}

pub fn deep_path_indicator(depth: usize) -> String {
    format!("Deep URL path ({} levels)", depth)
}

/// Flags observable from the domain alone. Added to remote results on the
/// online path; path depth only counts towards the offline score.
pub fn local_flag_indicators(info: &DomainInfo) -> Vec<String> {
    let mut indicators = Vec::new();

    if !info.has_ssl {
        indicators.push(no_ssl_indicator());
    }
    if info.is_suspicious_tld {
        indicators.push(suspicious_tld_indicator(info));
    }
    if info.has_ip_address {
        indicators.push(ip_address_indicator());
    }
    if info.has_typosquat_targets() {
        indicators.push(typosquat_indicator(&info.typosquat_targets));
    }
    if info.domain_length > LONG_DOMAIN_THRESHOLD {
        indicators.push(long_domain_indicator(info.domain_length));
    }

    indicators
}

// =============================================================================
// SCORING
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalRiskScore {
    pub score: u32,
    pub indicators: Vec<String>,
}

pub fn score_domain(info: &DomainInfo) -> LocalRiskScore {
    let mut score = 0u32;
    let mut indicators = Vec::new();

    if !info.has_ssl {
        score += NO_SSL_WEIGHT;
        indicators.push(no_ssl_indicator());
    }

    if info.is_suspicious_tld {
        score += SUSPICIOUS_TLD_WEIGHT;
        indicators.push(suspicious_tld_indicator(info));
    }

    if info.has_ip_address {
        score += IP_ADDRESS_WEIGHT;
        indicators.push(ip_address_indicator());
    }

    if info.has_typosquat_targets() {
        score += TYPOSQUAT_WEIGHT;
        indicators.push(typosquat_indicator(&info.typosquat_targets));
    }

    if info.domain_length > LONG_DOMAIN_THRESHOLD {
        score += LONG_DOMAIN_WEIGHT;
        indicators.push(long_domain_indicator(info.domain_length));
    }

    if info.path_depth > DEEP_PATH_THRESHOLD {
        score += DEEP_PATH_WEIGHT;
        indicators.push(deep_path_indicator(info.path_depth));
    }

    if indicators.is_empty() {
        indicators.push(NO_LOCAL_THREATS.to_string());
    }

    LocalRiskScore { score, indicators }
}

impl LocalRiskScore {
    pub fn risk_level(&self) -> RiskLevel {
        if self.score >= HIGH_RISK_SCORE {
            RiskLevel::High
        } else if self.score >= MEDIUM_RISK_SCORE {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(&self) -> VerdictLabel {
        if self.score >= HIGH_RISK_SCORE {
            VerdictLabel::Phishing
        } else if self.score >= MEDIUM_RISK_SCORE {
            VerdictLabel::Uncertain
        } else {
            VerdictLabel::Safe
        }
    }

    pub fn confidence(&self) -> u8 {
        (self.score + CONFIDENCE_PADDING).min(CONFIDENCE_CAP) as u8
    }

    pub fn into_verdict(self) -> RiskVerdict {
        let label = self.label();
        let recommendation = match label {
            VerdictLabel::Uncertain => label.recommendation().to_string(),
            _ => format!(
                "{} This is a local estimate made while remote analysis was unavailable.",
                label.recommendation()
            ),
        };

        RiskVerdict {
            confidence: self.confidence(),
            verdict: self.risk_level(),
            bucket: VerdictBucket::from(label),
            label,
            indicators: self.indicators,
            recommendation,
        }
    }
}
