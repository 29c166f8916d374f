// Signal combiner for the online URL path
// Blends the remote ML content score with the remote visual/URL-intelligence
// score and classifies the result

use crate::models::{DomainInfo, RiskLevel, RiskVerdict, VerdictBucket, VerdictLabel};
use crate::utils::url_heuristic::local_flag_indicators;

pub const ML_WEIGHT: f64 = 0.5;
pub const VISUAL_WEIGHT: f64 = 0.5;

pub const PHISHING_THRESHOLD: u32 = 60;
pub const SUSPICIOUS_THRESHOLD: u32 = 35;
pub const MEDIUM_THRESHOLD: u32 = 15;

pub const TRUSTED_DOMAIN_INDICATOR: &str = "Trusted domain — no risk";

/// Remote signals gathered for one URL
#[derive(Debug, Clone, Default)]
pub struct RemoteSignals {
    /// ML content score, 0 when the secondary call failed
    pub ml_score: f64,
    /// Backend visual / URL-intelligence risk score
    pub visual_score: f64,
    /// Backend-provided risk level, used verbatim when recognized
    pub risk_level: Option<String>,
    pub risk_factors: Vec<String>,
    pub ml_indicators: Vec<String>,
}

pub fn combine_scores(ml_score: f64, visual_score: f64) -> u32 {
    let combined = (ml_score * ML_WEIGHT + visual_score * VISUAL_WEIGHT).round();
    if combined.is_finite() && combined > 0.0 {
        combined as u32
    } else {
        0
    }
}

pub fn risk_level_for(score: u32) -> RiskLevel {
    if score >= PHISHING_THRESHOLD {
        RiskLevel::Critical
    } else if score >= SUSPICIOUS_THRESHOLD {
        RiskLevel::High
    } else if score >= MEDIUM_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub fn label_for(score: u32) -> VerdictLabel {
    if score >= PHISHING_THRESHOLD {
        VerdictLabel::Phishing
    } else if score >= SUSPICIOUS_THRESHOLD {
        VerdictLabel::Suspicious
    } else {
        VerdictLabel::Safe
    }
}

pub fn bucket_for(score: u32) -> VerdictBucket {
    if score >= PHISHING_THRESHOLD {
        VerdictBucket::Phishing
    } else if score >= SUSPICIOUS_THRESHOLD {
        VerdictBucket::Suspicious
    } else {
        VerdictBucket::Safe
    }
}

/// Drop repeated indicators, keeping the first occurrence of each
pub fn dedupe_indicators<I>(indicators: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut unique: Vec<String> = Vec::new();
    for indicator in indicators {
        if !unique.contains(&indicator) {
            unique.push(indicator);
        }
    }
    unique
}

/// Verdict for a domain the backend lists as trusted. Overrides all scoring.
pub fn trusted_verdict() -> RiskVerdict {
    RiskVerdict {
        confidence: 0,
        label: VerdictLabel::Safe,
        verdict: RiskLevel::Low,
        bucket: VerdictBucket::Safe,
        indicators: vec![TRUSTED_DOMAIN_INDICATOR.to_string()],
        recommendation: "This domain is on the trusted site registry.".to_string(),
    }
}

/// Combine remote signals with local domain flags into a verdict.
/// Returns the verdict and the combined score it was classified from.
pub fn combine_verdict(signals: RemoteSignals, info: &DomainInfo) -> (RiskVerdict, u32) {
    let score = combine_scores(signals.ml_score, signals.visual_score);

    let verdict = signals
        .risk_level
        .as_deref()
        .and_then(|level| level.parse::<RiskLevel>().ok())
        .unwrap_or_else(|| risk_level_for(score));

    let indicators = dedupe_indicators(
        signals
            .risk_factors
            .into_iter()
            .chain(signals.ml_indicators)
            .chain(local_flag_indicators(info)),
    );

    let label = label_for(score);

    (
        RiskVerdict {
            confidence: score.min(100) as u8,
            label,
            verdict,
            bucket: bucket_for(score),
            indicators,
            recommendation: label.recommendation().to_string(),
        },
        score,
    )
}
