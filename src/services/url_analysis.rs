// URL analysis orchestration
// Remote analysis first; the local heuristic substitutes when the backend fails

use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

use crate::app_config::AnalysisConfig;
use crate::models::{
    AnalysisOutcome, ContentAnalysisRequest, DomainInfo, UrlAnalysisReport, UrlAnalysisResponse,
};
use crate::services::backend_client::AnalysisBackend;
use crate::services::verdict::{combine_verdict, trusted_verdict, RemoteSignals};
use crate::utils::attempt::attempt;
use crate::utils::domain_extractor::extract_domain_info;
use crate::utils::url_heuristic::score_domain;

pub struct UrlAnalysisService {
    backend: Arc<dyn AnalysisBackend>,
    config: AnalysisConfig,
}

impl UrlAnalysisService {
    pub fn new(backend: Arc<dyn AnalysisBackend>, config: AnalysisConfig) -> Self {
        Self { backend, config }
    }

    /// Analyze one URL or bare domain. Always produces a complete report;
    /// the outcome variant records whether the backend took part.
    pub async fn analyze(
        &self,
        raw_url: &str,
        auth_token: Option<&str>,
    ) -> AnalysisOutcome<UrlAnalysisReport> {
        let start_time = Instant::now();
        let url = raw_url.trim();
        let domain_info = extract_domain_info(url);

        let remote = attempt(
            "Remote URL analysis",
            self.backend.analyze_url(url, auth_token),
        )
        .await;

        let outcome = match remote {
            Some(response) => AnalysisOutcome::Remote(
                self.online_report(url, domain_info, response, auth_token)
                    .await,
            ),
            None => {
                warn!(
                    "Backend unavailable, scoring {} with local heuristic",
                    domain_info.domain
                );
                AnalysisOutcome::Fallback(offline_report(url, domain_info))
            },
        };

        let report = outcome.result();
        info!(
            "URL analysis {} for {}: {} ({}%, {}) in {}ms{}",
            report.analysis_id,
            report.domain_info.domain,
            report.verdict.label,
            report.verdict.confidence,
            report.verdict.verdict,
            start_time.elapsed().as_millis(),
            if outcome.is_fallback() { " [fallback]" } else { "" }
        );

        outcome
    }

    async fn online_report(
        &self,
        url: &str,
        domain_info: DomainInfo,
        response: UrlAnalysisResponse,
        auth_token: Option<&str>,
    ) -> UrlAnalysisReport {
        let visual_raw = clamp_raw_score(response.risk_score);
        let visual_score = clamp_score(visual_raw);

        if response.is_trusted {
            return UrlAnalysisReport {
                analysis_id: Uuid::new_v4(),
                url: url.to_string(),
                domain_info,
                verdict: trusted_verdict(),
                score: 0,
                ml_score: None,
                visual_score: Some(visual_score),
                trusted: true,
                dns_info: response.dns_info,
                url_intelligence: response.url_intelligence,
                analyzed_at: Utc::now(),
            };
        }

        // The content classifier is reused with the URL standing in for an email body
        let ml = if self.config.enable_secondary_ml {
            attempt(
                "Secondary ML analysis",
                self.backend
                    .analyze_content(&ContentAnalysisRequest::for_url(url), auth_token),
            )
            .await
        } else {
            None
        };

        let ml_raw = ml.as_ref().map(|m| clamp_raw_score(m.phishing_score));
        let ml_score = ml_raw.map(clamp_score);

        // Unrounded scores go into the blend; rounding happens once, there
        let signals = RemoteSignals {
            ml_score: ml_raw.unwrap_or(0.0),
            visual_score: visual_raw,
            risk_level: response.risk_level,
            risk_factors: response.risk_factors.unwrap_or_default(),
            ml_indicators: ml.map(|m| m.indicators).unwrap_or_default(),
        };

        let (verdict, score) = combine_verdict(signals, &domain_info);

        UrlAnalysisReport {
            analysis_id: Uuid::new_v4(),
            url: url.to_string(),
            domain_info,
            verdict,
            score,
            ml_score,
            visual_score: Some(visual_score),
            trusted: false,
            dns_info: response.dns_info,
            url_intelligence: response.url_intelligence,
            analyzed_at: Utc::now(),
        }
    }
}

/// Report built from local features only
pub fn offline_report(url: &str, domain_info: DomainInfo) -> UrlAnalysisReport {
    let local = score_domain(&domain_info);
    let score = local.score;

    UrlAnalysisReport {
        analysis_id: Uuid::new_v4(),
        url: url.to_string(),
        verdict: local.into_verdict(),
        domain_info,
        score,
        ml_score: None,
        visual_score: None,
        trusted: false,
        dns_info: None,
        url_intelligence: None,
        analyzed_at: Utc::now(),
    }
}

/// Backend scores are nominally 0-100; anything else is clamped into range.
/// Non-finite values count as 0.
pub fn clamp_raw_score(score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Clamped score rounded for display
pub fn clamp_score(score: f64) -> u8 {
    clamp_raw_score(score).round() as u8
}
