// URL analysis integration tests
// Remote path, trusted short-circuit, and local fallback against a scripted backend

mod common;

use common::{content_response, url_response, MockBackend};
use phishguard_core::{
    app_config::AnalysisConfig,
    models::{AnalysisOutcome, RiskLevel, UrlAnalysisResponse, VerdictBucket, VerdictLabel},
    services::{verdict::TRUSTED_DOMAIN_INDICATOR, UrlAnalysisService},
};
use std::sync::Arc;

fn service(backend: &Arc<MockBackend>) -> UrlAnalysisService {
    UrlAnalysisService::new(backend.clone(), AnalysisConfig::default())
}

#[tokio::test]
async fn test_remote_analysis_combines_ml_and_visual_scores() {
    let backend = Arc::new(
        MockBackend::default()
            .with_url_response(url_response(80.0, "high", &["Recently registered domain"]))
            .with_content_response(content_response(40.0, &["Urgency language"])),
    );

    let outcome = service(&backend)
        .analyze("https://login.example.com", None)
        .await;

    assert!(!outcome.is_fallback());
    let report = outcome.into_inner();
    assert_eq!(report.score, 60);
    assert_eq!(report.ml_score, Some(40));
    assert_eq!(report.visual_score, Some(80));
    assert_eq!(report.verdict.label, VerdictLabel::Phishing);
    assert_eq!(report.verdict.bucket, VerdictBucket::Phishing);
    // Backend-provided level wins over the score-derived one
    assert_eq!(report.verdict.verdict, RiskLevel::High);
    assert_eq!(
        report.verdict.indicators,
        vec!["Recently registered domain", "Urgency language"]
    );
}

#[tokio::test]
async fn test_secondary_ml_receives_url_as_body() {
    let backend = Arc::new(
        MockBackend::default()
            .with_url_response(url_response(10.0, "low", &[]))
            .with_content_response(content_response(0.0, &[])),
    );

    service(&backend).analyze("  https://example.org/a  ", None).await;

    assert_eq!(
        backend.calls(),
        vec![
            "analyze_url:https://example.org/a",
            "analyze_content:https://example.org/a",
        ]
    );
}

#[tokio::test]
async fn test_failed_ml_call_counts_as_zero() {
    let backend = Arc::new(
        MockBackend::default().with_url_response(url_response(70.0, "unknown-level", &[])),
    );

    let report = service(&backend)
        .analyze("https://login.example.com", None)
        .await
        .into_inner();

    assert_eq!(report.ml_score, None);
    assert_eq!(report.score, 35);
    assert_eq!(report.verdict.label, VerdictLabel::Suspicious);
    // Unrecognized backend level falls back to the combined-score level
    assert_eq!(report.verdict.verdict, RiskLevel::High);
}

#[tokio::test]
async fn test_fractional_remote_scores_are_blended_unrounded() {
    let backend = Arc::new(
        MockBackend::default()
            .with_url_response(url_response(59.4, "not-a-level", &[]))
            .with_content_response(content_response(59.5, &[])),
    );

    let report = service(&backend)
        .analyze("https://login.example.com", None)
        .await
        .into_inner();

    assert_eq!(report.score, 59);
    assert_eq!(report.verdict.label, VerdictLabel::Suspicious);
    assert_eq!(report.verdict.verdict, RiskLevel::High);
    // Displayed scores are still rounded individually
    assert_eq!(report.ml_score, Some(60));
    assert_eq!(report.visual_score, Some(59));
}

#[tokio::test]
async fn test_remote_indicators_include_local_flags_without_duplicates() {
    let backend = Arc::new(
        MockBackend::default()
            .with_url_response(url_response(
                50.0,
                "medium",
                &["No SSL/TLS encryption (plain HTTP)", "Suspicious redirect"],
            ))
            .with_content_response(content_response(50.0, &["Suspicious redirect"])),
    );

    let report = service(&backend)
        .analyze("http://paypa1.xyz/login", None)
        .await
        .into_inner();

    assert_eq!(
        report.verdict.indicators,
        vec![
            "No SSL/TLS encryption (plain HTTP)",
            "Suspicious redirect",
            "Suspicious top-level domain (.xyz)",
            "Possible typosquatting of: paypal",
        ]
    );
}

#[tokio::test]
async fn test_trusted_domain_short_circuits() {
    let backend = Arc::new(
        MockBackend::default()
            .with_url_response(UrlAnalysisResponse {
                is_trusted: true,
                risk_score: 90.0,
                risk_level: Some("critical".to_string()),
                risk_factors: Some(vec!["ignored".to_string()]),
                ..Default::default()
            })
            .with_content_response(content_response(99.0, &["ignored"])),
    );

    let report = service(&backend)
        .analyze("https://www.paypal.com", None)
        .await
        .into_inner();

    assert!(report.trusted);
    assert_eq!(report.score, 0);
    assert_eq!(report.verdict.confidence, 0);
    assert_eq!(report.verdict.label, VerdictLabel::Safe);
    assert_eq!(report.verdict.verdict, RiskLevel::Low);
    assert_eq!(report.verdict.indicators, vec![TRUSTED_DOMAIN_INDICATOR]);
    assert_eq!(backend.calls().len(), 1, "no secondary ML call for trusted domains");
}

#[tokio::test]
async fn test_secondary_ml_can_be_disabled() {
    let backend = Arc::new(
        MockBackend::default()
            .with_url_response(url_response(40.0, "medium", &[]))
            .with_content_response(content_response(100.0, &[])),
    );
    let service = UrlAnalysisService::new(
        backend.clone(),
        AnalysisConfig {
            enable_secondary_ml: false,
        },
    );

    let report = service.analyze("https://example.org", None).await.into_inner();

    assert_eq!(report.ml_score, None);
    assert_eq!(report.score, 20);
    assert_eq!(backend.calls(), vec!["analyze_url:https://example.org"]);
}

#[tokio::test]
async fn test_backend_failure_falls_back_to_heuristic() {
    let backend = Arc::new(MockBackend::offline());

    let outcome = service(&backend).analyze("paypa1.xyz", None).await;

    let report = match outcome {
        AnalysisOutcome::Fallback(report) => report,
        AnalysisOutcome::Remote(_) => panic!("expected fallback outcome"),
    };
    assert_eq!(report.domain_info.protocol, "https");
    assert_eq!(report.domain_info.typosquat_targets, vec!["paypal"]);
    assert_eq!(report.score, 50);
    assert_eq!(report.verdict.confidence, 70);
    assert_eq!(report.verdict.verdict, RiskLevel::High);
    assert_eq!(report.verdict.label, VerdictLabel::Phishing);
    assert!(report.visual_score.is_none());
}

#[tokio::test]
async fn test_fallback_for_clean_domain() {
    let backend = Arc::new(MockBackend::offline());

    let report = service(&backend)
        .analyze("https://example.com", None)
        .await
        .into_inner();

    assert_eq!(report.score, 0);
    assert_eq!(report.verdict.confidence, 20);
    assert_eq!(report.verdict.label, VerdictLabel::Safe);
    assert_eq!(
        report.verdict.indicators,
        vec!["No significant threats detected locally"]
    );
}

#[tokio::test]
async fn test_fallback_flags_www_brand_host() {
    let backend = Arc::new(MockBackend::offline());

    let report = service(&backend)
        .analyze("https://www.paypal.com", None)
        .await
        .into_inner();

    assert_eq!(report.domain_info.typosquat_targets, vec!["paypal"]);
    assert_eq!(report.score, 30);
    assert_eq!(report.verdict.label, VerdictLabel::Uncertain);
}

#[tokio::test]
async fn test_ip_host_fallback_is_uncertain() {
    let backend = Arc::new(MockBackend::offline());

    let report = service(&backend)
        .analyze("http://192.168.1.1/admin", None)
        .await
        .into_inner();

    assert!(report.domain_info.has_ip_address);
    assert!(report.domain_info.typosquat_targets.is_empty());
    assert_eq!(report.score, 40);
    assert_eq!(report.verdict.verdict, RiskLevel::Medium);
    assert_eq!(report.verdict.label, VerdictLabel::Uncertain);
    assert_eq!(report.verdict.bucket, VerdictBucket::Suspicious);
}

#[tokio::test]
async fn test_caller_token_is_forwarded() {
    let backend = Arc::new(
        MockBackend::default()
            .with_url_response(url_response(0.0, "low", &[]))
            .with_content_response(content_response(0.0, &[])),
    );

    service(&backend)
        .analyze("https://example.com", Some("session-token"))
        .await;

    assert!(backend
        .tokens()
        .iter()
        .all(|t| t.as_deref() == Some("session-token")));
}
