// Email content analysis
// Remote ML classifier first, local keyword check when the backend fails

use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{
    AnalysisOutcome, ContentAnalysisRequest, ContentAnalysisResponse, EmailVerdict, VerdictBucket,
};
use crate::services::backend_client::AnalysisBackend;
use crate::services::url_analysis::clamp_score;
use crate::services::verdict::bucket_for;
use crate::utils::attempt::attempt;
use crate::utils::email_fallback::{classify_email_locally, matched_keywords, FALLBACK_INDICATOR};

pub struct EmailAnalysisService {
    backend: Arc<dyn AnalysisBackend>,
}

impl EmailAnalysisService {
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        Self { backend }
    }

    pub async fn analyze(
        &self,
        request: ContentAnalysisRequest,
        auth_token: Option<&str>,
    ) -> AnalysisOutcome<EmailVerdict> {
        let remote = attempt(
            "Remote email analysis",
            self.backend.analyze_content(&request, auth_token),
        )
        .await;

        let outcome = match remote {
            Some(response) => AnalysisOutcome::Remote(remote_verdict(response)),
            None => {
                warn!("Backend unavailable, classifying email with local keyword check");
                AnalysisOutcome::Fallback(local_verdict(&request))
            },
        };

        let verdict = outcome.result();
        info!(
            "Email analysis {}: {}{}",
            verdict.analysis_id,
            verdict.label,
            if outcome.is_fallback() { " [fallback]" } else { "" }
        );

        outcome
    }
}

/// Label from the backend response: an explicit label wins, then the
/// phishing score under the shared thresholds, then the boolean flag.
pub fn remote_label(response: &ContentAnalysisResponse) -> VerdictBucket {
    let explicit = response
        .label
        .as_deref()
        .or(response.verdict.as_deref())
        .and_then(|label| label.parse::<VerdictBucket>().ok());

    if let Some(label) = explicit {
        return label;
    }

    let score = u32::from(clamp_score(response.phishing_score));
    if score > 0 {
        return bucket_for(score);
    }

    if response.is_phishing {
        VerdictBucket::Phishing
    } else {
        VerdictBucket::Safe
    }
}

fn remote_verdict(response: ContentAnalysisResponse) -> EmailVerdict {
    EmailVerdict {
        analysis_id: Uuid::new_v4(),
        label: remote_label(&response),
        phishing_score: Some(clamp_score(response.phishing_score)),
        confidence: Some(response.confidence),
        indicators: response.indicators,
        reason: response.reason,
        analyzed_at: Utc::now(),
    }
}

/// Keyword classification of the body alone; the subject is not read.
/// No confidence is reported.
pub fn local_verdict(request: &ContentAnalysisRequest) -> EmailVerdict {
    let mut indicators = vec![FALLBACK_INDICATOR.to_string()];
    indicators.extend(
        matched_keywords(&request.body)
            .into_iter()
            .map(|kw| format!("Contains \"{}\"", kw)),
    );

    EmailVerdict {
        analysis_id: Uuid::new_v4(),
        label: classify_email_locally(&request.body),
        phishing_score: None,
        confidence: None,
        indicators,
        reason: None,
        analyzed_at: Utc::now(),
    }
}
