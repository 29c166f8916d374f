// Keyword classifier used only when remote email analysis fails.
// Much weaker than the remote model; callers must label its output as degraded.

use crate::models::VerdictBucket;

static PHISHING_KEYWORDS: &[&str] = &["urgent", "password", "verify your account"];
static SUSPICIOUS_KEYWORDS: &[&str] = &["offer", "click here"];

pub const FALLBACK_INDICATOR: &str =
    "Remote analysis unavailable: classified by local keyword check";

/// Classify email text by substring containment, phishing keywords first.
pub fn classify_email_locally(body: &str) -> VerdictBucket {
    let text = body.to_lowercase();

    if PHISHING_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        VerdictBucket::Phishing
    } else if SUSPICIOUS_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        VerdictBucket::Suspicious
    } else {
        VerdictBucket::Safe
    }
}

/// Keywords from both lists found in the text, for display next to the label
pub fn matched_keywords(body: &str) -> Vec<&'static str> {
    let text = body.to_lowercase();
    PHISHING_KEYWORDS
        .iter()
        .chain(SUSPICIOUS_KEYWORDS.iter())
        .filter(|kw| text.contains(*kw))
        .copied()
        .collect()
}
