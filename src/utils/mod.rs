// Utility modules for PhishGuard Core

pub mod attempt;
pub mod domain_extractor;
pub mod email_fallback;
pub mod service_error;
pub mod typosquat;
pub mod url_heuristic;

pub use attempt::{attempt, attempt_or_default};
pub use domain_extractor::extract_domain_info;
pub use email_fallback::classify_email_locally;
pub use service_error::ServiceError;
pub use typosquat::{detect_typosquat_targets, levenshtein, KNOWN_BRANDS};
pub use url_heuristic::{score_domain, LocalRiskScore};
