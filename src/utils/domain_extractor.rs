// Domain feature extraction for user-supplied URLs and bare domains

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;
use url::Url;

use crate::models::DomainInfo;
use crate::utils::typosquat::{detect_typosquat_targets, domain_base};

// =============================================================================
// STATIC PATTERNS
// =============================================================================

lazy_static! {
    /// Dotted-quad IPv4 literal. Octet ranges are not checked.
    static ref IPV4_PATTERN: Regex =
        Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").expect("Invalid IPv4 pattern regex");
}

pub static SUSPICIOUS_TLDS: &[&str] = &[
    ".xyz", ".top", ".buzz", ".club", ".tk", ".ml", ".ga", ".cf", ".gq", ".pw",
];

// =============================================================================
// EXTRACTION
// =============================================================================

/// Parse a raw URL or bare domain into its risk-relevant features.
///
/// Input without an `http://` or `https://` scheme is treated as a bare
/// domain and parsed as `https://{input}`. Anything that still fails to parse
/// yields [`DomainInfo::unparsed`]; this function never fails.
pub fn extract_domain_info(raw_url: &str) -> DomainInfo {
    let candidate = with_default_scheme(raw_url);

    let url = match Url::parse(&candidate) {
        Ok(url) => url,
        Err(e) => {
            debug!("Could not parse {:?} as a URL: {}", raw_url, e);
            return DomainInfo::unparsed(raw_url);
        },
    };

    let hostname = match url.host_str() {
        Some(host) if !host.is_empty() => host.to_lowercase(),
        _ => {
            debug!("URL {:?} has no host", raw_url);
            return DomainInfo::unparsed(raw_url);
        },
    };

    let protocol = url.scheme().to_lowercase();
    let has_ip_address = is_ipv4_literal(&hostname);

    let path_depth = url
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).count())
        .unwrap_or(0);

    let typosquat_targets = if has_ip_address {
        Vec::new()
    } else {
        detect_typosquat_targets(&domain_base(&hostname))
    };

    DomainInfo {
        has_ssl: protocol == "https",
        protocol,
        path_depth,
        has_query_params: url.query().map_or(false, |q| !q.is_empty()),
        is_suspicious_tld: has_suspicious_tld(&hostname),
        domain_length: hostname.chars().count(),
        has_ip_address,
        has_subdomains: !has_ip_address && hostname.split('.').count() > 2,
        typosquat_targets,
        domain: hostname,
    }
}

fn with_default_scheme(raw_url: &str) -> String {
    let trimmed = raw_url.trim();
    let lower = trimmed.to_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

pub fn is_ipv4_literal(host: &str) -> bool {
    IPV4_PATTERN.is_match(host)
}

pub fn has_suspicious_tld(host: &str) -> bool {
    SUSPICIOUS_TLDS.iter().any(|&tld| host.ends_with(tld))
}
