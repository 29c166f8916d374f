// Domain feature record produced by the local extractor

use serde::{Deserialize, Serialize};

/// Structured features derived from a raw URL or bare domain string.
///
/// Built once per analysis by [`crate::utils::domain_extractor::extract_domain_info`]
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainInfo {
    pub domain: String,
    pub protocol: String,
    #[serde(rename = "hasSSL")]
    pub has_ssl: bool,
    pub path_depth: usize,
    pub has_query_params: bool,
    #[serde(rename = "isSuspiciousTLD")]
    pub is_suspicious_tld: bool,
    pub domain_length: usize,
    #[serde(rename = "hasIPAddress")]
    pub has_ip_address: bool,
    pub has_subdomains: bool,
    /// Brands this domain may be impersonating, in detection order
    pub typosquat_targets: Vec<String>,
}

impl DomainInfo {
    /// Degraded record for input that could not be parsed as a URL.
    /// Every flag is off; only the length survives.
    pub fn unparsed(raw: &str) -> Self {
        Self {
            domain: raw.to_string(),
            protocol: "unknown".to_string(),
            has_ssl: false,
            path_depth: 0,
            has_query_params: false,
            is_suspicious_tld: false,
            domain_length: raw.chars().count(),
            has_ip_address: false,
            has_subdomains: false,
            typosquat_targets: Vec::new(),
        }
    }

    pub fn has_typosquat_targets(&self) -> bool {
        !self.typosquat_targets.is_empty()
    }

    /// Final dot-separated label of the hostname, e.g. `xyz` for `a.example.xyz`
    pub fn tld(&self) -> Option<&str> {
        if self.has_ip_address {
            return None;
        }
        self.domain
            .rsplit_once('.')
            .map(|(_, tld)| tld)
            .filter(|tld| !tld.is_empty())
    }
}
