// Brand impersonation detection for domain names
// Two passes: edit distance against known brands, then leetspeak decoding

// =============================================================================
// STATIC REFERENCE DATA
// =============================================================================

/// Brands checked for impersonation. All lowercase, all at least four
/// characters so the prefix filter below always compares four characters.
pub static KNOWN_BRANDS: &[&str] = &[
    "paypal",
    "google",
    "amazon",
    "microsoft",
    "apple",
    "facebook",
    "netflix",
    "instagram",
    "linkedin",
    "twitter",
    "whatsapp",
    "dropbox",
    "outlook",
    "office",
    "icloud",
    "yahoo",
    "github",
    "adobe",
    "docusign",
    "ebay",
    "chase",
    "wellsfargo",
    "bankofamerica",
    "coinbase",
    "binance",
    "fedex",
];

/// Lookalike characters and the letters they stand in for
static LEET_MAP: &[(char, char)] = &[
    ('0', 'o'),
    ('1', 'l'),
    ('3', 'e'),
    ('4', 'a'),
    ('5', 's'),
    ('@', 'a'),
];

const PREFIX_FILTER_LEN: usize = 4;
const MAX_EDIT_DISTANCE: usize = 3;

// =============================================================================
// EDIT DISTANCE
// =============================================================================

/// Levenshtein distance over Unicode scalar values; insertion, deletion and
/// substitution each cost 1.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // dp[j] holds the distance between a[..i] and b[..j] for the current row
    let mut dp: Vec<usize> = (0..=b.len()).collect();

    for i in 1..=a.len() {
        let mut diagonal = dp[0];
        dp[0] = i;

        for j in 1..=b.len() {
            let above = dp[j];
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            dp[j] = (above + 1).min(dp[j - 1] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }

    dp[b.len()]
}

// =============================================================================
// NORMALIZATION
// =============================================================================

pub fn leet_decode(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            LEET_MAP
                .iter()
                .find(|(from, _)| *from == c)
                .map(|(_, to)| *to)
                .unwrap_or(c)
        })
        .collect()
}

/// Hostname without its final label, lowercased, separators removed.
/// `secure-paypa1.com` becomes `securepaypa1`. Subdomains, `www`
/// included, stay part of the base.
pub fn domain_base(hostname: &str) -> String {
    let host = hostname.to_lowercase();

    let without_tld = match host.rsplit_once('.') {
        Some((rest, _tld)) => rest,
        None => "",
    };

    without_tld
        .chars()
        .filter(|c| !matches!(c, '.' | '-' | '_'))
        .collect()
}

// =============================================================================
// DETECTION
// =============================================================================

/// Brands the given domain base plausibly impersonates, in detection order
/// and without duplicates. An exact brand match is legitimate and skipped.
pub fn detect_typosquat_targets(domain_base: &str) -> Vec<String> {
    let mut targets: Vec<String> = Vec::new();

    // 1. Direct edit-distance pass
    for brand in KNOWN_BRANDS {
        if domain_base == *brand {
            continue;
        }

        let prefix: String = brand.chars().take(PREFIX_FILTER_LEN).collect();
        if !domain_base.contains(prefix.as_str()) {
            continue;
        }

        let distance = levenshtein(domain_base, brand);
        if distance > 0 && distance <= MAX_EDIT_DISTANCE {
            push_unique(&mut targets, brand);
        }
    }

    // 2. Leetspeak-normalization pass
    let decoded = leet_decode(domain_base);
    if decoded != domain_base {
        for brand in KNOWN_BRANDS {
            if decoded.contains(brand) {
                push_unique(&mut targets, brand);
            }
        }
    }

    targets
}

fn push_unique(targets: &mut Vec<String>, brand: &str) {
    if !targets.iter().any(|existing| existing == brand) {
        targets.push(brand.to_string());
    }
}
