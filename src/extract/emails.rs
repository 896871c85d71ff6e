//! Email discovery and deduplication.
//!
//! Pages expose email addresses inconsistently: as plain text, as clickable
//! `mailto:` links, or embedded in non-mailto hrefs such as contact-form
//! URLs. Matching only one of those surfaces misses real addresses, so
//! discovery scans all three and unions the results, preserving the order
//! of first discovery with exact-string deduplication (no case folding).

use regex::Regex;
use scraper::Selector;
use std::sync::LazyLock;

use super::document::{attr, PageDocument};

/// Email matching pattern.
///
/// Local part characters `A-Z a-z 0-9 . _ % + -`, an `@`, dot-separated
/// domain labels with a final label of 2+ letters, optionally one further
/// letter label (for `.co.uk`-style suffixes). Deliberately not full
/// RFC 5322; the simpler pattern covers the addresses real pages publish
/// and that tradeoff is accepted.
const EMAIL_PATTERN_STR: &str =
    r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}(?:\.[a-zA-Z]{2,})?";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(EMAIL_PATTERN_STR).expect("Failed to compile email pattern - this is a bug")
});

const ANCHOR_SELECTOR_STR: &str = "a[href]";

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(ANCHOR_SELECTOR_STR).expect("Failed to parse anchor selector - this is a bug")
});

/// Discovers unique email addresses across the document.
///
/// Scans three surfaces in order:
/// 1. pattern matches in the visible `<body>` text;
/// 2. `mailto:` links, keeping the remainder after the prefix when it
///    matches the pattern;
/// 3. any anchor href containing `@` (regardless of scheme), keeping the
///    first pattern match within the href value.
///
/// Returns addresses in order of first discovery, exact-string
/// deduplicated. The sets are small, so a linear scan is enough.
pub fn discover_emails(document: &PageDocument) -> Vec<String> {
    let mut emails: Vec<String> = Vec::new();

    let mut push_unique = |email: String| {
        if !emails.contains(&email) {
            emails.push(email);
        }
    };

    let body_text = document.body_text();
    for found in EMAIL_PATTERN.find_iter(&body_text) {
        push_unique(found.as_str().to_string());
    }

    for element in document.select_all(&ANCHOR_SELECTOR) {
        let Some(href) = attr(element, "href") else {
            continue;
        };
        if let Some(address) = href.strip_prefix("mailto:") {
            if EMAIL_PATTERN.is_match(address) {
                push_unique(address.to_string());
            }
        }
    }

    for element in document.select_all(&ANCHOR_SELECTOR) {
        let Some(href) = attr(element, "href") else {
            continue;
        };
        if href.contains('@') {
            if let Some(found) = EMAIL_PATTERN.find(href) {
                push_unique(found.as_str().to_string());
            }
        }
    }

    emails
}
