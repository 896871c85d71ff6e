//! Link extraction and classification.
//!
//! Anchors feed two different views. The detailed report filters down to
//! navigable links (non-empty href, not a `#` fragment) and samples them;
//! the summary classifies links as internal or external relative to the
//! source URL. The two views deliberately disagree on href-less anchors:
//! both drop them, but through separate code paths, because an anchor
//! without an href is not a navigable link and must never be counted as
//! external.

use scraper::Selector;
use serde::Serialize;
use std::sync::LazyLock;

use super::document::{attr, element_text, PageDocument};

const ANCHOR_SELECTOR_STR: &str = "a";

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(ANCHOR_SELECTOR_STR).expect("Failed to parse anchor selector - this is a bug")
});

/// A link derived from an anchor element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Trimmed visible text of the anchor; may be empty.
    pub text: String,
    /// The `href` attribute, absent when the anchor carries none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Counts of links classified relative to the source URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkBreakdown {
    /// Links with an href attribute (href-less anchors do not count).
    pub total: usize,
    /// Links whose href starts with `/` or with the source URL.
    pub internal: usize,
    /// Everything else; `internal + external == total` by construction.
    pub external: usize,
}

/// Extracts every anchor element as a [`Link`], in document order.
pub fn extract_links(document: &PageDocument) -> Vec<Link> {
    document
        .select_all(&ANCHOR_SELECTOR)
        .map(|element| Link {
            text: element_text(element).trim().to_string(),
            href: attr(element, "href").map(str::to_string),
        })
        .collect()
}

/// Filters links down to those a reader can actually follow.
///
/// Drops entries with an absent or empty href, and fragment-only links
/// (href starting with `#`). The result preserves document order, so any
/// prefix of it is a valid sample.
pub fn navigable_links(links: &[Link]) -> Vec<Link> {
    links
        .iter()
        .filter(|link| match link.href.as_deref() {
            Some(href) => !href.is_empty() && !href.starts_with('#'),
            None => false,
        })
        .cloned()
        .collect()
}

/// Classifies links as internal or external relative to the source URL.
///
/// A link is internal when its href starts with `/` or with `base_url`
/// itself. Anchors without an href attribute are excluded from the total
/// entirely; an empty-string href still counts (as external).
pub fn classify_links(links: &[Link], base_url: &str) -> LinkBreakdown {
    let mut total = 0;
    let mut internal = 0;

    for link in links {
        let Some(href) = link.href.as_deref() else {
            continue;
        };
        total += 1;
        if href.starts_with('/') || href.starts_with(base_url) {
            internal += 1;
        }
    }

    LinkBreakdown {
        total,
        internal,
        external: total - internal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links_from(html: &str) -> Vec<Link> {
        extract_links(&PageDocument::parse(html))
    }

    #[test]
    fn test_extract_links_preserves_document_order() {
        let links = links_from(
            r#"<html><body>
                <a href="/first">First</a>
                <a href="/second">Second</a>
                <a href="https://other.example/third">Third</a>
            </body></html>"#,
        );
        assert_eq!(links.len(), 3);
        assert_eq!(links[0].text, "First");
        assert_eq!(links[2].href.as_deref(), Some("https://other.example/third"));
    }

    #[test]
    fn test_extract_links_trims_text() {
        let links = links_from(r#"<html><body><a href="/x">  spaced  </a></body></html>"#);
        assert_eq!(links[0].text, "spaced");
    }

    #[test]
    fn test_extract_links_keeps_hrefless_anchors() {
        let links = links_from(r#"<html><body><a name="top">Anchor</a></body></html>"#);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href, None);
    }

    #[test]
    fn test_navigable_links_drops_fragments_and_missing_hrefs() {
        let links = links_from(
            r##"<html><body>
                <a href="/keep">Keep</a>
                <a href="#section">Fragment</a>
                <a>No href</a>
                <a href="">Empty</a>
                <a href="https://example.com/page">Absolute</a>
            </body></html>"##,
        );
        let navigable = navigable_links(&links);
        assert_eq!(navigable.len(), 2);
        assert_eq!(navigable[0].href.as_deref(), Some("/keep"));
        assert_eq!(
            navigable[1].href.as_deref(),
            Some("https://example.com/page")
        );
    }

    #[test]
    fn test_classify_links_internal_and_external() {
        let links = links_from(
            r#"<html><body>
                <a href="/about">About</a>
                <a href="https://example.com/docs">Docs</a>
                <a href="https://other.example/away">Away</a>
            </body></html>"#,
        );
        let breakdown = classify_links(&links, "https://example.com");
        assert_eq!(breakdown.total, 3);
        assert_eq!(breakdown.internal, 2);
        assert_eq!(breakdown.external, 1);
    }

    #[test]
    fn test_classify_links_hrefless_anchor_not_counted() {
        // An anchor without an href is not a navigable link: it must be
        // dropped from the total, not classified as external
        let links = links_from(
            r#"<html><body>
                <a name="top">No href</a>
                <a href="/home">Home</a>
            </body></html>"#,
        );
        let breakdown = classify_links(&links, "https://example.com");
        assert_eq!(breakdown.total, 1);
        assert_eq!(breakdown.internal, 1);
        assert_eq!(breakdown.external, 0);
    }

    #[test]
    fn test_classify_links_empty_href_counts_as_external() {
        let links = links_from(r#"<html><body><a href="">Empty</a></body></html>"#);
        let breakdown = classify_links(&links, "https://example.com");
        assert_eq!(breakdown.total, 1);
        assert_eq!(breakdown.external, 1);
    }

    #[test]
    fn test_classify_links_totals_always_balance() {
        let links = links_from(
            r##"<html><body>
                <a href="/a">a</a><a href="#frag">b</a><a>c</a>
                <a href="mailto:x@example.com">d</a>
                <a href="https://example.com/e">e</a>
            </body></html>"##,
        );
        let breakdown = classify_links(&links, "https://example.com");
        assert_eq!(breakdown.internal + breakdown.external, breakdown.total);
    }
}
