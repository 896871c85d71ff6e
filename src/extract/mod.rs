//! HTML extraction engine.
//!
//! This is the core of the service: the rules that turn a raw HTML document
//! into normalized structured fields. One engine, two field-set
//! configurations sharing the same parsing primitive and the same field
//! logic:
//! - the detailed report (title/description/h1 with fallback sentinels,
//!   word count, navigable links, meta tags, images, each with sampled
//!   sub-lists);
//! - the summary (title with empty fallback, link classification against
//!   the source URL, meta tag count, email discovery).
//!
//! All extraction is done with CSS selectors via the `scraper` crate;
//! parsing is best-effort and never fails on malformed markup.

mod document;
mod emails;
mod images;
mod links;
mod meta;
mod page;

pub use document::PageDocument;
pub use emails::discover_emails;
pub use images::{extract_images, Image};
pub use links::{classify_links, extract_links, navigable_links, Link, LinkBreakdown};
pub use meta::{extract_meta_tags, MetaTag};
pub use page::{extract_description, extract_first_heading, extract_title, word_count};

use chrono::Utc;
use log::debug;

use crate::config::{
    IMAGE_SAMPLE_LIMIT, LINK_SAMPLE_LIMIT, META_SAMPLE_LIMIT, NO_DESCRIPTION_FALLBACK,
    NO_H1_FALLBACK, NO_TITLE_FALLBACK,
};
use crate::models::{PageReport, PageSummary};

/// Runs the detailed extraction configuration over raw HTML.
///
/// Produces every field with its sentinel fallback, derived counts, and
/// sample lists that are prefixes of the full filtered lists in document
/// order.
pub fn analyze_detailed(html: &str, url: &str) -> PageReport {
    let document = PageDocument::parse(html);

    let title = extract_title(&document).unwrap_or_else(|| NO_TITLE_FALLBACK.to_string());
    let description =
        extract_description(&document).unwrap_or_else(|| NO_DESCRIPTION_FALLBACK.to_string());
    let h1 = extract_first_heading(&document).unwrap_or_else(|| NO_H1_FALLBACK.to_string());
    debug!("Extracted title for {url}: {title:?}");

    let words = word_count(&document);

    let navigable = navigable_links(&extract_links(&document));
    let link_count = navigable.len();
    let mut links = navigable;
    links.truncate(LINK_SAMPLE_LIMIT);

    let mut meta_tags = extract_meta_tags(&document);
    meta_tags.truncate(META_SAMPLE_LIMIT);

    let all_images = extract_images(&document);
    let image_count = all_images.len();
    let mut images = all_images;
    images.truncate(IMAGE_SAMPLE_LIMIT);

    debug!("Detailed analysis of {url}: {words} words, {link_count} links, {image_count} images");

    PageReport {
        url: url.to_string(),
        title,
        description,
        h1,
        word_count: words,
        link_count,
        links,
        meta_tags,
        image_count,
        images,
        analyzed_at: Utc::now(),
    }
}

/// Runs the summary extraction configuration over raw HTML.
///
/// Classifies every link with an href as internal or external relative to
/// the source URL, counts named meta tags, and discovers unique email
/// addresses across body text, mailto links, and `@`-carrying hrefs.
pub fn analyze_summary(html: &str, url: &str) -> PageSummary {
    let document = PageDocument::parse(html);

    let title = extract_title(&document).unwrap_or_default();
    let description =
        extract_description(&document).unwrap_or_else(|| NO_DESCRIPTION_FALLBACK.to_string());

    let breakdown = classify_links(&extract_links(&document), url);
    let meta_tags = extract_meta_tags(&document).len();
    let emails = discover_emails(&document);

    debug!(
        "Summary analysis of {url}: {} links ({} internal), {} emails",
        breakdown.total,
        breakdown.internal,
        emails.len()
    );

    PageSummary {
        title,
        description,
        total_links: breakdown.total,
        internal_links: breakdown.internal,
        external_links: breakdown.external,
        meta_tags,
        emails,
    }
}
