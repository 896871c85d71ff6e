//! Title, description, heading, and word-count extraction.

use scraper::Selector;
use std::sync::LazyLock;

use super::document::{attr, element_text, PageDocument};

const TITLE_SELECTOR_STR: &str = "title";
const META_DESCRIPTION_SELECTOR_STR: &str = "meta[name='description']";
const H1_SELECTOR_STR: &str = "h1";

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(TITLE_SELECTOR_STR).expect("Failed to parse title selector - this is a bug")
});

static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(META_DESCRIPTION_SELECTOR_STR)
        .expect("Failed to parse meta description selector - this is a bug")
});

static H1_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(H1_SELECTOR_STR).expect("Failed to parse h1 selector - this is a bug")
});

/// Extracts the page title from the first `<title>` element, trimmed.
///
/// Returns `None` when the element is absent or its text is empty; each
/// report configuration substitutes its own fallback.
pub fn extract_title(document: &PageDocument) -> Option<String> {
    document
        .first(&TITLE_SELECTOR)
        .map(|element| element_text(element).trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Extracts the meta description from `<meta name="description">`, trimmed.
pub fn extract_description(document: &PageDocument) -> Option<String> {
    document
        .first(&META_DESCRIPTION_SELECTOR)
        .and_then(|element| attr(element, "content"))
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

/// Extracts the text of the first `<h1>` element, trimmed.
pub fn extract_first_heading(document: &PageDocument) -> Option<String> {
    document
        .first(&H1_SELECTOR)
        .map(|element| element_text(element).trim().to_string())
        .filter(|heading| !heading.is_empty())
}

/// Counts the words in the page body.
///
/// Concatenates all text under `<body>` (whole document when there is no
/// body), splits on runs of whitespace, and counts the tokens. An empty or
/// whitespace-only body counts as 0 words.
pub fn word_count(document: &PageDocument) -> usize {
    document.body_text().split_whitespace().count()
}
