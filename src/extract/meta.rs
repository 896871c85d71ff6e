//! Meta tag extraction.

use scraper::Selector;
use serde::Serialize;
use std::sync::LazyLock;

use super::document::{attr, PageDocument};

const META_SELECTOR_STR: &str = "meta";

static META_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(META_SELECTOR_STR).expect("Failed to parse meta selector - this is a bug")
});

/// A named meta tag with non-empty content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    /// Resolved from the `name` attribute, falling back to `property`.
    pub name: String,
    /// The `content` attribute value.
    pub content: String,
}

/// Extracts all meta tags with a resolvable name and non-empty content.
///
/// The name resolves from the `name` attribute, falling back to `property`
/// when `name` is absent (so Open Graph tags like
/// `<meta property="og:title">` are retained under their property name).
/// Tags where either the resolved name or the content is empty are dropped.
pub fn extract_meta_tags(document: &PageDocument) -> Vec<MetaTag> {
    document
        .select_all(&META_SELECTOR)
        .filter_map(|element| {
            let name = attr(element, "name").or_else(|| attr(element, "property"))?;
            let content = attr(element, "content")?;
            if name.is_empty() || content.is_empty() {
                return None;
            }
            Some(MetaTag {
                name: name.to_string(),
                content: content.to_string(),
            })
        })
        .collect()
}
