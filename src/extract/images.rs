//! Image extraction.

use scraper::Selector;
use serde::Serialize;
use std::sync::LazyLock;

use super::document::{attr, PageDocument};

const IMG_SELECTOR_STR: &str = "img";

static IMG_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(IMG_SELECTOR_STR).expect("Failed to parse img selector - this is a bug")
});

/// An image with a usable source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    /// The `src` attribute; always non-empty.
    pub src: String,
    /// The `alt` attribute, passed through as found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Extracts all `<img>` elements with a non-empty `src`, in document order.
pub fn extract_images(document: &PageDocument) -> Vec<Image> {
    document
        .select_all(&IMG_SELECTOR)
        .filter_map(|element| {
            let src = attr(element, "src").filter(|src| !src.is_empty())?;
            Some(Image {
                src: src.to_string(),
                alt: attr(element, "alt").map(str::to_string),
            })
        })
        .collect()
}
