//! Document adapter over the HTML parser.
//!
//! Wraps `scraper::Html` behind the small query surface the extraction
//! engine needs: select all matching elements in document order, look up
//! element attributes, and collect subtree text. Parsing is best-effort in
//! the browser sense: malformed markup never fails, and empty or non-HTML
//! input simply yields a document with no matching elements.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static BODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("body").expect("Failed to parse body selector - this is a bug")
});

/// An immutable parsed representation of one HTML page.
///
/// Constructed once per request from fetched HTML text, used to derive all
/// extraction fields, then discarded. Never shared across requests.
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    /// Parses raw HTML text into a document.
    ///
    /// Never fails: the parser recovers from malformed markup the way a
    /// lenient browser does, and unusable input produces a document that
    /// matches nothing.
    pub fn parse(raw: &str) -> Self {
        Self {
            html: Html::parse_document(raw),
        }
    }

    /// Returns all elements matching `selector`, in document order.
    pub fn select_all<'a>(
        &'a self,
        selector: &'a Selector,
    ) -> impl Iterator<Item = ElementRef<'a>> {
        self.html.select(selector)
    }

    /// Returns the first element matching `selector`, if any.
    pub fn first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(selector).next()
    }

    /// Concatenated text of every node under `<body>`, in document order.
    ///
    /// Falls back to the whole document when no `<body>` element exists
    /// (possible for non-HTML input).
    pub fn body_text(&self) -> String {
        match self.first(&BODY_SELECTOR) {
            Some(body) => body.text().collect(),
            None => self.html.root_element().text().collect(),
        }
    }
}

/// Concatenated text of all descendant text nodes of an element.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Looks up an attribute on an element, absent if missing.
pub fn attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}
