//! page_insight library: fetch a web page and extract structured summary
//! data from its HTML.
//!
//! The extraction engine is the heart of the crate: given raw HTML and the
//! source URL it derives the title, description, first heading, word count,
//! links (filtered or classified), meta tags, images, and deduplicated
//! email addresses. The fetcher and the axum responder are thin
//! collaborators around it.
//!
//! # Example
//!
//! ```
//! use page_insight::analyze_summary;
//!
//! let html = r#"<html><head><title>Hi</title></head>
//!     <body><a href="/about">About</a></body></html>"#;
//! let summary = analyze_summary(html, "https://example.com");
//! assert_eq!(summary.title, "Hi");
//! assert_eq!(summary.internal_links, 1);
//! ```
//!
//! The server entry points require a Tokio runtime.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
mod extract;
mod fetch;
pub mod initialization;
pub mod models;
pub mod server;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::AnalyzeError;
pub use extract::{
    analyze_detailed, analyze_summary, classify_links, discover_emails, extract_description,
    extract_first_heading, extract_images, extract_links, extract_meta_tags, extract_title,
    navigable_links, word_count, Image, Link, LinkBreakdown, MetaTag, PageDocument,
};
pub use fetch::fetch_page;
pub use server::{app, run_server};
