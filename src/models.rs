//! Request and response shapes.
//!
//! Field names serialize in camelCase to match the wire format the service
//! has always spoken. Counts are derived from the same traversals that
//! produce the sample lists, never stored independently.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::extract::{Image, Link, MetaTag};

/// Request body shared by both analysis endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    /// The page URL to fetch and analyze. Missing or empty is a client error.
    #[serde(default)]
    pub url: String,
}

/// The detailed analysis of one page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageReport {
    /// The analyzed URL, echoed back.
    pub url: String,
    /// Page title, or `"No title found"`.
    pub title: String,
    /// Meta description, or `"No description found"`.
    pub description: String,
    /// First `<h1>` text, or `"No H1 found"`.
    pub h1: String,
    /// Number of whitespace-separated words in the body.
    pub word_count: usize,
    /// Number of navigable links (non-empty href, not a `#` fragment).
    pub link_count: usize,
    /// First 10 navigable links, in document order.
    pub links: Vec<Link>,
    /// First 10 named meta tags, in document order.
    pub meta_tags: Vec<MetaTag>,
    /// Number of images with a non-empty src.
    pub image_count: usize,
    /// First 5 images, in document order.
    pub images: Vec<Image>,
    /// When the analysis ran (UTC, serialized as ISO-8601).
    pub analyzed_at: DateTime<Utc>,
}

/// Success envelope for the detailed endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct DetailedResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// The report itself.
    pub data: PageReport,
}

impl DetailedResponse {
    /// Wraps a report in the success envelope.
    pub fn new(data: PageReport) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// The summary analysis of one page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    /// Page title, empty string when absent.
    pub title: String,
    /// Meta description, or `"No description found"`.
    pub description: String,
    /// Links carrying an href attribute.
    pub total_links: usize,
    /// Links whose href starts with `/` or the source URL.
    pub internal_links: usize,
    /// The rest; always `total_links - internal_links`.
    pub external_links: usize,
    /// Count of named meta tags.
    pub meta_tags: usize,
    /// Unique email addresses, in order of first discovery.
    pub emails: Vec<String>,
}

/// Error payload: a status code and a message, nothing else.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// HTTP status code, duplicated in the body for clients that drop it.
    pub status_code: u16,
    /// Human-readable message; never a stack trace.
    pub message: String,
}
