//! Configuration constants.
//!
//! Defaults and fixed limits used throughout the application: the outbound
//! fetch timeout, the identifying User-Agent, sample sizes for the detailed
//! report, and the fallback sentinels for missing page elements.

/// Default address the HTTP server binds to.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Outbound fetch timeout in seconds.
///
/// Pages slower than this are reported as fetch failures; the extraction
/// core never retries.
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for outbound page fetches.
///
/// Identifies the bot and carries a contact URL so site operators can see
/// who is fetching their pages. Override via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; PageInsightBot/1.0; +https://pageinsight.dev)";

/// Maximum number of links included in the detailed report sample.
pub const LINK_SAMPLE_LIMIT: usize = 10;

/// Maximum number of meta tags included in the detailed report sample.
pub const META_SAMPLE_LIMIT: usize = 10;

/// Maximum number of images included in the detailed report sample.
pub const IMAGE_SAMPLE_LIMIT: usize = 5;

/// Sentinel returned by the detailed report when a page has no title.
pub const NO_TITLE_FALLBACK: &str = "No title found";

/// Sentinel returned when a page has no meta description.
pub const NO_DESCRIPTION_FALLBACK: &str = "No description found";

/// Sentinel returned by the detailed report when a page has no `<h1>`.
pub const NO_H1_FALLBACK: &str = "No H1 found";

/// Generic message surfaced when a fetch fails without a usable error string.
pub const FETCH_FAILURE_FALLBACK: &str =
    "Error analyzing URL. Please make sure the URL is accessible and try again.";
