//! Outbound page fetching.
//!
//! The fetcher is the only suspension point in the analysis pipeline. It
//! retrieves raw HTML text for a URL using the shared client (which carries
//! the User-Agent and timeout set at startup) and collapses every failure
//! mode into a single fetch error the caller maps to HTTP 500. The
//! extraction core never inspects or branches on fetch errors.

use log::debug;

use crate::error_handling::AnalyzeError;

/// Fetches the raw HTML body of a page.
///
/// Issues a GET request for `url` and returns the response body as text.
/// Non-2xx statuses, timeouts, connection failures, and unreadable bodies
/// all surface as [`AnalyzeError::Fetch`]. No retries are performed.
///
/// # Errors
///
/// Returns `AnalyzeError::Fetch` with the underlying error's message when
/// the request or body read fails.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String, AnalyzeError> {
    debug!("Fetching {url}");

    let response = client.get(url).send().await?.error_for_status()?;

    let body = response.text().await?;
    debug!("Fetched {} bytes from {url}", body.len());

    Ok(body)
}
