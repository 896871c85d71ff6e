//! Request handlers for the analysis endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, info, warn};

use crate::error_handling::AnalyzeError;
use crate::extract::{analyze_detailed, analyze_summary};
use crate::fetch::fetch_page;
use crate::models::{AnalyzeRequest, DetailedResponse, ErrorBody, PageSummary};
use crate::server::AppState;

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorBody {
            status_code: self.status_code(),
            message: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

/// Validates the request body, rejecting a missing or empty URL before any
/// network activity happens.
fn require_url(request: &AnalyzeRequest) -> Result<&str, AnalyzeError> {
    let url = request.url.trim();
    if url.is_empty() {
        warn!("Rejected analyze request without a URL");
        return Err(AnalyzeError::MissingUrl);
    }
    Ok(url)
}

/// `POST /api/analyze-url` — the detailed report.
pub async fn analyze_url_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<DetailedResponse>, AnalyzeError> {
    let url = require_url(&request)?;
    info!("Analyzing {url} (detailed)");

    let html = fetch_page(&state.client, url).await.inspect_err(|e| {
        error!("Error analyzing URL {url}: {e}");
    })?;

    let report = analyze_detailed(&html, url);
    Ok(Json(DetailedResponse::new(report)))
}

/// `POST /api/analyze` — the summary report.
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<PageSummary>, AnalyzeError> {
    let url = require_url(&request)?;
    info!("Analyzing {url} (summary)");

    let html = fetch_page(&state.client, url).await.inspect_err(|e| {
        error!("Error analyzing URL {url}: {e}");
    })?;

    Ok(Json(analyze_summary(&html, url)))
}
