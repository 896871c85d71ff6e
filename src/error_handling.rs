//! Error type definitions.
//!
//! This module defines the error taxonomy for the analysis pipeline and for
//! application startup. Analysis errors carry the HTTP status code the
//! responder should surface; extraction itself never fails because HTML
//! parsing is best-effort.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::config::FETCH_FAILURE_FALLBACK;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors that can occur while analyzing a URL.
///
/// Input validation failures map to HTTP 400 and are signaled before any
/// network activity; fetch failures map to HTTP 500. A single failed fetch
/// yields a single failed response; no retries happen anywhere.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// The request body did not carry a usable `url` field.
    #[error("URL is required")]
    MissingUrl,

    /// The outbound page fetch failed: network error, timeout, non-2xx
    /// status, or an unreadable body. The message is the underlying
    /// error's display string.
    #[error("{0}")]
    Fetch(String),
}

impl AnalyzeError {
    /// HTTP status code the responder surfaces for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AnalyzeError::MissingUrl => 400,
            AnalyzeError::Fetch(_) => 500,
        }
    }

    /// Human-readable message for the error payload.
    ///
    /// Falls back to a generic message when the underlying fetch error
    /// produced an empty string. No stack traces are exposed to callers.
    pub fn public_message(&self) -> String {
        match self {
            AnalyzeError::MissingUrl => self.to_string(),
            AnalyzeError::Fetch(msg) if msg.trim().is_empty() => {
                FETCH_FAILURE_FALLBACK.to_string()
            }
            AnalyzeError::Fetch(msg) => msg.clone(),
        }
    }
}

impl From<ReqwestError> for AnalyzeError {
    fn from(e: ReqwestError) -> Self {
        AnalyzeError::Fetch(e.to_string())
    }
}
