//! HTTP client initialization.
//!
//! Builds the outbound `reqwest::Client` used by the fetcher, configured
//! once at startup with the identifying User-Agent and the fetch timeout.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the outbound HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Per-request timeout from the configuration (default 10 seconds)
/// - Redirect following enabled (reqwest default, up to 10 hops)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_defaults() {
        let config = Config::default();
        assert!(init_client(&config).is_ok());
    }

    #[test]
    fn test_init_client_custom_user_agent() {
        let config = Config {
            user_agent: "TestBot/0.1".to_string(),
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }
}
