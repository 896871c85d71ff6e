//! Application configuration.
//!
//! Command-line options, defaults, and fixed constants (timeouts, sample
//! limits, fallback sentinels).

pub mod constants;
mod types;

pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, ValidationError};
