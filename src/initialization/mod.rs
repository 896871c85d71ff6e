//! Application initialization.
//!
//! This module provides functions to initialize shared resources set up
//! once at process startup:
//! - Logger (level and format fixed from configuration)
//! - Outbound HTTP client (User-Agent and timeout)

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;
