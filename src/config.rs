//! Application configuration
//!
//! Built once at startup and injected into the components that need it.
//! Nothing is read from or written to disk.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the remote backend
    pub endpoint: String,

    /// Per-request timeout in seconds
    pub request_timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8501".to_string(),
            request_timeout: 30,
        }
    }
}
