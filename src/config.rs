use serde::{Deserialize, Serialize};

/// Compiled-in production backend.
pub const DEFAULT_BASE_URL: &str = "https://palette-backend-hqcb.onrender.com";

/// Environment override for the backend address, used by the demo binary
/// and the test suite to point at a local stub.
pub const BASE_URL_ENV: &str = "AYA_BACKEND_URL";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Process-wide configuration: the fixed default unless the environment
    /// points somewhere else.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self { base_url: url },
            _ => Self::default(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}
