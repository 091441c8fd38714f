//! API endpoint configuration.

use std::env;

/// Environment variable that overrides the API base URL.
pub const BASE_URL_ENV: &str = "ONTOLOGY_API_BASE_URL";

/// Base URL used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Where the catalog API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config from `base_url`, trimming any trailing slashes so
    /// paths can be appended verbatim.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Resolve the base URL from [`BASE_URL_ENV`], falling back to
    /// [`DEFAULT_BASE_URL`] when the variable is unset or blank.
    pub fn from_env() -> Self {
        match env::var(BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::new(value),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
