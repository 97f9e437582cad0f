//! Client configuration
//!
//! Everything the HTTP client needs is carried in an explicitly constructed
//! [`ClientConfig`]; nothing is read from ambient state once the client is
//! built.

use crate::error::{CatalogError, Result};
use reqwest::Url;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_SEARCH_URL: &str = "https://www.googleapis.com/books/v1/volumes";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the catalog backend and the external search source
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the first-party backend
    pub api_url: String,

    /// Endpoint of the external keyword search
    pub search_url: String,

    /// Optional key passed to the external search as `key`
    pub api_key: Option<String>,

    /// Optional bearer token sent to the first-party backend
    pub auth_token: Option<String>,

    /// Per-request timeout
    pub timeout: Duration,

    pub books_path: String,
    pub login_path: String,
    pub register_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            api_key: None,
            auth_token: None,
            timeout: DEFAULT_TIMEOUT,
            books_path: "/books".to_string(),
            login_path: "/login".to_string(),
            register_path: "/register".to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `BOOKTRACKER_*` environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("BOOKTRACKER_API_URL") {
            config.api_url = url;
        }
        if let Ok(url) = std::env::var("BOOKTRACKER_SEARCH_URL") {
            config.search_url = url;
        }
        config.api_key = std::env::var("BOOKTRACKER_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());
        config.auth_token = std::env::var("BOOKTRACKER_TOKEN")
            .ok()
            .filter(|t| !t.is_empty());
        if let Ok(secs) = std::env::var("BOOKTRACKER_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                CatalogError::Config(format!("BOOKTRACKER_TIMEOUT_SECS '{}' is not a number", secs))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Set the backend base URL
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the external search endpoint
    pub fn with_search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }

    /// Set the external search API key
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the backend bearer token
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check that both URLs parse and the timeout is usable
    pub fn validate(&self) -> Result<()> {
        parse_url("api_url", &self.api_url)?;
        parse_url("search_url", &self.search_url)?;
        if self.timeout.is_zero() {
            return Err(CatalogError::Config("timeout must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Backend URL for the given path
    pub fn api_endpoint(&self, path: &str) -> Result<Url> {
        let base = self.api_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        parse_url("api_url", &format!("{}/{}", base, path))
    }

    /// External search endpoint
    pub fn search_endpoint(&self) -> Result<Url> {
        parse_url("search_url", self.search_url.trim_end_matches('/'))
    }
}

fn parse_url(field: &str, value: &str) -> Result<Url> {
    let url = Url::parse(value)
        .map_err(|e| CatalogError::Config(format!("{} '{}': {}", field, value, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CatalogError::Config(format!(
            "{} must be http or https, got '{}'",
            field, other
        ))),
    }
}
