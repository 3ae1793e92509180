use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// GitHub API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// REST root; GraphQL lives at `{api_base_url}/graphql`
    pub api_base_url: String,

    /// User agent sent with every request
    pub user_agent: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// Rate limit buffer - reserve this many requests per credential
    pub rate_limit_buffer: u32,
}

impl GitHubConfig {
    /// Create a new GitHubConfig from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let api_base_url = env::var("GITHUB_API_URL")
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);

        let request_timeout_secs = match env::var("GITHUB_REQUEST_TIMEOUT") {
            Ok(s) => s
                .parse()
                .map_err(|_| Error::Config("Invalid GITHUB_REQUEST_TIMEOUT value".to_string()))?,
            Err(_) => defaults.request_timeout_secs,
        };

        let rate_limit_buffer = match env::var("GITHUB_RATE_LIMIT_BUFFER") {
            Ok(s) => s.parse().map_err(|_| {
                Error::Config("Invalid GITHUB_RATE_LIMIT_BUFFER value".to_string())
            })?,
            Err(_) => defaults.rate_limit_buffer,
        };

        Ok(Self {
            api_base_url,
            user_agent: defaults.user_agent,
            request_timeout_secs,
            rate_limit_buffer,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if url::Url::parse(&self.api_base_url).is_err() {
            return Err(Error::Config(format!(
                "GITHUB_API_URL is not a valid URL: {}",
                self.api_base_url
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(Error::Config("Request timeout must be non-zero".to_string()));
        }

        Ok(())
    }

    /// Get the GraphQL endpoint URL
    pub fn graphql_url(&self) -> String {
        format!("{}/graphql", self.api_base_url)
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.github.com".to_string(),
            user_agent: format!("ghdash/{}", env!("CARGO_PKG_VERSION")),
            request_timeout_secs: 30,
            rate_limit_buffer: 100,
        }
    }
}
