use crate::error::{Error, Result};
use crate::github::GitHubConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logins whose data ends up on the dashboard, in processing order
pub const TRACKED_ACCOUNTS: &[&str] = &["RainPPR", "RaineMtF", "raineblog", "rainewhk"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Raw credential string, whitespace and/or comma separated
    #[serde(skip_serializing)]
    pub tokens: String,
    pub accounts: Vec<String>,
    pub output: OutputConfig,
    pub github: GitHubConfig,
    pub aggregate: AggregateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateConfig {
    /// Repositories per account that get contributor enrichment
    pub contributor_repo_limit: usize,
    pub contributors_per_repo: u32,
    pub max_contributors: usize,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            contributor_repo_limit: 5,
            contributors_per_repo: 10,
            max_contributors: 50,
        }
    }
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let tokens = std::env::var("TOKENS_POOL").unwrap_or_default();

        let path = std::env::var("OUTPUT_PATH")
            .unwrap_or_else(|_| "public/data.json".to_string())
            .into();

        let github = GitHubConfig::from_env()?;

        let contributor_repo_limit = std::env::var("CONTRIBUTOR_REPO_LIMIT")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid CONTRIBUTOR_REPO_LIMIT value".to_string()))?;

        let contributors_per_repo = std::env::var("CONTRIBUTORS_PER_REPO")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid CONTRIBUTORS_PER_REPO value".to_string()))?;

        let max_contributors = std::env::var("MAX_CONTRIBUTORS")
            .unwrap_or_else(|_| "50".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid MAX_CONTRIBUTORS value".to_string()))?;

        Ok(Settings {
            tokens,
            accounts: TRACKED_ACCOUNTS.iter().map(|s| s.to_string()).collect(),
            output: OutputConfig { path },
            github,
            aggregate: AggregateConfig {
                contributor_repo_limit,
                contributors_per_repo,
                max_contributors,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.output.path.as_os_str().is_empty() {
            return Err(Error::Config("OUTPUT_PATH must not be empty".to_string()));
        }

        self.github.validate()?;

        // GitHub caps per_page at 100
        if !(1..=100).contains(&self.aggregate.contributors_per_repo) {
            return Err(Error::Config(
                "CONTRIBUTORS_PER_REPO must be between 1 and 100".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings() -> Settings {
        Settings {
            tokens: String::new(),
            accounts: vec!["octocat".to_string()],
            output: OutputConfig {
                path: "public/data.json".into(),
            },
            github: GitHubConfig::default(),
            aggregate: AggregateConfig::default(),
        }
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = test_settings();
        assert!(settings.validate().is_ok());

        settings.aggregate.contributors_per_repo = 0;
        assert!(settings.validate().is_err());

        settings.aggregate.contributors_per_repo = 101;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_invalid_api_url_rejected() {
        let mut settings = test_settings();
        settings.github.api_base_url = "not a url".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_tokens_never_serialized() {
        let mut settings = test_settings();
        settings.tokens = "ghp_secret".to_string();
        let json = serde_json::to_string(&settings).unwrap();
        assert!(!json.contains("ghp_secret"));
    }
}
