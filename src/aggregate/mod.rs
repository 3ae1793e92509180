pub mod accumulator;
pub mod achievements;
pub mod pages;
pub mod streak;

pub use accumulator::{AccountSnapshot, Accumulator};

use crate::config::AggregateConfig;
use crate::github::{models::AccountData, GitHubClient, TokenPool};
use crate::output::DashboardData;
use crate::Result;
use chrono::Utc;
use tracing::{debug, error, info, warn};

/// Drives the per-account fetch loop and folds results into an `Accumulator`
pub struct Aggregator<'a> {
    client: &'a GitHubClient,
    pool: &'a TokenPool,
    config: &'a AggregateConfig,
}

impl<'a> Aggregator<'a> {
    pub fn new(client: &'a GitHubClient, pool: &'a TokenPool, config: &'a AggregateConfig) -> Self {
        Self {
            client,
            pool,
            config,
        }
    }

    /// Fetch every account in order and build the dashboard.
    ///
    /// A failing account is logged and skipped; this never fails as a whole.
    pub async fn run(&self, accounts: &[String]) -> DashboardData {
        let mut acc = Accumulator::new();

        for login in accounts {
            info!("Fetching data for {}", login);

            match self.fetch_account(login).await {
                Ok(Some(snapshot)) => {
                    acc = acc.fold_account(snapshot);
                }
                Ok(None) => {}
                Err(e) => {
                    error!("Failed fetching data for {}: {}", login, e.log_safe());
                }
            }
        }

        acc.finish(self.config.max_contributors, Utc::now())
    }

    /// Everything needed to fold one account, or `None` if it was skipped
    pub async fn fetch_account(&self, login: &str) -> Result<Option<AccountSnapshot>> {
        let token = self.pool.token_for_account(login);
        if token.is_none() {
            warn!("Skipping {} (no token available)", login);
            return Ok(None);
        }

        let response = self.client.fetch_account_info(login, token).await?;

        let payload = match response.data.and_then(AccountData::into_payload) {
            Some(payload) => payload,
            None => {
                warn!(
                    "No user or organization data for {}: {}",
                    login,
                    describe_errors(&response.errors, response.message.as_deref())
                );
                return Ok(None);
            }
        };

        for err in &response.errors {
            // The branch that does not match always reports NOT_FOUND
            if err.error_type.as_deref() == Some("NOT_FOUND") {
                debug!("GraphQL note for {}: {}", login, err.message);
            } else {
                warn!("GraphQL error for {}: {}", login, err.message);
            }
        }

        let mut contributors = Vec::new();
        for repo in payload
            .repositories()
            .iter()
            .take(self.config.contributor_repo_limit)
        {
            if let Some(page) = self
                .client
                .fetch_contributors(
                    login,
                    &repo.name,
                    self.config.contributors_per_repo,
                    self.pool.any_token(),
                )
                .await
            {
                contributors.push((repo.name.clone(), page));
            }
        }

        Ok(Some(AccountSnapshot {
            login: login.to_string(),
            payload,
            contributors,
        }))
    }
}

fn describe_errors(errors: &[crate::github::models::GraphQlError], message: Option<&str>) -> String {
    let mut parts: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
    parts.extend(message);
    if parts.is_empty() {
        "empty response".to_string()
    } else {
        parts.join("; ")
    }
}
