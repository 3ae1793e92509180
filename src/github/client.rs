use crate::github::{
    config::GitHubConfig, models::GraphQlResponse, rate_limiter::RateLimiter,
};
use crate::{Error, Result};
use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use chrono::{DateTime, Utc};
use tracing::debug;

/// GitHub API client
///
/// Credentials are attached per request so a single client serves every
/// token in the pool.
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    config: GitHubConfig,
    rate_limiter: RateLimiter,
}

impl GitHubClient {
    /// Create a new GitHub client
    pub fn new(config: GitHubConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)
                .map_err(|e| Error::Internal(format!("Invalid user agent: {e}")))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {e}")))?;

        let rate_limiter = RateLimiter::new(config.rate_limit_buffer);

        Ok(Self {
            client,
            config,
            rate_limiter,
        })
    }

    pub fn config(&self) -> &GitHubConfig {
        &self.config
    }

    /// Remaining budget, limit and reset time last reported for a token
    pub async fn rate_limit_status(&self, token: &str) -> Option<(u32, u32, DateTime<Utc>)> {
        self.rate_limiter.get_status(token).await
    }

    /// Send a GET to the REST API and return the raw response
    pub(crate) async fn get_raw(&self, path: &str, token: &str) -> Result<Response> {
        self.rate_limiter.wait_if_needed(token).await;

        let url = format!("{}{}", self.config.api_base_url, path);
        debug!("GitHub API request: GET {}", url);

        let response = self.client.get(&url).bearer_auth(token).send().await?;

        self.rate_limiter
            .update_from_headers(token, response.headers())
            .await;

        Ok(response)
    }

    /// Make a GET request to the REST API, failing on any non-success status
    pub(crate) async fn get<T>(&self, path: &str, token: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.get_raw(path, token).await?;
        let status = response.status();

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            // Reported by the caller
            debug!("GitHub API error: {} - {}", status, error_body);

            return Err(match status {
                StatusCode::UNAUTHORIZED => {
                    Error::GitHub("GitHub authentication failed".to_string())
                }
                StatusCode::FORBIDDEN => Error::GitHub("GitHub API rate limit exceeded".to_string()),
                StatusCode::NOT_FOUND => Error::GitHub("GitHub resource not found".to_string()),
                _ => Error::GitHub(format!("HTTP {status}")),
            });
        }

        response.json::<T>().await.map_err(Error::Http)
    }

    /// POST a GraphQL query and decode the envelope whatever the status.
    ///
    /// Provider-side errors are left in the envelope for the caller.
    pub(crate) async fn graphql<T>(
        &self,
        query: &str,
        variables: serde_json::Value,
        token: &str,
    ) -> Result<GraphQlResponse<T>>
    where
        T: DeserializeOwned,
    {
        self.rate_limiter.wait_if_needed(token).await;

        let url = self.config.graphql_url();
        debug!("GitHub API request: POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        self.rate_limiter
            .update_from_headers(token, response.headers())
            .await;

        let status = response.status();
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            Error::GitHub(format!("Failed to parse GraphQL response (HTTP {status}): {e}"))
        })
    }
}
