use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::github::token_pool::fingerprint;

/// Rate limit tracker for GitHub API, one budget per credential
#[derive(Clone)]
pub struct RateLimiter {
    state: Arc<RwLock<HashMap<String, RateLimitState>>>,
    buffer: u32,
}

#[derive(Debug, Clone)]
struct RateLimitState {
    /// Total rate limit
    limit: u32,

    /// Remaining requests
    remaining: u32,

    /// Unix timestamp when rate limit resets
    reset_at: i64,
}

impl RateLimitState {
    fn fresh() -> Self {
        Self {
            limit: 5000, // Default for authenticated requests
            remaining: 5000,
            reset_at: Utc::now().timestamp() + 3600,
        }
    }
}

impl RateLimiter {
    /// Create a new rate limiter with a buffer
    pub fn new(buffer: u32) -> Self {
        Self {
            state: Arc::new(RwLock::new(HashMap::new())),
            buffer,
        }
    }

    /// Update a credential's budget from GitHub API response headers
    pub async fn update_from_headers(&self, token: &str, headers: &reqwest::header::HeaderMap) {
        let key = fingerprint(token);
        let mut states = self.state.write().await;
        let state = states.entry(key.clone()).or_insert_with(RateLimitState::fresh);

        if let Some(limit) = header_value(headers, "x-ratelimit-limit") {
            state.limit = limit;
        }

        if let Some(remaining) = header_value(headers, "x-ratelimit-remaining") {
            state.remaining = remaining;
        }

        if let Some(reset) = header_value(headers, "x-ratelimit-reset") {
            state.reset_at = reset;
        }

        debug!(
            "Rate limit for {} updated: {}/{} (resets at {})",
            key, state.remaining, state.limit, state.reset_at
        );
    }

    /// Check if we should wait before the next request with this credential
    pub async fn should_wait(&self, token: &str) -> bool {
        let states = self.state.read().await;
        match states.get(&fingerprint(token)) {
            Some(state) => {
                // Use the minimum of buffer or 10% of limit to handle low rate limits
                let threshold = std::cmp::min(self.buffer, (state.limit / 10).max(5));
                state.remaining <= threshold
            }
            None => false,
        }
    }

    /// Wait if necessary before making a request with this credential
    pub async fn wait_if_needed(&self, token: &str) {
        if !self.should_wait(token).await {
            return;
        }

        let wait_secs = {
            let states = self.state.read().await;
            let now = Utc::now().timestamp();
            match states.get(&fingerprint(token)) {
                Some(state) if now < state.reset_at => {
                    warn!(
                        "Rate limit approaching for {} ({}/{}), waiting {} seconds until reset",
                        fingerprint(token),
                        state.remaining,
                        state.limit,
                        state.reset_at - now
                    );
                    (state.reset_at - now) as u64
                }
                _ => 0,
            }
        }; // Lock released before sleeping

        if wait_secs > 0 {
            tokio::time::sleep(tokio::time::Duration::from_secs(wait_secs)).await;
        }
    }

    /// Get current rate limit status for a credential
    pub async fn get_status(&self, token: &str) -> Option<(u32, u32, DateTime<Utc>)> {
        let states = self.state.read().await;
        states.get(&fingerprint(token)).map(|state| {
            (
                state.remaining,
                state.limit,
                DateTime::from_timestamp(state.reset_at, 0).unwrap_or_else(Utc::now),
            )
        })
    }
}

fn header_value<T: FromStr>(headers: &reqwest::header::HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
}
