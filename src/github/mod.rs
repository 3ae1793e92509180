pub mod client;
pub mod config;
pub mod graphql;
pub mod models;
pub mod rate_limiter;
pub mod rest;
pub mod token_pool;

pub use client::GitHubClient;
pub use config::GitHubConfig;
pub use models::AccountPayload;
pub use rate_limiter::RateLimiter;
pub use token_pool::TokenPool;
