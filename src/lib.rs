pub mod config;
pub mod error;

// GitHub API access
pub mod github;

// Aggregation and derived stats
pub mod aggregate;

// data.json
pub mod output;

pub mod cli;

// Re-exports
pub use config::Settings;
pub use error::{Error, Result};
