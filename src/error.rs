use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No credential available: {0}")]
    NoCredential(String),

    #[error("GitHub API error: {0}")]
    GitHub(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get a sanitized error message safe for logging
    /// Filters out anything that may carry a credential
    pub fn log_safe(&self) -> String {
        match self {
            // reqwest errors can echo request URLs and headers
            Error::Http(e) if e.is_timeout() => "GitHub request timed out".to_string(),
            Error::Http(e) if e.is_decode() => "Failed to decode GitHub response".to_string(),
            Error::Http(_) => "GitHub HTTP request failed".to_string(),

            Error::Internal(msg) | Error::GitHub(msg) => {
                let lower = msg.to_lowercase();
                if lower.contains("token")
                    || lower.contains("bearer")
                    || lower.contains("authorization")
                    || lower.contains("ghp_")
                    || lower.contains("github_pat_")
                {
                    "GitHub error (details redacted)".to_string()
                } else {
                    self.to_string()
                }
            }

            Error::Json(e) => format!("JSON error: {e}"),
            Error::Io(_) => "File system operation failed".to_string(),
            Error::Config(msg) => format!("Configuration error: {msg}"),
            Error::NoCredential(msg) => format!("No credential available: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_safe_redacts_credentials() {
        let err = Error::Internal("Invalid header for token ghp_abc123".to_string());
        assert_eq!(err.log_safe(), "GitHub error (details redacted)");

        let err = Error::GitHub("HTTP 502 Bad Gateway".to_string());
        assert_eq!(err.log_safe(), "GitHub API error: HTTP 502 Bad Gateway");
    }

    #[test]
    fn test_log_safe_keeps_config_messages() {
        let err = Error::Config("Invalid MAX_CONTRIBUTORS value".to_string());
        assert_eq!(
            err.log_safe(),
            "Configuration error: Invalid MAX_CONTRIBUTORS value"
        );
    }
}
