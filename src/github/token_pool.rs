use crate::github::client::GitHubClient;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{info, warn};

/// Short, stable identifier for a credential that is safe to log
pub fn fingerprint(token: &str) -> String {
    let digest = format!("{:x}", Sha256::digest(token.as_bytes()));
    format!("token:{}", &digest[..8])
}

/// A bearer token and, once validated, the login it authenticates as
pub struct Credential {
    token: String,
    owner: Option<String>,
}

impl Credential {
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn fingerprint(&self) -> String {
        fingerprint(&self.token)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("fingerprint", &self.fingerprint())
            .field("owner", &self.owner)
            .finish()
    }
}

/// Deduplicated set of credentials with a login index and round-robin cursors.
///
/// Per-account fallback and contributor enrichment draw from separate cursors
/// so the order in which one consumer hands out tokens never depends on how
/// often the other one was called.
#[derive(Debug)]
pub struct TokenPool {
    credentials: Vec<Credential>,
    /// Lowercased login -> indexes into `credentials`
    owners: HashMap<String, Vec<usize>>,
    account_cursor: AtomicUsize,
    enrichment_cursor: AtomicUsize,
}

impl TokenPool {
    /// Build a pool from a whitespace and/or comma separated token list
    pub fn new(raw: &str) -> Self {
        let mut credentials: Vec<Credential> = Vec::new();

        for token in raw
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            if !credentials.iter().any(|c| c.token == token) {
                credentials.push(Credential {
                    token: token.to_string(),
                    owner: None,
                });
            }
        }

        Self {
            credentials,
            owners: HashMap::new(),
            account_cursor: AtomicUsize::new(0),
            enrichment_cursor: AtomicUsize::new(0),
        }
    }

    /// Resolve the owner of every credential, one request at a time.
    ///
    /// Credentials that fail validation stay in the pool for round-robin use
    /// but are never chosen as an account's own token.
    pub async fn initialize(&mut self, client: &GitHubClient) {
        info!(
            "Initializing token pool with {} credentials",
            self.credentials.len()
        );

        for index in 0..self.credentials.len() {
            let token_id = self.credentials[index].fingerprint();
            match client.get_authenticated_user(&self.credentials[index].token).await {
                Ok(user) => {
                    info!("Valid credential {} for user: {}", token_id, user.login);
                    self.record_owner(index, user.login);
                }
                Err(e) => {
                    warn!("Credential {} failed validation: {}", token_id, e.log_safe());
                }
            }
        }

        info!(
            "Token pool ready: {} of {} credentials validated",
            self.validated_count(),
            self.credentials.len()
        );
    }

    fn record_owner(&mut self, index: usize, login: String) {
        self.owners
            .entry(login.to_lowercase())
            .or_default()
            .push(index);
        self.credentials[index].owner = Some(login);
    }

    /// Token owned by `login` if one validated, otherwise the next pool token
    pub fn token_for_account(&self, login: &str) -> Option<&str> {
        match self
            .owners
            .get(&login.to_lowercase())
            .and_then(|indexes| indexes.first())
        {
            Some(&index) => Some(self.credentials[index].token.as_str()),
            None => self.next_token(&self.account_cursor),
        }
    }

    /// Next token in round-robin order across the whole pool
    pub fn any_token(&self) -> Option<&str> {
        self.next_token(&self.enrichment_cursor)
    }

    fn next_token(&self, cursor: &AtomicUsize) -> Option<&str> {
        if self.credentials.is_empty() {
            return None;
        }
        let index = cursor.fetch_add(1, Ordering::Relaxed) % self.credentials.len();
        Some(self.credentials[index].token.as_str())
    }

    pub fn credentials(&self) -> &[Credential] {
        &self.credentials
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    pub fn validated_count(&self) -> usize {
        self.credentials.iter().filter(|c| c.owner.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduplicates_mixed_separators() {
        let pool = TokenPool::new("A A,B  B");
        let tokens: Vec<&str> = pool.credentials().iter().map(|c| c.token()).collect();
        assert_eq!(tokens, vec!["A", "B"]);
    }

    #[test]
    fn test_empty_input() {
        let pool = TokenPool::new(" ,\n\t, ");
        assert!(pool.is_empty());
        assert_eq!(pool.any_token(), None);
        assert_eq!(pool.token_for_account("octocat"), None);
    }

    #[test]
    fn test_any_token_cycles_through_pool() {
        let pool = TokenPool::new("t1 t2 t3");
        let drawn: Vec<&str> = (0..7).filter_map(|_| pool.any_token()).collect();
        assert_eq!(drawn, vec!["t1", "t2", "t3", "t1", "t2", "t3", "t1"]);
    }

    #[test]
    fn test_token_for_account_prefers_owned_token() {
        let mut pool = TokenPool::new("t1,t2,t3");
        pool.record_owner(1, "Octocat".to_string());

        assert_eq!(pool.token_for_account("Octocat"), Some("t2"));
        assert_eq!(pool.token_for_account("octocat"), Some("t2"));
        // Owned lookups leave both cursors untouched
        assert_eq!(pool.any_token(), Some("t1"));
    }

    #[test]
    fn test_token_for_account_falls_back_to_round_robin() {
        let mut pool = TokenPool::new("t1,t2");
        pool.record_owner(0, "someone".to_string());

        assert_eq!(pool.token_for_account("stranger"), Some("t1"));
        assert_eq!(pool.token_for_account("stranger"), Some("t2"));
        assert_eq!(pool.token_for_account("stranger"), Some("t1"));
    }

    #[test]
    fn test_cursors_are_independent() {
        let pool = TokenPool::new("t1,t2,t3");

        assert_eq!(pool.any_token(), Some("t1"));
        assert_eq!(pool.any_token(), Some("t2"));
        assert_eq!(pool.token_for_account("nobody"), Some("t1"));
        assert_eq!(pool.any_token(), Some("t3"));
    }

    #[test]
    fn test_debug_does_not_leak_tokens() {
        let mut pool = TokenPool::new("ghp_supersecret");
        pool.record_owner(0, "octocat".to_string());
        let debug = format!("{pool:?}");
        assert!(!debug.contains("ghp_supersecret"));
        assert!(debug.contains("octocat"));
    }

    #[test]
    fn test_fingerprint_is_stable_and_short() {
        assert_eq!(fingerprint("abc"), fingerprint("abc"));
        assert_ne!(fingerprint("abc"), fingerprint("abd"));
        assert_eq!(fingerprint("abc").len(), "token:".len() + 8);
    }
}
