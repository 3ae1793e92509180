use crate::github::{
    client::GitHubClient,
    models::{AuthenticatedUser, Contributor},
};
use crate::Result;
use reqwest::StatusCode;
use tracing::debug;

impl GitHubClient {
    /// Resolve the login a token authenticates as
    pub async fn get_authenticated_user(&self, token: &str) -> Result<AuthenticatedUser> {
        self.get("/user", token).await
    }

    /// First page of contributors for a repository.
    ///
    /// Best effort: `None` on a missing token, transport error, non-success
    /// status or undecodable body.
    pub async fn fetch_contributors(
        &self,
        owner: &str,
        repo: &str,
        per_page: u32,
        token: Option<&str>,
    ) -> Option<Vec<Contributor>> {
        let token = token?;
        let path = format!(
            "/repos/{}/{}/contributors?per_page={per_page}",
            urlencoding::encode(owner),
            urlencoding::encode(repo)
        );

        let response = match self.get_raw(&path, token).await {
            Ok(response) => response,
            Err(e) => {
                debug!("Contributor lookup for {}/{} failed: {}", owner, repo, e.log_safe());
                return None;
            }
        };

        match response.status() {
            // Empty repositories have no contributor statistics
            StatusCode::NO_CONTENT => Some(Vec::new()),
            status if status.is_success() => match response.json().await {
                Ok(contributors) => Some(contributors),
                Err(e) => {
                    debug!("Undecodable contributor list for {}/{}: {}", owner, repo, e);
                    None
                }
            },
            status => {
                debug!("Contributor lookup for {}/{} returned {}", owner, repo, status);
                None
            }
        }
    }
}
