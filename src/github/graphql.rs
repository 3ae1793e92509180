use crate::github::{
    client::GitHubClient,
    models::{AccountData, GraphQlResponse},
};
use crate::{Error, Result};
use serde_json::json;

/// Resolves a login as user and as organization in one round trip.
/// GitHub answers `null` (plus an error) for the branch that does not match.
pub const ACCOUNT_QUERY: &str = r#"
query accountInfo($login: String!) {
  user(login: $login) {
    login
    name
    avatarUrl
    bio
    followers { totalCount }
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            date
            contributionCount
            color
          }
        }
      }
      totalCommitContributions
      totalPullRequestContributions
      totalIssueContributions
    }
    repositories(first: 100, ownerAffiliations: OWNER, isFork: false, orderBy: {field: PUSHED_AT, direction: DESC}) {
      nodes { ...RepositoryFields }
    }
  }
  organization(login: $login) {
    login
    name
    avatarUrl
    description
    repositories(first: 100, isFork: false, orderBy: {field: PUSHED_AT, direction: DESC}) {
      nodes { ...RepositoryFields }
    }
  }
}

fragment RepositoryFields on Repository {
  name
  description
  url
  homepageUrl
  stargazerCount
  forkCount
  pushedAt
  createdAt
  isPrivate
  primaryLanguage {
    name
    color
  }
  languages(first: 10, orderBy: {field: SIZE, direction: DESC}) {
    edges {
      size
      node {
        name
        color
      }
    }
    totalSize
  }
  repositoryTopics(first: 5) {
    nodes {
      topic { name }
    }
  }
}
"#;

impl GitHubClient {
    /// Fetch profile, calendar and repositories for a user or organization
    pub async fn fetch_account_info(
        &self,
        login: &str,
        token: Option<&str>,
    ) -> Result<GraphQlResponse<AccountData>> {
        let token = token.ok_or_else(|| {
            Error::NoCredential(format!("no token available to query {login}"))
        })?;

        self.graphql(ACCOUNT_QUERY, json!({ "login": login }), token)
            .await
    }
}
