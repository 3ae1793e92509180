use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// List whose entries GitHub may null out individually.
///
/// Nodes the token cannot see (SAML-enforced organizations, blocked
/// repositories) come back as `null` next to a FORBIDDEN error while the rest
/// of the payload is still valid. A `null` list is treated as empty.
fn skip_nulls<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(items.unwrap_or_default().into_iter().flatten().collect())
}

/// Language edges with the same tolerance, plus edges whose node is `null`
fn language_edges<'de, D>(deserializer: D) -> Result<Vec<LanguageEdge>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct PartialEdge {
        size: u64,
        node: Option<Language>,
    }

    let edges: Vec<PartialEdge> = skip_nulls(deserializer)?;
    Ok(edges
        .into_iter()
        .filter_map(|edge| {
            edge.node.map(|node| LanguageEdge {
                size: edge.size,
                node,
            })
        })
        .collect())
}

/// GraphQL response envelope
///
/// `errors` may be populated next to a usable `data` payload: a login that
/// belongs to an organization always produces an error for the `user` branch.
/// `message` is set instead of `data` when GitHub rejects the request outright
/// (bad credentials, abuse detection).
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
}

/// Both lookup branches of the account query
#[derive(Debug, Clone, Deserialize)]
pub struct AccountData {
    pub user: Option<UserNode>,
    pub organization: Option<OrganizationNode>,
}

/// An account resolved to exactly one kind
#[derive(Debug, Clone)]
pub enum AccountPayload {
    User(UserNode),
    Organization(OrganizationNode),
}

impl AccountData {
    /// Pick whichever branch matched. A user wins if GitHub ever returns both.
    pub fn into_payload(self) -> Option<AccountPayload> {
        match (self.user, self.organization) {
            (Some(user), _) => Some(AccountPayload::User(user)),
            (None, Some(org)) => Some(AccountPayload::Organization(org)),
            (None, None) => None,
        }
    }
}

impl AccountPayload {
    pub fn repositories(&self) -> &[RepositoryNode] {
        match self {
            AccountPayload::User(user) => &user.repositories.nodes,
            AccountPayload::Organization(org) => &org.repositories.nodes,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserNode {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub followers: TotalCount,
    pub contributions_collection: ContributionsCollection,
    pub repositories: RepositoryConnection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationNode {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub description: Option<String>,
    pub repositories: RepositoryConnection,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalCount {
    pub total_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsCollection {
    pub contribution_calendar: ContributionCalendar,
    pub total_commit_contributions: u64,
    pub total_pull_request_contributions: u64,
    pub total_issue_contributions: u64,
}

/// Year of daily contribution counts, passed through to the dashboard as-is
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    pub total_contributions: u64,
    pub weeks: Vec<ContributionWeek>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionWeek {
    pub contribution_days: Vec<ContributionDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub contribution_count: u64,
    pub color: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositoryConnection {
    #[serde(default, deserialize_with = "skip_nulls")]
    pub nodes: Vec<RepositoryNode>,
}

/// Repository as returned by the account query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryNode {
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub homepage_url: Option<String>,
    pub stargazer_count: u64,
    pub fork_count: u64,
    pub pushed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub is_private: bool,
    pub primary_language: Option<Language>,
    #[serde(default)]
    pub languages: LanguageConnection,
    #[serde(default)]
    pub repository_topics: TopicConnection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageConnection {
    #[serde(default, deserialize_with = "language_edges")]
    pub edges: Vec<LanguageEdge>,
    #[serde(default)]
    pub total_size: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageEdge {
    pub size: u64,
    pub node: Language,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicConnection {
    #[serde(default, deserialize_with = "skip_nulls")]
    pub nodes: Vec<TopicNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicNode {
    pub topic: Topic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
}

/// `GET /user`
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticatedUser {
    pub login: String,
}

/// Entry of `GET /repos/{owner}/{repo}/contributors`
#[derive(Debug, Clone, Deserialize)]
pub struct Contributor {
    pub login: String,
    pub avatar_url: String,
    pub contributions: u64,
}
