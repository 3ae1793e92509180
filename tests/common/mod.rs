#![allow(dead_code)]

use ghdash::config::{AggregateConfig, OutputConfig, Settings};
use ghdash::github::GitHubConfig;
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};
use std::path::Path;

pub fn settings(server: &ServerGuard, tokens: &str, accounts: &[&str], output: &Path) -> Settings {
    Settings {
        tokens: tokens.to_string(),
        accounts: accounts.iter().map(|s| s.to_string()).collect(),
        output: OutputConfig {
            path: output.to_path_buf(),
        },
        github: GitHubConfig {
            api_base_url: server.url(),
            request_timeout_secs: 5,
            ..Default::default()
        },
        aggregate: AggregateConfig::default(),
    }
}

pub fn repo(name: &str, stars: u64, homepage: Option<&str>, languages: &[(&str, u64)]) -> Value {
    let edges: Vec<Value> = languages
        .iter()
        .map(|(lang, size)| json!({ "size": size, "node": { "name": lang, "color": "#abcdef" } }))
        .collect();
    let total: u64 = languages.iter().map(|(_, size)| size).sum();

    json!({
        "name": name,
        "description": format!("{name} description"),
        "url": format!("https://github.com/owner/{name}"),
        "homepageUrl": homepage,
        "stargazerCount": stars,
        "forkCount": 1,
        "pushedAt": "2025-06-01T10:00:00Z",
        "createdAt": "2023-01-01T10:00:00Z",
        "isPrivate": false,
        "primaryLanguage": languages.first().map(|(lang, _)| json!({ "name": lang, "color": "#abcdef" })),
        "languages": { "edges": edges, "totalSize": total },
        "repositoryTopics": { "nodes": [ { "topic": { "name": "dashboard" } } ] }
    })
}

/// Calendar with one week per slice of daily counts
pub fn calendar(weeks: &[&[u64]]) -> Value {
    let mut day = 1;
    let mut total = 0;
    let weeks: Vec<Value> = weeks
        .iter()
        .map(|counts| {
            let days: Vec<Value> = counts
                .iter()
                .map(|count| {
                    total += count;
                    let value = json!({
                        "date": format!("2025-03-{day:02}"),
                        "contributionCount": count,
                        "color": if *count > 0 { "#40c463" } else { "#ebedf0" }
                    });
                    day += 1;
                    value
                })
                .collect();
            json!({ "contributionDays": days })
        })
        .collect();

    json!({ "totalContributions": total, "weeks": weeks })
}

pub fn user_response(login: &str, followers: u64, commits: u64, calendar: Value, repos: Vec<Value>) -> Value {
    json!({
        "data": {
            "user": {
                "login": login,
                "name": format!("{login} name"),
                "avatarUrl": format!("https://avatars.example/{login}"),
                "bio": "Building things",
                "followers": { "totalCount": followers },
                "contributionsCollection": {
                    "contributionCalendar": calendar,
                    "totalCommitContributions": commits,
                    "totalPullRequestContributions": 4,
                    "totalIssueContributions": 2
                },
                "repositories": { "nodes": repos }
            },
            "organization": null
        },
        "errors": [
            { "type": "NOT_FOUND", "path": ["organization"], "message": format!("Could not resolve to an Organization with the login of '{login}'.") }
        ]
    })
}

pub fn org_response(login: &str, repos: Vec<Value>) -> Value {
    json!({
        "data": {
            "user": null,
            "organization": {
                "login": login,
                "name": format!("{login} org"),
                "avatarUrl": format!("https://avatars.example/{login}"),
                "description": "Shared projects",
                "repositories": { "nodes": repos }
            }
        },
        "errors": [
            { "type": "NOT_FOUND", "path": ["user"], "message": format!("Could not resolve to a User with the login of '{login}'.") }
        ]
    })
}

pub async fn mock_identity(server: &mut ServerGuard, token: &str, login: &str) -> Mock {
    server
        .mock("GET", "/user")
        .match_header("authorization", format!("Bearer {token}").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "login": login }).to_string())
        .create_async()
        .await
}

pub async fn mock_bad_identity(server: &mut ServerGuard, token: &str) -> Mock {
    server
        .mock("GET", "/user")
        .match_header("authorization", format!("Bearer {token}").as_str())
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"Bad credentials"}"#)
        .create_async()
        .await
}

pub async fn mock_account(server: &mut ServerGuard, login: &str, body: Value) -> Mock {
    server
        .mock("POST", "/graphql")
        .match_body(Matcher::PartialJson(json!({ "variables": { "login": login } })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

pub async fn mock_contributors(server: &mut ServerGuard, owner: &str, repo: &str, body: Value) -> Mock {
    server
        .mock(
            "GET",
            Matcher::Regex(format!("^/repos/{owner}/{repo}/contributors")),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}
