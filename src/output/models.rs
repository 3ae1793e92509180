use crate::github::models::{ContributionCalendar, RepositoryNode};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Everything the dashboard reads from `data.json`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub users: Vec<AccountProfile>,
    pub repos: Vec<RepositoryRecord>,
    pub pages: Vec<PageRecord>,
    pub contributors: Vec<ContributorStat>,
    pub language_stats: Vec<LanguageStat>,
    pub achievements: Vec<Achievement>,
    pub total_stats: TotalStats,
    #[serde(serialize_with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
}

/// Profile card for a tracked account. Organizations report zero followers
/// and an empty calendar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub followers: u64,
    pub calendar: ContributionCalendar,
}

/// Upstream repository fields plus the tracked login it was fetched for
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryRecord {
    #[serde(flatten)]
    pub repo: RepositoryNode,
    pub owner: String,
}

/// A repository that hosts a browsable site
pub type PageRecord = RepositoryRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageStat {
    pub name: String,
    pub size: u64,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributorStat {
    pub login: String,
    pub avatar_url: String,
    pub commits: u64,
    pub repos: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalStats {
    pub stars: u64,
    pub commits: u64,
    pub prs: u64,
    pub issues: u64,
    pub repo_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: String,
    /// Icon name understood by the dashboard (Star, Award, Cpu, Zap, Trophy)
    pub icon: &'static str,
    pub tier: Tier,
}

fn iso_millis<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_top_level_field_names() {
        let data = DashboardData {
            users: vec![],
            repos: vec![],
            pages: vec![],
            contributors: vec![],
            language_stats: vec![],
            achievements: vec![],
            total_stats: TotalStats::default(),
            updated_at: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
        };

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(
            value,
            json!({
                "users": [],
                "repos": [],
                "pages": [],
                "contributors": [],
                "languageStats": [],
                "achievements": [],
                "totalStats": { "stars": 0, "commits": 0, "prs": 0, "issues": 0, "repoCount": 0 },
                "updatedAt": "2025-01-02T03:04:05.000Z"
            })
        );
    }

    #[test]
    fn test_achievement_tier_is_lowercase() {
        let achievement = Achievement {
            id: "star-collector",
            title: "Star Collector",
            description: "Earned 150 stars".to_string(),
            icon: "Star",
            tier: Tier::Bronze,
        };
        let value = serde_json::to_value(&achievement).unwrap();
        assert_eq!(value["tier"], "bronze");
        assert!(Tier::Gold > Tier::Silver && Tier::Silver > Tier::Bronze);
    }
}
