use crate::aggregate::{
    achievements::{compute_achievements, AchievementInputs},
    pages::is_page,
    streak::max_streak,
};
use crate::github::models::{AccountPayload, ContributionCalendar, Contributor, RepositoryNode};
use crate::output::models::{
    AccountProfile, ContributorStat, DashboardData, LanguageStat, PageRecord, RepositoryRecord,
    TotalStats,
};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Everything fetched for one tracked account
#[derive(Debug, Clone)]
pub struct AccountSnapshot {
    /// Tracked login as configured; used as the repository owner
    pub login: String,
    pub payload: AccountPayload,
    /// Contributor pages keyed by repository name, in fetch order
    pub contributors: Vec<(String, Vec<Contributor>)>,
}

/// Running totals for a dashboard build.
///
/// Keyed collections remember first-insertion order so finalized output is
/// deterministic for identical input.
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    users: Vec<AccountProfile>,
    repos: Vec<RepositoryRecord>,
    pages: Vec<PageRecord>,
    languages: Vec<LanguageStat>,
    language_index: HashMap<String, usize>,
    contributors: Vec<ContributorStat>,
    contributor_index: HashMap<String, usize>,
    totals: TotalStats,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn totals(&self) -> &TotalStats {
        &self.totals
    }

    pub fn users(&self) -> &[AccountProfile] {
        &self.users
    }

    /// Fold one account's data into the totals
    pub fn fold_account(mut self, snapshot: AccountSnapshot) -> Self {
        let AccountSnapshot {
            login,
            payload,
            contributors,
        } = snapshot;

        let (profile, repositories) = match payload {
            AccountPayload::User(user) => {
                let contribs = user.contributions_collection;
                self.totals.commits += contribs.total_commit_contributions;
                self.totals.prs += contribs.total_pull_request_contributions;
                self.totals.issues += contribs.total_issue_contributions;

                let profile = AccountProfile {
                    login: user.login,
                    name: user.name,
                    avatar_url: user.avatar_url,
                    bio: user.bio,
                    followers: user.followers.total_count,
                    calendar: contribs.contribution_calendar,
                };
                (profile, user.repositories.nodes)
            }
            AccountPayload::Organization(org) => {
                let profile = AccountProfile {
                    login: org.login,
                    name: org.name,
                    avatar_url: org.avatar_url,
                    bio: org.description,
                    followers: 0,
                    calendar: ContributionCalendar::default(),
                };
                (profile, org.repositories.nodes)
            }
        };

        self.users.push(profile);

        for repo in repositories {
            self.fold_repository(&login, repo);
        }

        for (repo_name, page) in contributors {
            self.fold_contributors(&repo_name, page);
        }

        self
    }

    fn fold_repository(&mut self, owner: &str, repo: RepositoryNode) {
        self.totals.stars += repo.stargazer_count;

        for edge in &repo.languages.edges {
            match self.language_index.get(&edge.node.name) {
                Some(&index) => self.languages[index].size += edge.size,
                None => {
                    self.language_index
                        .insert(edge.node.name.clone(), self.languages.len());
                    self.languages.push(LanguageStat {
                        name: edge.node.name.clone(),
                        size: edge.size,
                        color: edge.node.color.clone(),
                    });
                }
            }
        }

        let record = RepositoryRecord {
            repo,
            owner: owner.to_string(),
        };

        if is_page(&record.repo) {
            self.pages.push(record.clone());
        }
        self.repos.push(record);
    }

    fn fold_contributors(&mut self, repo_name: &str, page: Vec<Contributor>) {
        for contributor in page {
            let index = match self.contributor_index.get(&contributor.login) {
                Some(&index) => index,
                None => {
                    let index = self.contributors.len();
                    self.contributor_index
                        .insert(contributor.login.clone(), index);
                    self.contributors.push(ContributorStat {
                        login: contributor.login,
                        avatar_url: contributor.avatar_url,
                        commits: 0,
                        repos: Vec::new(),
                    });
                    index
                }
            };

            let entry = &mut self.contributors[index];
            entry.commits += contributor.contributions;
            entry.repos.push(repo_name.to_string());
        }
    }

    /// Sort collections, derive streaks and achievements
    pub fn finish(self, max_contributors: usize, updated_at: DateTime<Utc>) -> DashboardData {
        let Accumulator {
            users,
            mut repos,
            pages,
            mut languages,
            mut contributors,
            mut totals,
            ..
        } = self;

        // Stable sorts keep first-seen order among ties
        languages.sort_by(|a, b| b.size.cmp(&a.size));
        contributors.sort_by(|a, b| b.commits.cmp(&a.commits));
        contributors.truncate(max_contributors);
        repos.sort_by(|a, b| b.repo.stargazer_count.cmp(&a.repo.stargazer_count));

        totals.repo_count = repos.len() as u64;

        let achievements = compute_achievements(&AchievementInputs {
            totals: &totals,
            languages: &languages,
            repo_count: totals.repo_count,
            followers: users.iter().map(|u| u.followers).sum(),
            max_streak: max_streak(users.iter().map(|u| &u.calendar)),
        });

        DashboardData {
            users,
            repos,
            pages,
            contributors,
            language_stats: languages,
            achievements,
            total_stats: totals,
            updated_at,
        }
    }
}
