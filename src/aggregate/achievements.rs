use crate::output::models::{Achievement, LanguageStat, Tier, TotalStats};

/// Figures the badge rules look at
#[derive(Debug, Clone, Copy)]
pub struct AchievementInputs<'a> {
    pub totals: &'a TotalStats,
    /// Sorted by size, largest first
    pub languages: &'a [LanguageStat],
    pub repo_count: u64,
    pub followers: u64,
    pub max_streak: u64,
}

type Rule = fn(&AchievementInputs<'_>) -> Option<Achievement>;

const RULES: &[Rule] = &[
    star_collector,
    commit_machine,
    polyglot,
    streak_keeper,
    prolific_builder,
    community_magnet,
    around_the_clock,
];

/// Evaluate every badge rule; rules are independent of each other
pub fn compute_achievements(inputs: &AchievementInputs<'_>) -> Vec<Achievement> {
    RULES.iter().filter_map(|rule| rule(inputs)).collect()
}

/// Highest rung whose threshold `value` reaches, `Bronze` otherwise
fn tier_for(value: u64, ladder: &[(u64, Tier)]) -> Tier {
    ladder
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map(|(_, tier)| *tier)
        .unwrap_or(Tier::Bronze)
}

fn star_collector(inputs: &AchievementInputs<'_>) -> Option<Achievement> {
    let stars = inputs.totals.stars;
    (stars >= 100).then(|| Achievement {
        id: "star-collector",
        title: "Star Collector",
        description: format!("Earned {stars} stars across all repositories"),
        icon: "Star",
        tier: tier_for(stars, &[(1000, Tier::Gold), (500, Tier::Silver)]),
    })
}

fn commit_machine(inputs: &AchievementInputs<'_>) -> Option<Achievement> {
    let commits = inputs.totals.commits;
    (commits >= 500).then(|| Achievement {
        id: "commit-machine",
        title: "Commit Machine",
        description: format!("Pushed {commits} commits over the past year"),
        icon: "Zap",
        tier: tier_for(commits, &[(5000, Tier::Gold)]),
    })
}

fn polyglot(inputs: &AchievementInputs<'_>) -> Option<Achievement> {
    let count = inputs.languages.len() as u64;
    if count < 3 {
        return None;
    }

    let top: Vec<&str> = inputs
        .languages
        .iter()
        .take(3)
        .map(|lang| lang.name.as_str())
        .collect();

    Some(Achievement {
        id: "polyglot",
        title: "Polyglot",
        description: format!("Writes code in {count} languages, led by {}", top.join(", ")),
        icon: "Cpu",
        tier: tier_for(count, &[(10, Tier::Gold)]),
    })
}

fn streak_keeper(inputs: &AchievementInputs<'_>) -> Option<Achievement> {
    let streak = inputs.max_streak;
    (streak >= 7).then(|| Achievement {
        id: "streak-keeper",
        title: "Streak Keeper",
        description: format!("Contributed {streak} days in a row"),
        icon: "Trophy",
        tier: tier_for(streak, &[(30, Tier::Gold), (14, Tier::Silver)]),
    })
}

fn prolific_builder(inputs: &AchievementInputs<'_>) -> Option<Achievement> {
    let repos = inputs.repo_count;
    (repos >= 20).then(|| Achievement {
        id: "prolific-builder",
        title: "Prolific Builder",
        description: format!("Maintains {repos} original repositories"),
        icon: "Award",
        tier: tier_for(repos, &[(50, Tier::Gold)]),
    })
}

fn community_magnet(inputs: &AchievementInputs<'_>) -> Option<Achievement> {
    let followers = inputs.followers;
    (followers >= 10).then(|| Achievement {
        id: "community-magnet",
        title: "Community Magnet",
        description: format!("Followed by {followers} developers"),
        icon: "Award",
        tier: tier_for(followers, &[(50, Tier::Gold)]),
    })
}

// Volume badge only; the calendar carries no commit timestamps to analyse
fn around_the_clock(inputs: &AchievementInputs<'_>) -> Option<Achievement> {
    let commits = inputs.totals.commits;
    (commits > 1000).then(|| Achievement {
        id: "around-the-clock",
        title: "Around the Clock",
        description: format!("Kept shipping all year with {commits} commits"),
        icon: "Zap",
        tier: Tier::Bronze,
    })
}
