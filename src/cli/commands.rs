use crate::aggregate::Aggregator;
use crate::config::Settings;
use crate::github::{GitHubClient, TokenPool};
use crate::output::{write_dashboard, DashboardData};
use crate::Result;
use tracing::{info, warn};

/// Run the whole build step: validate tokens, aggregate, write the file
pub async fn fetch(settings: &Settings) -> Result<DashboardData> {
    let client = GitHubClient::new(settings.github.clone())?;

    let mut pool = TokenPool::new(&settings.tokens);
    pool.initialize(&client).await;

    if pool.is_empty() {
        warn!("No GitHub tokens configured (TOKENS_POOL); every account fetch will be skipped");
    } else if pool.validated_count() == 0 {
        warn!("No GitHub token passed validation; falling back to unvalidated tokens");
    }

    let aggregator = Aggregator::new(&client, &pool, &settings.aggregate);
    let data = aggregator.run(&settings.accounts).await;

    write_dashboard(&settings.output.path, &data).await?;

    info!(
        "Dashboard built: {} users, {} repos, {} pages, {} contributors, {} achievements",
        data.users.len(),
        data.repos.len(),
        data.pages.len(),
        data.contributors.len(),
        data.achievements.len()
    );

    Ok(data)
}

/// Validate every configured token and print its owner
pub async fn check_tokens(settings: &Settings) -> Result<()> {
    let client = GitHubClient::new(settings.github.clone())?;

    let mut pool = TokenPool::new(&settings.tokens);
    pool.initialize(&client).await;

    if pool.is_empty() {
        println!("No tokens configured. Set TOKENS_POOL to a comma or whitespace separated list.");
        return Ok(());
    }

    println!("GitHub API: {}\n", client.config().api_base_url);
    println!("{:<16} {:<30} {:<12}", "Token", "Owner", "Remaining");
    println!("{}", "-".repeat(60));
    for credential in pool.credentials() {
        let budget = match client.rate_limit_status(credential.token()).await {
            Some((remaining, limit, _)) => format!("{remaining}/{limit}"),
            None => "-".to_string(),
        };
        println!(
            "{:<16} {:<30} {:<12}",
            credential.fingerprint(),
            credential.owner().unwrap_or("(invalid)"),
            budget
        );
    }

    println!(
        "\n{} of {} tokens valid",
        pool.validated_count(),
        pool.len()
    );

    for account in &settings.accounts {
        let owned = pool
            .credentials()
            .iter()
            .any(|c| c.owner().is_some_and(|o| o.eq_ignore_ascii_case(account)));
        if !owned {
            println!("  {account}: no dedicated token, round-robin fallback will be used");
        }
    }

    Ok(())
}
