use clap::Parser;
use ghdash::{
    cli::{commands, Cli, Commands},
    config::Settings,
    Result,
};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if it exists
    // Silently ignore if file doesn't exist
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ghdash=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // A missing data file is the failure signal for the build
    if let Err(e) = run(Cli::parse()).await {
        error!("{}", e.log_safe());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut settings = Settings::from_env()?;

    match cli.command {
        Commands::Fetch { output } => {
            if let Some(output) = output {
                settings.output.path = output;
            }
            settings.validate()?;
            commands::fetch(&settings).await?;
        }
        Commands::Tokens => {
            settings.validate()?;
            commands::check_tokens(&settings).await?;
        }
    }

    Ok(())
}
