use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docker_sweep::cli::Cli;
use docker_sweep::config::PurgeConfig;
use docker_sweep::docker::DockerClient;
use docker_sweep::{purge, scheduler};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = PurgeConfig::from_cli(&cli)?;

    info!(
        "will purge docker resources older than {} day(s) at '{}', {} timezone",
        cli.days, cli.schedule, cli.timezone
    );

    let docker = DockerClient::new()?;

    if config.run_now {
        purge::purge(&docker, &config).await?;
    } else {
        scheduler::run(&docker, &config).await?;
    }

    Ok(())
}
