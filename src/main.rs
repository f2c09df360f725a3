#![warn(clippy::pedantic)]

use anyhow::Result;
use clap::Parser;

mod badge;
mod cli;
mod config;
mod constants;
#[cfg(test)]
mod fixtures;
mod render;
mod utils;
mod wall;
mod workflows;
mod writer;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // a missing .env file is fine, the token may come from the environment
    dotenvy::dotenv().ok();

    let mut cli = cli::Cli::parse();
    cli::init_tracing(cli.verbose);

    let github_api = cli::github_api(&cli.token()?, cli.api_base.as_deref())?;
    let config = config::Configuration::from_path(&cli.config).await?;

    let (badge_data, summary) = wall::collect(&config, &github_api).await;
    let html = render::render(&badge_data, &chrono::Local::now())?;
    writer::write(&cli.output, &html).await?;

    tracing::info!(
        "{} badges for {} repositories",
        summary.badges,
        summary.repositories
    );
    if !summary.failed.is_empty() {
        tracing::warn!(
            "Could not fetch workflows for: {}",
            summary.failed.join(", ")
        );
    }
    Ok(())
}
