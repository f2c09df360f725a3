use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use secrecy::SecretString;

use crate::constants::TOKEN_CREDENTIAL;
use crate::utils::get_credential;

/// Render a static page with the GitHub Actions badges of an organization’s repositories
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Repositories and workflows to show (JSON)
    #[arg(long, env = "STATUS_WALL_CONFIG", default_value = "config/repos.json")]
    pub(crate) config: PathBuf,
    /// Where to write the page
    #[arg(long, env = "STATUS_WALL_OUTPUT", default_value = "public/index.html")]
    pub(crate) output: PathBuf,
    /// GitHub API token
    #[arg(long, env, hide_env_values = true)]
    pub(crate) github_token: Option<String>,
    /// GitHub API base URI, for GitHub Enterprise
    #[arg(long, env = "GITHUB_API_URL")]
    pub(crate) api_base: Option<String>,
    /// Show debug logs
    #[arg(long, short)]
    pub(crate) verbose: bool,
}

impl Cli {
    /// If the token has not been passed via CLI or env, get it as a credential.
    pub(crate) fn token(&mut self) -> Result<SecretString> {
        self.github_token
            .take()
            .map(SecretString::new)
            .ok_or(())
            .or_else(|()| get_credential(TOKEN_CREDENTIAL))
            .context("GITHUB_TOKEN environment variable is required")
    }
}
