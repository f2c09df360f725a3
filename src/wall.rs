use octocrab::Octocrab;
use tracing::Instrument;

use crate::badge::{select, BadgeData};
use crate::config::Configuration;
use crate::workflows::{self, FetchOutcome};

/// What happened during a run, for the operator. The page itself does not
/// tell a failed fetch apart from a repository without workflows.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct WallSummary {
    pub repositories: usize,
    pub badges: usize,
    pub failed: Vec<String>,
}

/// Fetch and select badges for every configured repository, one after the other.
pub(crate) async fn collect(
    config: &Configuration,
    github_api: &Octocrab,
) -> (Vec<BadgeData>, WallSummary) {
    let owner = &config.organization;
    let mut summary = WallSummary::default();
    let mut data = Vec::with_capacity(config.repositories.len());

    for repo in &config.repositories {
        let outcome = workflows::fetch(github_api, owner, &repo.name)
            .instrument(tracing::info_span!("fetch", repo = %repo.name))
            .await;
        if outcome == FetchOutcome::Failed {
            summary.failed.push(repo.name.clone());
        }
        let badges = select(owner, &repo.name, &repo.workflows, outcome.workflows());
        summary.badges += badges.len();
        data.push(BadgeData {
            repo: repo.name.clone(),
            badges,
        });
    }
    summary.repositories = data.len();
    (data, summary)
}
