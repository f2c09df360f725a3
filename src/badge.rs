use crate::constants::{ALL_WORKFLOWS, BADGE_SUFFIX, PLATFORM_URL};
use crate::workflows::WorkflowInfo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Badge {
    /// Status image
    pub url: String,
    /// Workflow page the image links to
    pub link: String,
    pub name: String,
}

/// Badges of one repository, in the order the repository is configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BadgeData {
    pub repo: String,
    pub badges: Vec<Badge>,
}

impl Badge {
    pub fn new(owner: &str, repo: &str, workflow: &WorkflowInfo) -> Self {
        // empty for an empty path, which leaves a `//badge.svg` URL
        let file = workflow.path.rsplit('/').next().unwrap_or_default();
        let link = format!("{PLATFORM_URL}/{owner}/{repo}/actions/workflows/{file}");
        Self {
            url: format!("{link}{BADGE_SUFFIX}"),
            link,
            name: workflow.name.clone(),
        }
    }
}

/// Keep the workflows named in `whitelist` (or all of them) and turn them into badges.
pub(crate) fn select(
    owner: &str,
    repo: &str,
    whitelist: &[String],
    workflows: &[WorkflowInfo],
) -> Vec<Badge> {
    let all = whitelist.iter().any(|w| w == ALL_WORKFLOWS);
    workflows
        .iter()
        .filter(|workflow| all || whitelist.contains(&workflow.name))
        .map(|workflow| Badge::new(owner, repo, workflow))
        .collect()
}
