use futures::TryStreamExt;
use octocrab::{models::workflows::WorkFlow, Octocrab};

/// The part of a GitHub workflow the wall cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WorkflowInfo {
    pub name: String,
    /// Slash separated, ending in the workflow file name, e.g. `.github/workflows/ci.yml`.
    pub path: String,
}

impl From<WorkFlow> for WorkflowInfo {
    fn from(workflow: WorkFlow) -> Self {
        Self {
            name: workflow.name,
            path: workflow.path,
        }
    }
}

/// Result of fetching one repository's workflows.
///
/// A failed fetch renders like a repository without workflows; the distinction
/// only surfaces in the run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FetchOutcome {
    Fetched(Vec<WorkflowInfo>),
    Failed,
}

impl FetchOutcome {
    pub fn workflows(&self) -> &[WorkflowInfo] {
        match self {
            FetchOutcome::Fetched(workflows) => workflows,
            FetchOutcome::Failed => &[],
        }
    }
}

/// List all workflows of `owner/repo`. Errors are logged and turned into [`FetchOutcome::Failed`].
pub(crate) async fn fetch(github_api: &Octocrab, owner: &str, repo: &str) -> FetchOutcome {
    match list(github_api, owner, repo).await {
        Ok(workflows) => {
            for workflow in &workflows {
                tracing::debug!("Found workflow: {} ({})", workflow.name, workflow.path);
            }
            FetchOutcome::Fetched(workflows)
        }
        Err(error) => {
            tracing::error!("Error fetching workflows for {owner}/{repo}: {error}");
            FetchOutcome::Failed
        }
    }
}

async fn list(github_api: &Octocrab, owner: &str, repo: &str) -> octocrab::Result<Vec<WorkflowInfo>> {
    tracing::info!("Fetching workflows for {owner}/{repo}");
    github_api
        .workflows(owner, repo)
        .list()
        .per_page(100)
        .send()
        .await?
        .into_stream(github_api)
        .map_ok(WorkflowInfo::from)
        .try_collect()
        .await
}
