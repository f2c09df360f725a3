use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Which organization and repositories the wall reports on.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub(crate) struct Configuration {
    pub organization: String,
    pub repositories: Vec<RepositoryConfig>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub(crate) struct RepositoryConfig {
    pub name: String,
    /// Exact workflow names to show, or [`ALL_WORKFLOWS`](crate::constants::ALL_WORKFLOWS).
    pub workflows: Vec<String>,
}

impl Configuration {
    pub async fn from_path(path: &Path) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read configuration file {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("malformed configuration file {}", path.display()))?;
        tracing::info!(
            "Loaded configuration for {} ({} repositories)",
            config.organization,
            config.repositories.len()
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::fixtures::CONFIG;

    #[test]
    fn test_default_is_empty() {
        let config = Configuration::default();
        assert_eq!(config.organization, "");
        assert!(config.repositories.is_empty());
    }

    #[tokio::test]
    async fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONFIG.as_bytes()).unwrap();

        let config = Configuration::from_path(file.path()).await.unwrap();
        assert_eq!(config.organization, "acme");
        assert_eq!(
            config.repositories,
            vec![
                RepositoryConfig {
                    name: "widgets".to_owned(),
                    workflows: vec!["CI".to_owned()],
                },
                RepositoryConfig {
                    name: "gadgets".to_owned(),
                    workflows: vec!["all".to_owned()],
                },
                RepositoryConfig {
                    name: "gizmos".to_owned(),
                    workflows: vec![],
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repos.json");
        let err = Configuration::from_path(&path).await.unwrap_err();
        assert!(err.to_string().contains("failed to read configuration file"));
    }

    #[tokio::test]
    async fn test_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"organization": "acme", "repositories": ["#)
            .unwrap();
        let err = Configuration::from_path(file.path()).await.unwrap_err();
        assert!(err.to_string().starts_with("malformed configuration file"));
    }

    #[tokio::test]
    async fn test_missing_field() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"organization": "acme"}"#).unwrap();
        let err = Configuration::from_path(file.path()).await.unwrap_err();
        assert!(format!("{err:#}").contains("missing field `repositories`"));
    }
}
