use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Write the page to `path`, replacing what was there. Returns the absolute path written.
pub(crate) async fn write(path: &Path, html: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create output directory {}", parent.display()))?;
    }
    tokio::fs::write(path, html)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    let path = std::path::absolute(path)?;
    tracing::info!("Generated badge wall at: {}", path.display());
    Ok(path)
}
