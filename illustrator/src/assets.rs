//! Static asset store seam: persist generated or copied images to a
//! retrievable location and hand back the servable URL.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::info;

/// Where generated vectors and copied reference images land.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Writes text contents under `name`, returns the retrievable locator.
    async fn save(&self, name: &str, contents: &str) -> Result<String>;

    /// Copies an existing file under `name`, returns the retrievable locator.
    async fn copy(&self, source: &Path, name: &str) -> Result<String>;
}

/// Filesystem-backed store serving files under a URL prefix.
#[derive(Debug, Clone)]
pub struct FsAssetStore {
    dir: PathBuf,
    url_prefix: String,
}

impl FsAssetStore {
    pub fn new(dir: PathBuf, url_prefix: impl Into<String>) -> Self {
        Self {
            dir,
            url_prefix: url_prefix.into(),
        }
    }

    fn locator(&self, name: &str) -> String {
        format!("{}/{}", self.url_prefix, name)
    }
}

#[async_trait]
impl AssetStore for FsAssetStore {
    async fn save(&self, name: &str, contents: &str) -> Result<String> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .context("Failed to create asset directory")?;
        let path = self.dir.join(name);
        tokio::fs::write(&path, contents)
            .await
            .with_context(|| format!("Failed to write asset {}", path.display()))?;
        info!(path = %path.display(), "saved asset");
        Ok(self.locator(name))
    }

    async fn copy(&self, source: &Path, name: &str) -> Result<String> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .context("Failed to create asset directory")?;
        let dest = self.dir.join(name);
        tokio::fs::copy(source, &dest)
            .await
            .with_context(|| format!("Failed to copy {} to {}", source.display(), dest.display()))?;
        info!(source = %source.display(), dest = %dest.display(), "copied asset");
        Ok(self.locator(name))
    }
}
