use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::AppResult;

/// Seam over the host version-control tool so the pipeline can run against
/// an in-memory fake in tests instead of spawning `git`.
#[async_trait]
pub trait VersionControlService: Send + Sync {
    /// Name of the currently checked-out branch.
    async fn current_branch(&self) -> AppResult<String>;

    /// Value of a local configuration key. `None` when the key is unset or
    /// empty.
    async fn config_get(&self, key: &str) -> AppResult<Option<String>>;

    /// Path to the repository's metadata directory (`.git`).
    async fn repository_dir(&self) -> AppResult<PathBuf>;
}
