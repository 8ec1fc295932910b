use std::path::PathBuf;
use std::process::Output;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

pub struct GitCli {
    workspace_root: PathBuf,
}

impl GitCli {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { workspace_root }
    }

    async fn run_git(&self, args: &[&str]) -> AppResult<Output> {
        Command::new("git")
            .args(args)
            .current_dir(&self.workspace_root)
            .output()
            .await
            .map_err(|err| AppError::VersionControl(format!("failed to run git: {err}")))
    }
}

fn stdout_line(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn current_branch(&self) -> AppResult<String> {
        let output = self.run_git(&["rev-parse", "--abbrev-ref", "HEAD"]).await?;
        if !output.status.success() {
            return Err(AppError::VersionControl(stderr_text(&output)));
        }
        Ok(stdout_line(&output))
    }

    async fn config_get(&self, key: &str) -> AppResult<Option<String>> {
        let output = self.run_git(&["config", "--get", key]).await?;
        // Exit code 1 means the key is unset; anything else is a real failure.
        match output.status.code() {
            Some(0) => {
                let value = stdout_line(&output);
                Ok((!value.is_empty()).then_some(value))
            }
            Some(1) => Ok(None),
            _ => Err(AppError::VersionControl(stderr_text(&output))),
        }
    }

    async fn repository_dir(&self) -> AppResult<PathBuf> {
        let output = self.run_git(&["rev-parse", "--git-dir"]).await?;
        if !output.status.success() {
            return Err(AppError::VersionControl(
                "not a git repository".to_string(),
            ));
        }
        let dir = PathBuf::from(stdout_line(&output));
        if dir.is_absolute() {
            Ok(dir)
        } else {
            Ok(self.workspace_root.join(dir))
        }
    }
}
