use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

const HOOK_NAME: &str = "pre-commit";

#[derive(Debug, Clone, Default)]
pub struct InstallCommandArgs {
    pub force: bool,
}

/// Writes a shim into the repository's hooks directory that runs
/// `jig check` before every commit.
pub async fn run(
    vcs: &dyn VersionControlService,
    args: InstallCommandArgs,
) -> AppResult<PathBuf> {
    let hooks_dir = vcs.repository_dir().await?.join("hooks");
    let hook_path = hooks_dir.join(HOOK_NAME);

    if hook_path.exists() && !args.force {
        return Err(AppError::Configuration(format!(
            "a {HOOK_NAME} hook already exists at {}; rerun with --force to overwrite it",
            hook_path.display()
        )));
    }

    let executable = std::env::current_exe()?;
    let script = format!(
        "#!/bin/sh\nexec \"{}\" check \"$@\"\n",
        executable.display()
    );

    fs::create_dir_all(&hooks_dir)?;
    fs::write(&hook_path, script)?;
    make_executable(&hook_path)?;

    Ok(hook_path)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> AppResult<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(path, permissions)?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> AppResult<()> {
    Ok(())
}
