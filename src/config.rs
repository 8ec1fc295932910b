use tracing::error;

use crate::error::AppResult;
use crate::services::VersionControlService;

pub const URL_KEY: &str = "jira.url";
pub const USER_KEY: &str = "jira.user";
pub const TOKEN_KEY: &str = "jira.token";

/// Jira connection settings read from the repository's git configuration.
/// Values stay optional; the tracker client decides whether it can work
/// with what was found.
#[derive(Debug, Clone)]
pub struct JiraConfig {
    pub base_url: Option<String>,
    pub user: Option<String>,
    pub token: Option<String>,
}

impl JiraConfig {
    /// Reads all three keys even when one is missing, so a single run
    /// surfaces every unset key at once.
    pub async fn load(vcs: &dyn VersionControlService) -> AppResult<Self> {
        let base_url = read_key(vcs, URL_KEY, "Jira URL").await?;
        let user = read_key(vcs, USER_KEY, "Jira user").await?;
        let token = read_key(vcs, TOKEN_KEY, "Jira token").await?;

        Ok(Self {
            base_url,
            user,
            token,
        })
    }
}

async fn read_key(
    vcs: &dyn VersionControlService,
    key: &str,
    label: &str,
) -> AppResult<Option<String>> {
    let value = vcs
        .config_get(key)
        .await?
        .map(|value| value.trim_end().to_string())
        .filter(|value| !value.is_empty());

    if value.is_none() {
        error!("{label} is not set; set it with 'git config {key} <value>'");
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use async_trait::async_trait;

    use super::*;
    use crate::error::AppError;

    struct FakeVersionControl {
        config: HashMap<String, String>,
    }

    impl FakeVersionControl {
        fn new(entries: &[(&str, &str)]) -> Self {
            Self {
                config: entries
                    .iter()
                    .map(|(key, value)| (key.to_string(), value.to_string()))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl VersionControlService for FakeVersionControl {
        async fn current_branch(&self) -> AppResult<String> {
            Err(AppError::VersionControl("not needed here".to_string()))
        }

        async fn config_get(&self, key: &str) -> AppResult<Option<String>> {
            Ok(self.config.get(key).cloned())
        }

        async fn repository_dir(&self) -> AppResult<PathBuf> {
            Ok(PathBuf::from(".git"))
        }
    }

    #[tokio::test]
    async fn loads_all_three_keys() {
        let vcs = FakeVersionControl::new(&[
            (URL_KEY, "https://example.atlassian.net"),
            (USER_KEY, "dev@example.com"),
            (TOKEN_KEY, "secret"),
        ]);
        let config = JiraConfig::load(&vcs).await.unwrap();
        assert_eq!(config.base_url.as_deref(), Some("https://example.atlassian.net"));
        assert_eq!(config.user.as_deref(), Some("dev@example.com"));
        assert_eq!(config.token.as_deref(), Some("secret"));
    }

    #[tokio::test]
    async fn missing_key_loads_as_none_without_failing() {
        let vcs = FakeVersionControl::new(&[
            (URL_KEY, "https://example.atlassian.net"),
            (USER_KEY, "dev@example.com"),
        ]);
        let config = JiraConfig::load(&vcs).await.unwrap();
        assert!(config.base_url.is_some());
        assert!(config.user.is_some());
        assert!(config.token.is_none());
    }

    #[tokio::test]
    async fn empty_value_counts_as_missing() {
        let vcs = FakeVersionControl::new(&[(TOKEN_KEY, "")]);
        let config = JiraConfig::load(&vcs).await.unwrap();
        assert!(config.token.is_none());
    }

    #[tokio::test]
    async fn values_are_trimmed_of_trailing_whitespace() {
        let vcs = FakeVersionControl::new(&[(TOKEN_KEY, "secret\n")]);
        let config = JiraConfig::load(&vcs).await.unwrap();
        assert_eq!(config.token.as_deref(), Some("secret"));
    }
}
