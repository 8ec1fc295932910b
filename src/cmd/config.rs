use crate::config::{JiraConfig, TOKEN_KEY, URL_KEY, USER_KEY};
use crate::error::AppResult;
use crate::services::VersionControlService;

/// Shows which Jira keys are configured, with the token masked.
pub async fn run(vcs: &dyn VersionControlService) -> AppResult<()> {
    let cfg = JiraConfig::load(vcs).await?;

    println!("{URL_KEY}: {}", display_value(&cfg.base_url));
    println!("{USER_KEY}: {}", display_value(&cfg.user));
    println!("{TOKEN_KEY}: {}", mask_secret(&cfg.token));

    Ok(())
}

fn display_value(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .unwrap_or_else(|| "<not set>".to_string())
}

fn mask_secret(value: &Option<String>) -> String {
    match value {
        Some(token) if token.len() > 6 => {
            let prefix = &token[..3];
            let suffix = &token[token.len() - 3..];
            format!("{prefix}***{suffix}")
        }
        Some(token) if !token.is_empty() => "***".to_string(),
        _ => "<not set>".to_string(),
    }
}
