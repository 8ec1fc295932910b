use tracing::debug;

use crate::context::AppContext;
use crate::domain::branch::ParsedBranch;
use crate::domain::issue::Issue;
use crate::error::{AppError, AppResult};

#[derive(Debug)]
pub struct CheckOutcome {
    pub branch: ParsedBranch,
    pub issue: Issue,
}

/// Resolver → matcher → tracker → status policy. Every failure is terminal;
/// a branch that fails the grammar never reaches the tracker.
pub async fn verify_branch_issue(
    ctx: &AppContext,
    branch_override: Option<String>,
) -> AppResult<CheckOutcome> {
    let branch_name = match branch_override {
        Some(name) => name,
        None => ctx.version_control.current_branch().await?,
    };
    debug!("current branch: {branch_name}");

    let branch = ParsedBranch::parse(&branch_name)?;
    debug!(
        "branch category '{}', issue key '{}', description '{}'",
        branch.category.as_str(),
        branch.key.as_str(),
        branch.description
    );

    let issue = ctx.issue_tracker.fetch_issue(&branch.key).await?;
    debug!(
        "found issue '{}' in Jira: ({}) status: {}",
        issue.key,
        issue.summary,
        issue.status.as_str()
    );

    if issue.status.is_done() {
        return Err(AppError::AlreadyResolved(issue.key));
    }

    Ok(CheckOutcome { branch, issue })
}
