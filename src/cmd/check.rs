use crate::context::AppContext;
use crate::error::AppResult;
use crate::workflow::check::{CheckOutcome, verify_branch_issue};

#[derive(Debug, Clone, Default)]
pub struct CheckCommandArgs {
    pub branch: Option<String>,
}

pub async fn run(ctx: &AppContext, args: CheckCommandArgs) -> AppResult<CheckOutcome> {
    verify_branch_issue(ctx, args.branch).await
}
