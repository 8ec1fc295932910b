use async_trait::async_trait;

use crate::domain::branch::IssueKey;
use crate::domain::issue::Issue;
use crate::error::AppResult;

#[async_trait]
pub trait IssueTrackerService: Send + Sync {
    async fn fetch_issue(&self, key: &IssueKey) -> AppResult<Issue>;
}
