use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(
        "branch '{0}' does not match '<type>/<ISSUE-KEY>_<description>' \
         (type: feature, bugfix, improvement, library, prerelease, release or hotfix)"
    )]
    BranchFormat(String),
    #[error("{0} is not set; set it with 'git config {0} <value>'")]
    MissingCredential(&'static str),
    #[error("No such issue '{0}' in Jira")]
    NoSuchIssue(String),
    #[error("issue tracker error: {0}")]
    IssueTracker(String),
    #[error("issue '{0}' is already resolved; pick an open issue for this branch")]
    AlreadyResolved(String),
    #[error("version control error: {0}")]
    VersionControl(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl AppError {
    /// Exit code reported to the hook wrapper. Anything non-zero blocks the
    /// commit; the codes stay distinct so wrappers and tests can tell the
    /// failure classes apart.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::BranchFormat(_) => 1,
            AppError::MissingCredential(_) => 2,
            AppError::NoSuchIssue(_) | AppError::IssueTracker(_) => 3,
            AppError::AlreadyResolved(_) => 4,
            AppError::VersionControl(_) | AppError::Configuration(_) | AppError::Io(_) => 5,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
