/// Status name that marks an issue as resolved. Compared case-insensitively;
/// any other status, including custom workflow states, counts as open.
pub const RESOLVED_STATUS: &str = "done";

#[derive(Debug, Clone)]
pub struct Issue {
    pub key: String,
    pub summary: String,
    pub status: IssueStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueStatus(pub String);

impl IssueStatus {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_done(&self) -> bool {
        self.0.eq_ignore_ascii_case(RESOLVED_STATUS)
    }
}
