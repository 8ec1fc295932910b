use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AppError, AppResult};

// Prefix match is case-insensitive; the captured key keeps its case.
static BRANCH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(feature|bugfix|improvement|library|prerelease|release|hotfix)/([A-Za-z0-9-]+?)_([A-Za-z0-9._-]+?)$",
    )
    .expect("branch pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchCategory {
    Feature,
    Bugfix,
    Improvement,
    Library,
    Prerelease,
    Release,
    Hotfix,
}

impl BranchCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BranchCategory::Feature => "feature",
            BranchCategory::Bugfix => "bugfix",
            BranchCategory::Improvement => "improvement",
            BranchCategory::Library => "library",
            BranchCategory::Prerelease => "prerelease",
            BranchCategory::Release => "release",
            BranchCategory::Hotfix => "hotfix",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "feature" => Some(BranchCategory::Feature),
            "bugfix" => Some(BranchCategory::Bugfix),
            "improvement" => Some(BranchCategory::Improvement),
            "library" => Some(BranchCategory::Library),
            "prerelease" => Some(BranchCategory::Prerelease),
            "release" => Some(BranchCategory::Release),
            "hotfix" => Some(BranchCategory::Hotfix),
            _ => None,
        }
    }
}

/// Jira issue key embedded in a branch name, e.g. `PRJ-123`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueKey(pub String);

impl IssueKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A branch name that matched the naming convention.
#[derive(Debug, Clone)]
pub struct ParsedBranch {
    pub category: BranchCategory,
    pub key: IssueKey,
    pub description: String,
}

impl ParsedBranch {
    pub fn parse(name: &str) -> AppResult<Self> {
        let captures = BRANCH_PATTERN
            .captures(name)
            .ok_or_else(|| AppError::BranchFormat(name.to_string()))?;
        let category = BranchCategory::from_str(&captures[1])
            .ok_or_else(|| AppError::BranchFormat(name.to_string()))?;

        Ok(Self {
            category,
            key: IssueKey(captures[2].to_string()),
            description: captures[3].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(name: &str) -> AppResult<ParsedBranch> {
        ParsedBranch::parse(name)
    }

    #[test]
    fn extracts_key_from_well_formed_branch() {
        let branch = parse("feature/PRJ-123_Add_login").unwrap();
        assert_eq!(branch.category, BranchCategory::Feature);
        assert_eq!(branch.key.as_str(), "PRJ-123");
        assert_eq!(branch.description, "Add_login");
    }

    #[test]
    fn accepts_every_allowed_prefix() {
        for prefix in [
            "feature",
            "bugfix",
            "improvement",
            "library",
            "prerelease",
            "release",
            "hotfix",
        ] {
            let branch = parse(&format!("{prefix}/PRJ-1_desc")).unwrap();
            assert_eq!(branch.category.as_str(), prefix);
            assert_eq!(branch.key.as_str(), "PRJ-1");
        }
    }

    #[test]
    fn prefix_match_is_case_insensitive() {
        assert!(parse("Feature/PRJ-123_Desc").is_ok());
        assert!(parse("FEATURE/PRJ-123_Desc").is_ok());
        assert!(parse("HotFix/PRJ-123_Desc").is_ok());
    }

    #[test]
    fn extracted_key_keeps_its_original_case() {
        let branch = parse("feature/pRj-123_Desc").unwrap();
        assert_eq!(branch.key.as_str(), "pRj-123");
    }

    #[test]
    fn rejects_unknown_prefix() {
        // "bug" is not in the convention even though "bugfix" is.
        assert!(matches!(
            parse("bug/PRJ-123_Add_login"),
            Err(AppError::BranchFormat(_))
        ));
    }

    #[test]
    fn rejects_branch_without_underscore_separator() {
        assert!(matches!(
            parse("feature/PRJ-123-Add-login"),
            Err(AppError::BranchFormat(_))
        ));
    }

    #[test]
    fn rejects_key_with_disallowed_characters() {
        assert!(parse("feature/PRJ 123_desc").is_err());
        assert!(parse("feature/PRJ#123_desc").is_err());
    }

    #[test]
    fn rejects_empty_segments_and_missing_parts() {
        assert!(parse("feature/_desc").is_err());
        assert!(parse("feature/PRJ-123_").is_err());
        assert!(parse("feature/PRJ-123").is_err());
        assert!(parse("main").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn rejects_trailing_garbage() {
        assert!(parse("feature/PRJ-123_desc/extra").is_err());
        assert!(parse("feature/PRJ-123_some description").is_err());
    }

    #[test]
    fn first_underscore_splits_key_from_description() {
        let branch = parse("feature/PRJ_123_x").unwrap();
        assert_eq!(branch.key.as_str(), "PRJ");
        assert_eq!(branch.description, "123_x");
    }

    #[test]
    fn mismatch_error_describes_the_expected_format() {
        let error = parse("main").unwrap_err();
        let message = error.to_string();
        assert!(message.contains("<type>/<ISSUE-KEY>_<description>"));
        assert!(message.contains("feature"));
        assert!(message.contains("hotfix"));
    }

    #[test]
    fn parses_branch_category() {
        assert_eq!(
            BranchCategory::from_str("feature"),
            Some(BranchCategory::Feature)
        );
        assert_eq!(
            BranchCategory::from_str("HOTFIX"),
            Some(BranchCategory::Hotfix)
        );
        assert_eq!(BranchCategory::from_str("unknown"), None);
    }
}
