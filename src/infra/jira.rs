use async_trait::async_trait;
use base64::prelude::{BASE64_STANDARD, Engine as _};
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, AUTHORIZATION},
};
use serde::Deserialize;

use crate::config::{TOKEN_KEY, URL_KEY, USER_KEY};
use crate::domain::branch::IssueKey;
use crate::domain::issue::{Issue, IssueStatus};
use crate::error::{AppError, AppResult};
use crate::services::IssueTrackerService;

pub struct JiraClient {
    http: Client,
    base_url: Option<String>,
    user: Option<String>,
    token: Option<String>,
}

impl JiraClient {
    pub fn new(base_url: Option<String>, user: Option<String>, token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url,
            user,
            token,
        }
    }

    // All three credentials must be present before any request goes out; a
    // half-authenticated call could only fail at the server.
    fn api_details(&self) -> AppResult<(&str, &str, &str)> {
        let base_url = self
            .base_url
            .as_deref()
            .ok_or(AppError::MissingCredential(URL_KEY))?;
        let user = self
            .user
            .as_deref()
            .ok_or(AppError::MissingCredential(USER_KEY))?;
        let token = self
            .token
            .as_deref()
            .ok_or(AppError::MissingCredential(TOKEN_KEY))?;
        Ok((base_url, user, token))
    }

    fn auth_header(user: &str, token: &str) -> String {
        let credentials = format!("{user}:{token}");
        let encoded = BASE64_STANDARD.encode(credentials);
        format!("Basic {encoded}")
    }

    fn issue_endpoint(base_url: &str, key: &IssueKey) -> String {
        format!(
            "{}/rest/api/3/issue/{}",
            base_url.trim_end_matches('/'),
            key.as_str()
        )
    }
}

#[async_trait]
impl IssueTrackerService for JiraClient {
    async fn fetch_issue(&self, key: &IssueKey) -> AppResult<Issue> {
        let (base_url, user, token) = self.api_details()?;

        let response = self
            .http
            .get(Self::issue_endpoint(base_url, key))
            .query(&[("fields", "summary,status")])
            .header(AUTHORIZATION, Self::auth_header(user, token))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| AppError::IssueTracker(format!("failed to call Jira: {err}")))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NoSuchIssue(key.as_str().to_string()));
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AppError::IssueTracker(format!(
                "Jira rejected the credentials ({status})"
            )));
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::IssueTracker(format!(
                "Jira responded with {status}: {body}"
            )));
        }

        let payload: JiraIssueResponse = response.json().await.map_err(|err| {
            AppError::IssueTracker(format!("failed to parse Jira response: {err}"))
        })?;

        Ok(payload.into_issue())
    }
}

#[derive(Deserialize)]
struct JiraIssueResponse {
    key: String,
    fields: JiraIssueFields,
}

#[derive(Deserialize)]
struct JiraIssueFields {
    #[serde(default)]
    summary: String,
    status: JiraIssueStatus,
}

#[derive(Deserialize)]
struct JiraIssueStatus {
    name: String,
}

impl JiraIssueResponse {
    fn into_issue(self) -> Issue {
        Issue {
            key: self.key,
            summary: self.fields.summary,
            status: IssueStatus(self.fields.status.name),
        }
    }
}
