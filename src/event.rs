//! Pull request webhook payloads, reduced to the fields the bot reads.

use crate::error::Result;
use serde::Deserialize;
use std::fmt;

/// Login of the dependency bot whose pull requests are auto-merged
pub const DEPENDABOT_LOGIN: &str = "dependabot[bot]";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub login: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Label {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Head {
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub sha: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub merged: bool,
    #[serde(default)]
    pub merged_by: Option<User>,
    pub head: Head,
}

impl PullRequest {
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|label| label.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub name: String,
    pub owner: User,
}

/// Owner/name pair addressing a repository on the API
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Lifecycle action of a `pull_request` webhook
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PullRequestAction {
    Opened,
    Reopened,
    Closed,
    #[serde(other)]
    Other,
}

/// A `pull_request` webhook delivery
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequestEvent {
    pub action: PullRequestAction,
    pub pull_request: PullRequest,
    pub repository: Repository,
    pub sender: User,
}

impl PullRequestEvent {
    /// Parse a webhook payload
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn repo(&self) -> RepoRef {
        RepoRef {
            owner: self.repository.owner.login.clone(),
            name: self.repository.name.clone(),
        }
    }

    pub fn number(&self) -> u64 {
        self.pull_request.number
    }

    /// True when the dependency bot opened the pull request
    pub fn opened_by_dependabot(&self) -> bool {
        self.sender.login.to_lowercase() == DEPENDABOT_LOGIN
    }

    /// Lowercased login of whoever merged the pull request
    pub fn merged_by_login(&self) -> Option<String> {
        self.pull_request
            .merged_by
            .as_ref()
            .map(|user| user.login.to_lowercase())
    }

    /// Ref of the head branch as addressed by the git refs API
    pub fn head_ref(&self) -> String {
        format!("heads/{}", self.pull_request.head.ref_name)
    }
}
