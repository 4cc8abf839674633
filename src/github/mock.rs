use crate::error::{AutoMergeError, Result};
use crate::event::RepoRef;
use crate::github::{CheckRun, MergeRequest, PullRequestApi};
use std::sync::Mutex;

/// A side-effecting call recorded by [MockPullRequestApi]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Merge {
        repo: RepoRef,
        request: MergeRequest,
    },
    DeleteRef {
        repo: RepoRef,
        reference: String,
    },
    Comment {
        repo: RepoRef,
        issue_number: u64,
        body: String,
    },
}

/// How the mock answers merge calls
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MergeResponse {
    #[default]
    Merged,
    NotMergeable,
    Failure(String),
}

/// Mock API for testing and dry runs without network access
///
/// Read calls are answered from the configured fixtures; merges, ref
/// deletions and comments are recorded instead of performed.
pub struct MockPullRequestApi {
    config: Option<String>,
    app_slug: String,
    check_runs: Vec<CheckRun>,
    merge_response: MergeResponse,
    calls: Mutex<Vec<ApiCall>>,
}

impl MockPullRequestApi {
    /// Create a mock with no config file and no check runs
    pub fn new(app_slug: impl Into<String>) -> Self {
        MockPullRequestApi {
            config: None,
            app_slug: app_slug.into(),
            check_runs: Vec::new(),
            merge_response: MergeResponse::default(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Serve `content` as the repository config file
    pub fn with_config(mut self, content: impl Into<String>) -> Self {
        self.config = Some(content.into());
        self
    }

    pub fn with_check_runs(mut self, runs: Vec<CheckRun>) -> Self {
        self.check_runs = runs;
        self
    }

    pub fn with_merge_response(mut self, response: MergeResponse) -> Self {
        self.merge_response = response;
        self
    }

    /// Calls recorded so far, oldest first
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn record(&self, call: ApiCall) -> Result<()> {
        self.calls
            .lock()
            .map_err(|_| AutoMergeError::api("mock call log poisoned"))?
            .push(call);
        Ok(())
    }
}

impl Default for MockPullRequestApi {
    fn default() -> Self {
        Self::new("dependabot-auto-merger")
    }
}

impl PullRequestApi for MockPullRequestApi {
    fn fetch_config(&self, _repo: &RepoRef, _path: &str) -> Result<Option<String>> {
        Ok(self.config.clone())
    }

    fn authenticated_app_slug(&self) -> Result<String> {
        Ok(self.app_slug.clone())
    }

    fn list_check_runs(&self, _repo: &RepoRef, _head_sha: &str) -> Result<Vec<CheckRun>> {
        Ok(self.check_runs.clone())
    }

    fn merge_pull_request(&self, repo: &RepoRef, request: &MergeRequest) -> Result<()> {
        self.record(ApiCall::Merge {
            repo: repo.clone(),
            request: request.clone(),
        })?;

        match &self.merge_response {
            MergeResponse::Merged => Ok(()),
            MergeResponse::NotMergeable => Err(AutoMergeError::not_mergeable(format!(
                "pull request #{} has conflicts",
                request.pull_number
            ))),
            MergeResponse::Failure(msg) => Err(AutoMergeError::api(msg.clone())),
        }
    }

    fn delete_ref(&self, repo: &RepoRef, reference: &str) -> Result<()> {
        self.record(ApiCall::DeleteRef {
            repo: repo.clone(),
            reference: reference.to_string(),
        })
    }

    fn create_comment(&self, repo: &RepoRef, issue_number: u64, body: &str) -> Result<()> {
        self.record(ApiCall::Comment {
            repo: repo.clone(),
            issue_number,
            body: body.to_string(),
        })
    }
}
