//! Source-control API abstraction layer
//!
//! The bot never talks to the network from its decision logic. Everything it
//! needs from the hosting service goes through the [PullRequestApi] trait,
//! so handlers can be driven by a real client or by a test double.
//!
//! # Overview
//!
//! - [PullRequestApi]: operations the event handlers perform
//! - [mock::MockPullRequestApi]: in-memory implementation that records calls,
//!   used by tests and by the CLI dry run
//! - [checks]: folding check-run results into a single verdict
//!
//! # Usage
//!
//! ```rust
//! # use dependabot_auto_merger::github::PullRequestApi;
//! # use dependabot_auto_merger::event::RepoRef;
//! # fn example<A: PullRequestApi>(api: &A, repo: &RepoRef) -> Result<(), Box<dyn std::error::Error>> {
//! api.create_comment(repo, 42, "Auto-merge skipped")?;
//! # Ok(())
//! # }
//! ```

pub mod checks;
pub mod mock;

pub use checks::{summarize_check_runs, CheckRun, CheckSummary};
pub use mock::{ApiCall, MergeResponse, MockPullRequestApi};

use crate::config::MergeStrategy;
use crate::error::Result;
use crate::event::RepoRef;

/// Parameters of a merge call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    pub pull_number: u64,
    pub commit_title: String,
    pub commit_message: String,
    pub merge_method: MergeStrategy,
}

/// Source-control operations used by the event handlers
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` so one client can serve
/// concurrent webhook deliveries.
///
/// ## Error Handling
///
/// Implementations map transport and HTTP failures to
/// [crate::error::AutoMergeError::Api]. A merge rejected because the pull
/// request cannot be merged (conflicts, HTTP 405) must be reported as
/// [crate::error::AutoMergeError::NotMergeable] so handlers can tell it
/// apart from a fault.
pub trait PullRequestApi: Send + Sync {
    /// Fetch a file from the repository's default branch
    ///
    /// # Returns
    /// * `Ok(Some(content))` - The file content
    /// * `Ok(None)` - If the file does not exist
    /// * `Err` - On any other failure
    fn fetch_config(&self, repo: &RepoRef, path: &str) -> Result<Option<String>>;

    /// Slug of the app the client is authenticated as
    ///
    /// The merging account of the bot is `<slug>[bot]`.
    fn authenticated_app_slug(&self) -> Result<String>;

    /// List the check runs reported for a commit
    fn list_check_runs(&self, repo: &RepoRef, head_sha: &str) -> Result<Vec<CheckRun>>;

    /// Merge a pull request
    ///
    /// # Returns
    /// * `Ok(())` - The pull request was merged
    /// * `Err(NotMergeable)` - The pull request cannot be merged
    /// * `Err` - Any other failure
    fn merge_pull_request(&self, repo: &RepoRef, request: &MergeRequest) -> Result<()>;

    /// Delete a git reference such as `heads/<branch>`
    fn delete_ref(&self, repo: &RepoRef, reference: &str) -> Result<()>;

    /// Post a comment on an issue or pull request
    fn create_comment(&self, repo: &RepoRef, issue_number: u64, body: &str) -> Result<()>;
}
