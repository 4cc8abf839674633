//! Pull request event handling
//!
//! Drives the classification engine and the [PullRequestApi] for one webhook
//! delivery:
//! - `opened`/`reopened`: classify the dependency bump and merge when the
//!   policy allows it
//! - `closed`: delete the head branch of pull requests this bot merged

pub mod closed;
pub mod opened;

pub use closed::handle_closed;
pub use opened::handle_opened;

use crate::config::{self, ResolvedSettings, INVALID_CONFIG_MESSAGE};
use crate::error::Result;
use crate::event::{PullRequestAction, PullRequestEvent};
use crate::github::PullRequestApi;
use crate::outcome::EventOutcome;

/// Dispatch a webhook delivery to the handler for its action
pub fn handle_event<A: PullRequestApi>(api: &A, event: &PullRequestEvent) -> Result<EventOutcome> {
    match event.action {
        PullRequestAction::Opened | PullRequestAction::Reopened => {
            handle_opened(api, event).map(EventOutcome::Opened)
        }
        PullRequestAction::Closed => handle_closed(api, event).map(EventOutcome::Closed),
        PullRequestAction::Other => {
            log::debug!("Ignoring pull request action for #{}", event.number());
            Ok(EventOutcome::Ignored)
        }
    }
}

/// Fetch and resolve the repository settings for an event.
///
/// An unusable config file is reported on the pull request and the defaults
/// are returned in its place.
fn repository_settings<A: PullRequestApi>(
    api: &A,
    event: &PullRequestEvent,
) -> Result<ResolvedSettings> {
    let repo = event.repo();
    let content = api.fetch_config(&repo, &config::repository_config_path())?;
    let resolved = config::resolve_settings(content.as_deref());

    if let Some(problem) = &resolved.problem {
        log::error!("Invalid config in {}: {}", repo, problem);
        if let Err(e) = api.create_comment(&repo, event.number(), INVALID_CONFIG_MESSAGE) {
            log::error!("Failed to report invalid config on #{}: {}", event.number(), e);
        }
    }

    Ok(resolved)
}
