use crate::error::Result;
use crate::event::PullRequestEvent;
use crate::github::PullRequestApi;
use crate::handler::repository_settings;
use crate::outcome::{ClosedOutcome, SkipReason};

/// Handle a `closed` pull request event
///
/// Deletes the head branch when the pull request was merged by this bot and
/// `delete_branch` is enabled.
pub fn handle_closed<A: PullRequestApi>(
    api: &A,
    event: &PullRequestEvent,
) -> Result<ClosedOutcome> {
    if !event.pull_request.merged {
        return Ok(skip(SkipReason::NotMerged));
    }

    let settings = repository_settings(api, event)?.settings;

    let bot_login = format!("{}[bot]", api.authenticated_app_slug()?).to_lowercase();
    let merger = event.merged_by_login().unwrap_or_default();
    if merger != bot_login {
        return Ok(skip(SkipReason::NotMergedByBot { merger }));
    }

    if !settings.delete_branch {
        return Ok(skip(SkipReason::BranchDeletionDisabled));
    }

    let repo = event.repo();
    let reference = event.head_ref();
    api.delete_ref(&repo, &reference)?;
    log::info!("Deleted {} in {}", reference, repo);

    Ok(ClosedOutcome::BranchDeleted { reference })
}

fn skip(reason: SkipReason) -> ClosedOutcome {
    log::info!("{}", reason);
    ClosedOutcome::Skipped(reason)
}
