use crate::analyzer::MergeAnalyzer;
use crate::error::{AutoMergeError, Result};
use crate::event::PullRequestEvent;
use crate::github::{summarize_check_runs, MergeRequest, PullRequestApi};
use crate::handler::repository_settings;
use crate::outcome::{OpenedOutcome, SkipReason};

/// Handle an `opened` or `reopened` pull request event
///
/// Merges the pull request when:
/// 1. dependabot[bot] opened it and it carries the dependencies label
/// 2. its title parses and the bump classifies
/// 3. the bump is within the configured merge level
/// 4. check runs passed, unless `skip_check_runs` is set
///
/// A merge rejected as not mergeable ends in `ConflictReported`; any other
/// API failure is returned as an error.
pub fn handle_opened<A: PullRequestApi>(
    api: &A,
    event: &PullRequestEvent,
) -> Result<OpenedOutcome> {
    let repo = event.repo();
    let settings = repository_settings(api, event)?.settings;

    if !event.opened_by_dependabot() {
        return Ok(skip(SkipReason::NotDependabot {
            sender: event.sender.login.clone(),
        }));
    }
    if !event.pull_request.has_label(&settings.dependencies_label) {
        return Ok(skip(SkipReason::MissingLabel {
            label: settings.dependencies_label.clone(),
        }));
    }

    let analyzer = match MergeAnalyzer::from_settings(&settings) {
        Ok(analyzer) => analyzer,
        Err(e) => return skip_or_fail(e),
    };
    let decision = match analyzer.analyze_title(&event.pull_request.title) {
        Ok(decision) => decision,
        Err(e) => return skip_or_fail(e),
    };

    if !decision.allowed {
        return Ok(skip(SkipReason::BumpNotAllowed {
            bump: decision.bump,
            merge_level: analyzer.policy().merge_level,
        }));
    }

    if !settings.skip_check_runs {
        let runs = api.list_check_runs(&repo, &event.pull_request.head.sha)?;
        let summary = summarize_check_runs(&runs);
        if !summary.is_passed() {
            return Ok(skip(SkipReason::ChecksNotPassed {
                summary: summary.to_string(),
            }));
        }
    }

    let request = MergeRequest {
        pull_number: event.number(),
        commit_title: settings.merge_commit_title(),
        commit_message: settings.commit_message.clone(),
        merge_method: settings.merge_strategy,
    };

    match api.merge_pull_request(&repo, &request) {
        Ok(()) => {
            log::info!(
                "Merged #{} in {} ({}, {} bump)",
                event.number(),
                repo,
                decision.upgrade,
                decision.bump
            );
            Ok(OpenedOutcome::Merged(decision))
        }
        Err(AutoMergeError::NotMergeable(msg)) => {
            log::info!("#{} in {} is not mergeable: {}", event.number(), repo, msg);
            Ok(OpenedOutcome::ConflictReported(decision))
        }
        Err(e) => Err(e),
    }
}

fn skip(reason: SkipReason) -> OpenedOutcome {
    log::info!("{}", reason);
    OpenedOutcome::Skipped(reason)
}

fn skip_or_fail(error: AutoMergeError) -> Result<OpenedOutcome> {
    match SkipReason::from_error(&error) {
        Some(reason) => {
            log::warn!("Auto-merge abandoned: {}", error);
            Ok(OpenedOutcome::Skipped(reason))
        }
        None => Err(error),
    }
}
