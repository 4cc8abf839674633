//! Pure formatting functions for CLI output.
//!
//! `format_*` functions build plain strings and are unit tested; `display_*`
//! functions add styling and print.

use console::style;

use crate::analyzer::Decision;
use crate::github::ApiCall;
use crate::outcome::{ClosedOutcome, EventOutcome, OpenedOutcome, SkipReason};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Lines describing a classification decision.
pub fn format_decision(decision: &Decision) -> Vec<String> {
    vec![
        format!("Package:     {}", decision.upgrade.package_name),
        format!("Old version: {}", decision.upgrade.old_version),
        format!("New version: {}", decision.upgrade.new_version),
        format!("Bump level:  {}", decision.bump),
        format!(
            "Decision:    {}",
            if decision.allowed { "allow" } else { "deny" }
        ),
    ]
}

/// Display a classification decision, highlighting allow/deny.
pub fn display_decision(decision: &Decision) {
    println!("\n{}", style("Upgrade classification:").bold());
    for line in format_decision(decision) {
        println!("  {}", line);
    }
    if decision.allowed {
        display_success("Auto-merge allowed");
    } else {
        display_status("Auto-merge denied by merge level");
    }
}

/// Display why an event was skipped.
pub fn display_skip(reason: &SkipReason) {
    eprintln!("{} {}", style("⚠ SKIPPED:").yellow(), reason);
}

/// One line describing an API call the bot made or would make.
pub fn format_api_call(call: &ApiCall) -> String {
    match call {
        ApiCall::Merge { repo, request } => format!(
            "merge {}#{} via {} with title \"{}\"",
            repo, request.pull_number, request.merge_method, request.commit_title
        ),
        ApiCall::DeleteRef { repo, reference } => format!("delete {} in {}", reference, repo),
        ApiCall::Comment {
            repo, issue_number, ..
        } => format!("comment on {}#{}", repo, issue_number),
    }
}

/// Display the outcome of a replayed event and the calls it produced.
pub fn display_event_outcome(outcome: &EventOutcome, calls: &[ApiCall]) {
    match outcome {
        EventOutcome::Opened(OpenedOutcome::Skipped(reason))
        | EventOutcome::Closed(ClosedOutcome::Skipped(reason)) => {
            display_skip(reason)
        }
        other => display_success(&other.to_string()),
    }

    if calls.is_empty() {
        display_status("No API calls would be made");
        return;
    }

    println!("\n{}", style("API calls (dry run):").bold());
    for (i, call) in calls.iter().enumerate() {
        println!("  {}. {}", i + 1, format_api_call(call));
    }
}
