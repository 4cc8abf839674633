use crate::analyzer::Decision;
use crate::domain::{BumpLevel, MergeLevel};
use crate::error::AutoMergeError;
use std::fmt;

/// Why an event ended without merging or deleting anything.
/// These are expected outcomes that are reported, not faults.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// Pull request was not opened by the dependency bot
    NotDependabot { sender: String },
    /// Pull request lacks the configured dependencies label
    MissingLabel { label: String },
    /// Title does not follow the dependency-bot grammar
    TitleFormat { title: String },
    /// A version could not be coerced for classification
    UnparsableVersion { version: String },
    /// `merge_level` holds a value no policy exists for
    UnsupportedPolicy { value: String },
    /// Bump is more severe than the policy allows
    BumpNotAllowed {
        bump: BumpLevel,
        merge_level: MergeLevel,
    },
    /// Check runs failed or are still running
    ChecksNotPassed { summary: String },
    /// Closed without being merged
    NotMerged,
    /// Merged by someone other than this bot
    NotMergedByBot { merger: String },
    /// `delete_branch` is disabled
    BranchDeletionDisabled,
}

impl SkipReason {
    /// Skip reason for the errors that abandon a single event, `None` for
    /// faults that must propagate.
    pub fn from_error(error: &AutoMergeError) -> Option<Self> {
        match error {
            AutoMergeError::TitleFormat { title } => Some(SkipReason::TitleFormat {
                title: title.clone(),
            }),
            AutoMergeError::UnparsableVersion { version } => Some(SkipReason::UnparsableVersion {
                version: version.clone(),
            }),
            AutoMergeError::UnsupportedPolicyValue(value) => Some(SkipReason::UnsupportedPolicy {
                value: value.clone(),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotDependabot { sender } => {
                write!(f, "PR not opened by dependabot[bot] (sender: {})", sender)
            }
            SkipReason::MissingLabel { label } => {
                write!(f, "PR does not carry the '{}' label", label)
            }
            SkipReason::TitleFormat { title } => {
                write!(f, "Cannot parse PR title '{}'", title)
            }
            SkipReason::UnparsableVersion { version } => {
                write!(f, "Cannot classify unparsable version '{}'", version)
            }
            SkipReason::UnsupportedPolicy { value } => {
                write!(f, "Merge level '{}' is not supported", value)
            }
            SkipReason::BumpNotAllowed { bump, merge_level } => {
                write!(
                    f,
                    "{} bump exceeds the configured merge level '{}'",
                    bump, merge_level
                )
            }
            SkipReason::ChecksNotPassed { summary } => {
                write!(f, "Not merging, {}", summary)
            }
            SkipReason::NotMerged => write!(f, "PR not merged, just closed"),
            SkipReason::NotMergedByBot { merger } => {
                write!(f, "PR merged by '{}', not by the bot, so not deleting", merger)
            }
            SkipReason::BranchDeletionDisabled => {
                write!(f, "Branch deletion is disabled in the config")
            }
        }
    }
}

/// Result of handling an `opened` or `reopened` event
#[derive(Debug, Clone, PartialEq)]
pub enum OpenedOutcome {
    Merged(Decision),
    /// The merge call reported the pull request as not mergeable
    ConflictReported(Decision),
    Skipped(SkipReason),
}

/// Result of handling a `closed` event
#[derive(Debug, Clone, PartialEq)]
pub enum ClosedOutcome {
    BranchDeleted { reference: String },
    Skipped(SkipReason),
}

/// Result of handling any pull request event
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Opened(OpenedOutcome),
    Closed(ClosedOutcome),
    /// Action the bot does not react to
    Ignored,
}

impl fmt::Display for EventOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventOutcome::Opened(OpenedOutcome::Merged(decision)) => write!(
                f,
                "Merged {} ({} bump)",
                decision.upgrade, decision.bump
            ),
            EventOutcome::Opened(OpenedOutcome::ConflictReported(decision)) => write!(
                f,
                "Could not merge {}: pull request is not mergeable",
                decision.upgrade
            ),
            EventOutcome::Opened(OpenedOutcome::Skipped(reason))
            | EventOutcome::Closed(ClosedOutcome::Skipped(reason)) => {
                write!(f, "Skipped: {}", reason)
            }
            EventOutcome::Closed(ClosedOutcome::BranchDeleted { reference }) => {
                write!(f, "Deleted {}", reference)
            }
            EventOutcome::Ignored => write!(f, "Ignored pull request action"),
        }
    }
}
