use std::fmt;

/// Conclusions that do not block a merge
const PASSING_CONCLUSIONS: [&str; 3] = ["success", "neutral", "skipped"];

/// A check run reported for a commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRun {
    pub name: String,
    /// `queued`, `in_progress` or `completed`
    pub status: String,
    /// Set once the run is completed
    pub conclusion: Option<String>,
}

impl CheckRun {
    pub fn completed(name: impl Into<String>, conclusion: impl Into<String>) -> Self {
        CheckRun {
            name: name.into(),
            status: "completed".to_string(),
            conclusion: Some(conclusion.into()),
        }
    }

    pub fn in_progress(name: impl Into<String>) -> Self {
        CheckRun {
            name: name.into(),
            status: "in_progress".to_string(),
            conclusion: None,
        }
    }

    fn is_completed(&self) -> bool {
        self.status == "completed"
    }

    fn is_passing(&self) -> bool {
        self.conclusion
            .as_deref()
            .is_some_and(|c| PASSING_CONCLUSIONS.contains(&c))
    }
}

/// Combined verdict over all check runs of a commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckSummary {
    Passed,
    Pending { names: Vec<String> },
    Failed { names: Vec<String> },
}

impl CheckSummary {
    pub fn is_passed(&self) -> bool {
        matches!(self, CheckSummary::Passed)
    }
}

impl fmt::Display for CheckSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckSummary::Passed => write!(f, "all check runs passed"),
            CheckSummary::Pending { names } => {
                write!(f, "check runs still running: {}", names.join(", "))
            }
            CheckSummary::Failed { names } => {
                write!(f, "check runs failed: {}", names.join(", "))
            }
        }
    }
}

/// Fold check runs into a single verdict.
///
/// Failures take precedence over pending runs. A commit without check runs
/// counts as passed.
pub fn summarize_check_runs(runs: &[CheckRun]) -> CheckSummary {
    let failed: Vec<String> = runs
        .iter()
        .filter(|run| run.is_completed() && !run.is_passing())
        .map(|run| run.name.clone())
        .collect();
    if !failed.is_empty() {
        return CheckSummary::Failed { names: failed };
    }

    let pending: Vec<String> = runs
        .iter()
        .filter(|run| !run.is_completed())
        .map(|run| run.name.clone())
        .collect();
    if !pending.is_empty() {
        return CheckSummary::Pending { names: pending };
    }

    CheckSummary::Passed
}
