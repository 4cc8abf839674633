use crate::config::Settings;
use crate::domain::{
    classify_bump, is_allowed, parse_title, BumpLevel, MergePolicy, UpgradeDescriptor,
};
use crate::error::Result;

/// Outcome of classifying one pull request title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub upgrade: UpgradeDescriptor,
    pub bump: BumpLevel,
    pub allowed: bool,
}

/// Classifies dependency-bot titles against a merge policy
#[derive(Debug, Clone)]
pub struct MergeAnalyzer {
    policy: MergePolicy,
}

impl MergeAnalyzer {
    /// Create a new merge analyzer
    pub fn new(policy: MergePolicy) -> Self {
        MergeAnalyzer { policy }
    }

    /// Create an analyzer from repository settings
    ///
    /// Fails with `UnsupportedPolicyValue` when `merge_level` is not
    /// patch, minor or major.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        MergePolicy::parse(&settings.merge_level).map(MergeAnalyzer::new)
    }

    pub fn policy(&self) -> &MergePolicy {
        &self.policy
    }

    /// Parse a title, classify its bump and check it against the policy
    pub fn analyze_title(&self, title: &str) -> Result<Decision> {
        let upgrade = parse_title(title)?;
        let bump = classify_bump(&upgrade.old_version, &upgrade.new_version)?;
        let allowed = is_allowed(bump, &self.policy);

        log::debug!(
            "Classified {} as {} bump (merge level {}): {}",
            upgrade,
            bump,
            self.policy.merge_level,
            if allowed { "allowed" } else { "denied" }
        );

        Ok(Decision {
            upgrade,
            bump,
            allowed,
        })
    }
}
