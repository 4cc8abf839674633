use crate::domain::BumpLevel;
use crate::error::{AutoMergeError, Result};
use std::fmt;
use std::str::FromStr;

/// Highest bump severity a policy lets through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeLevel {
    Patch,
    Minor,
    Major,
}

impl MergeLevel {
    /// The bump level this merge level caps at
    pub fn ceiling(&self) -> BumpLevel {
        match self {
            MergeLevel::Patch => BumpLevel::Patch,
            MergeLevel::Minor => BumpLevel::Minor,
            MergeLevel::Major => BumpLevel::Major,
        }
    }
}

impl Default for MergeLevel {
    fn default() -> Self {
        MergeLevel::Minor
    }
}

impl fmt::Display for MergeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.ceiling(), f)
    }
}

impl FromStr for MergeLevel {
    type Err = AutoMergeError;

    /// Recognizes `patch`, `minor` and `major` (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "patch" => Ok(MergeLevel::Patch),
            "minor" => Ok(MergeLevel::Minor),
            "major" => Ok(MergeLevel::Major),
            _ => Err(AutoMergeError::UnsupportedPolicyValue(s.to_string())),
        }
    }
}

/// Auto-merge policy derived from the repository settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergePolicy {
    pub merge_level: MergeLevel,
}

impl MergePolicy {
    pub fn new(merge_level: MergeLevel) -> Self {
        MergePolicy { merge_level }
    }

    /// Builds a policy from the raw `merge_level` setting.
    ///
    /// # Errors
    /// `UnsupportedPolicyValue` for anything but patch/minor/major. Callers
    /// treat that as a denial of every bump.
    pub fn parse(merge_level: &str) -> Result<Self> {
        merge_level.parse().map(MergePolicy::new)
    }
}

/// Whether a bump of `level` may be auto-merged under `policy`.
///
/// - `major` allows major, minor and patch
/// - `minor` allows minor and patch
/// - `patch` allows patch
///
/// `None` is always allowed.
pub fn is_allowed(level: BumpLevel, policy: &MergePolicy) -> bool {
    level <= policy.merge_level.ceiling()
}
