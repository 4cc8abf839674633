use crate::domain::version::coerce;
use crate::error::{AutoMergeError, Result};
use std::fmt;

/// Severity of a version change, ordered `None < Patch < Minor < Major`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BumpLevel {
    None,
    Patch,
    Minor,
    Major,
}

impl BumpLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpLevel::None => "none",
            BumpLevel::Patch => "patch",
            BumpLevel::Minor => "minor",
            BumpLevel::Major => "major",
        }
    }
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies the change from `old_version` to `new_version`.
///
/// Identical raw strings are `None`. Otherwise both sides are coerced and
/// compared component-wise:
/// - **Major**: major components differ
/// - **Minor**: same major, minor components differ
/// - **Patch**: same major and minor
///
/// # Errors
/// `UnparsableVersion` when either side cannot be coerced. No level is
/// guessed for malformed input.
///
/// # Example
/// ```
/// # use dependabot_auto_merger::domain::{classify_bump, BumpLevel};
/// assert_eq!(classify_bump("1.2.3", "1.3.0").unwrap(), BumpLevel::Minor);
/// assert!(classify_bump("abc", "xyz").is_err());
/// ```
pub fn classify_bump(old_version: &str, new_version: &str) -> Result<BumpLevel> {
    if old_version == new_version {
        return Ok(BumpLevel::None);
    }

    let old =
        coerce(old_version).ok_or_else(|| AutoMergeError::unparsable_version(old_version))?;
    let new =
        coerce(new_version).ok_or_else(|| AutoMergeError::unparsable_version(new_version))?;

    let level = if old.major != new.major {
        BumpLevel::Major
    } else if old.minor != new.minor {
        BumpLevel::Minor
    } else {
        BumpLevel::Patch
    };
    Ok(level)
}
