use crate::domain::version::normalize_pair;
use crate::error::{AutoMergeError, Result};
use regex::Regex;
use std::fmt;

/// `bump|update <package> [requirement] from <old> to <new>`, whole title
const TITLE_PATTERN: &str =
    r"(?i)^\s*(?:bump|update)\s+(\S+)\s+(?:requirement\s+)?from\s+(\S+)\s+to\s+(\S+)\s*$";

/// Dependency upgrade described by a dependency-bot pull request title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeDescriptor {
    pub package_name: String,
    pub old_version: String,
    pub new_version: String,
}

impl UpgradeDescriptor {
    /// Parse a pull request title
    ///
    /// Supports formats:
    /// - Bump lodash from 4.17.10 to 4.17.21
    /// - Update express requirement from ^4.16.0 to ^5.0.0
    /// - bump `serde` from `1.0.1` to `1.0.2`
    ///
    /// Backticks are stripped from every token. Both versions are normalized
    /// to `MAJOR.MINOR.PATCH` when both are valid, otherwise both are kept
    /// as written.
    pub fn parse(title: &str) -> Result<Self> {
        let captures = Regex::new(TITLE_PATTERN)
            .ok()
            .and_then(|re| re.captures(title))
            .ok_or_else(|| AutoMergeError::title_format(title))?;

        let token = |index: usize| -> String {
            captures
                .get(index)
                .map(|m| m.as_str().replace('`', ""))
                .unwrap_or_default()
        };

        let package_name = token(1);
        let old_raw = token(2);
        let new_raw = token(3);

        if package_name.is_empty() || old_raw.is_empty() || new_raw.is_empty() {
            return Err(AutoMergeError::title_format(title));
        }

        let (old_version, new_version) = normalize_pair(&old_raw, &new_raw);

        Ok(UpgradeDescriptor {
            package_name,
            old_version,
            new_version,
        })
    }
}

impl fmt::Display for UpgradeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {}",
            self.package_name, self.old_version, self.new_version
        )
    }
}

/// Parses a pull request title into an [`UpgradeDescriptor`].
///
/// # Errors
/// `TitleFormat` carrying the title when it does not match the grammar.
pub fn parse_title(title: &str) -> Result<UpgradeDescriptor> {
    UpgradeDescriptor::parse(title)
}
