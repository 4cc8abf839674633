//! Tolerant semantic-version handling for dependency-bot version tokens.
//!
//! Tokens in pull request titles come in many shapes (`4.17.21`, `^5.0.0`,
//! `v2`, `~1.2.3-rc.1`, `3`). These helpers decide whether a token is a
//! usable semantic version and coerce it to canonical `MAJOR.MINOR.PATCH`.

use regex::Regex;
use semver::Version;

/// Range and tag prefixes removed before validation and coercion
const VERSION_PREFIXES: [char; 3] = ['v', '~', '^'];

/// `MAJOR[.MINOR[.PATCH]][-prerelease][+build]`, leading `=` tolerated
const LOOSE_VERSION_PATTERN: &str =
    r"^=?\s*(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:-([0-9A-Za-z.-]+))?(?:\+([0-9A-Za-z.-]+))?$";

/// First run of up to three dot-separated numbers not preceded by a digit
const COERCE_PATTERN: &str = r"(?:^|\D)(\d+)(?:\.(\d+))?(?:\.(\d+))?";

fn strip_prefixes(token: &str) -> &str {
    token.trim().trim_start_matches(VERSION_PREFIXES)
}

/// Dot-separated identifiers with none empty. Numeric ids may carry
/// leading zeros, as in `1.0.0-01`.
fn has_loose_identifiers(part: &str) -> bool {
    part.split('.').all(|id| !id.is_empty())
}

fn is_plain_number(token: &str) -> bool {
    token
        .trim()
        .parse::<f64>()
        .map(|n| n.is_finite())
        .unwrap_or(false)
}

/// Coerces a loosely formatted token into a `MAJOR.MINOR.PATCH` version.
///
/// Missing minor/patch components become `0`; pre-release and build metadata
/// are dropped. Returns `None` when the token holds no number or a component
/// overflows `u64`.
///
/// # Example
/// ```
/// # use dependabot_auto_merger::domain::version::coerce;
/// assert_eq!(coerce("^4.16").unwrap().to_string(), "4.16.0");
/// assert!(coerce("abc").is_none());
/// ```
pub fn coerce(token: &str) -> Option<Version> {
    let cleaned = strip_prefixes(token);
    let captures = Regex::new(COERCE_PATTERN)
        .ok()
        .and_then(|re| re.captures(cleaned))?;

    let component = |index: usize| -> Option<u64> {
        match captures.get(index) {
            Some(m) => m.as_str().parse::<u64>().ok(),
            None => Some(0),
        }
    };

    Some(Version::new(component(1)?, component(2)?, component(3)?))
}

/// Tolerant validity check for a version token.
///
/// Plain numbers (`3`, `4.17`) are valid when they coerce. Anything else is
/// validated loosely after stripping `v`, `~` and `^` prefixes.
pub fn is_valid(token: &str) -> bool {
    if is_plain_number(token) {
        return coerce(token).is_some();
    }

    let cleaned = strip_prefixes(token);
    let Some(captures) = Regex::new(LOOSE_VERSION_PATTERN)
        .ok()
        .and_then(|re| re.captures(cleaned))
    else {
        return false;
    };

    let numbers_fit = (1..=3).all(|i| {
        captures
            .get(i)
            .map_or(true, |m| m.as_str().parse::<u64>().is_ok())
    });
    let extras_ok = (4..=5).all(|i| {
        captures
            .get(i)
            .map_or(true, |m| has_loose_identifiers(m.as_str()))
    });

    numbers_fit && extras_ok
}

/// Canonical `MAJOR.MINOR.PATCH` form of a valid token, `None` otherwise.
pub fn normalize(token: &str) -> Option<String> {
    if !is_valid(token) {
        return None;
    }
    coerce(token).map(|v| v.to_string())
}

/// Normalizes both tokens together, or neither.
///
/// If either token is invalid both are returned unmodified.
pub fn normalize_pair(old: &str, new: &str) -> (String, String) {
    match (normalize(old), normalize(new)) {
        (Some(old), Some(new)) => (old, new),
        _ => (old.to_string(), new.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_full_version() {
        assert_eq!(coerce("1.2.3"), Some(Version::new(1, 2, 3)));
    }

    #[test]
    fn test_coerce_strips_range_prefixes() {
        assert_eq!(coerce("^4.16.0"), Some(Version::new(4, 16, 0)));
        assert_eq!(coerce("~1.2.3"), Some(Version::new(1, 2, 3)));
        assert_eq!(coerce("v2.0.1"), Some(Version::new(2, 0, 1)));
    }

    #[test]
    fn test_coerce_fills_missing_components() {
        assert_eq!(coerce("3"), Some(Version::new(3, 0, 0)));
        assert_eq!(coerce("4.17"), Some(Version::new(4, 17, 0)));
    }

    #[test]
    fn test_coerce_drops_prerelease() {
        assert_eq!(coerce("1.0.0-beta.2+sha.5"), Some(Version::new(1, 0, 0)));
    }

    #[test]
    fn test_coerce_finds_embedded_version() {
        assert_eq!(coerce("release-1.4"), Some(Version::new(1, 4, 0)));
        assert_eq!(coerce("1.2.3.4"), Some(Version::new(1, 2, 3)));
    }

    #[test]
    fn test_coerce_failures() {
        assert_eq!(coerce("abc"), None);
        assert_eq!(coerce(""), None);
        assert_eq!(coerce("99999999999999999999999"), None);
    }

    #[test]
    fn test_is_valid_accepts_loose_forms() {
        assert!(is_valid("1.2.3"));
        assert!(is_valid("4.17"));
        assert!(is_valid("7"));
        assert!(is_valid("v1.2"));
        assert!(is_valid("^5.0.0"));
        assert!(is_valid("~1.2.3-rc.1+build.5"));
        assert!(is_valid("=1.0.0"));
    }

    #[test]
    fn test_is_valid_rejects_garbage() {
        assert!(!is_valid("abc"));
        assert!(!is_valid("xyz"));
        assert!(!is_valid(""));
        assert!(!is_valid("1.2.3.4"));
        assert!(!is_valid("1.x"));
        assert!(!is_valid("1.0.0-"));
        assert!(!is_valid("1.0.0-rc..1"));
        assert!(!is_valid("1.0.0+build."));
    }

    #[test]
    fn test_is_valid_tolerates_leading_zero_prerelease() {
        assert!(is_valid("1.0.0-01"));
        assert!(is_valid("v2.1.0-rc.007"));
        assert_eq!(
            normalize_pair("1.0.0-01", "1.0.0-02"),
            ("1.0.0".to_string(), "1.0.0".to_string())
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        assert_eq!(normalize("1.2.3").as_deref(), Some("1.2.3"));
        let once = normalize("^4.16").unwrap();
        assert_eq!(normalize(&once), Some(once.clone()));
    }

    #[test]
    fn test_normalize_pair_all_or_nothing() {
        assert_eq!(
            normalize_pair("^4.16.0", "^5.0.0"),
            ("4.16.0".to_string(), "5.0.0".to_string())
        );
        assert_eq!(
            normalize_pair("^4.16.0", "latest"),
            ("^4.16.0".to_string(), "latest".to_string())
        );
    }
}
