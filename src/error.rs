use thiserror::Error;

/// Unified error type for auto-merge decisions and the API boundary
#[derive(Error, Debug)]
pub enum AutoMergeError {
    #[error("Unexpected pull request title: '{title}' - expected `bump|update <package> [requirement] from <old-version> to <new-version>`")]
    TitleFormat { title: String },

    #[error("Unparsable version: '{version}'")]
    UnparsableVersion { version: String },

    #[error("Unsupported merge level: '{0}' - expected one of patch, minor, major")]
    UnsupportedPolicyValue(String),

    #[error("Config file version {0} is not supported")]
    UnsupportedConfigVersion(i64),

    #[error("Pull request is not mergeable: {0}")]
    NotMergeable(String),

    #[error("API request failed: {0}")]
    Api(String),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in dependabot-auto-merger
pub type Result<T> = std::result::Result<T, AutoMergeError>;

impl AutoMergeError {
    /// Create a title format error carrying the offending title
    pub fn title_format(title: impl Into<String>) -> Self {
        AutoMergeError::TitleFormat {
            title: title.into(),
        }
    }

    /// Create an unparsable version error
    pub fn unparsable_version(version: impl Into<String>) -> Self {
        AutoMergeError::UnparsableVersion {
            version: version.into(),
        }
    }

    /// Create a not-mergeable error, reported by the merge call on conflicts
    pub fn not_mergeable(msg: impl Into<String>) -> Self {
        AutoMergeError::NotMergeable(msg.into())
    }

    /// Create an API error with context
    pub fn api(msg: impl Into<String>) -> Self {
        AutoMergeError::Api(msg.into())
    }
}
