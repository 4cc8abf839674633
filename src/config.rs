use crate::error::{AutoMergeError, Result};
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file name used when `CONFIG_FILENAME` is not set
pub const DEFAULT_CONFIG_FILENAME: &str = "dependabot-auto-merger.yml";

/// Environment variable overriding the config file name
pub const CONFIG_FILENAME_ENV: &str = "CONFIG_FILENAME";

/// Only supported value of the top-level `version` key
pub const SUPPORTED_CONFIG_VERSION: i64 = 1;

/// Comment posted on a pull request when the repository config is unusable
pub const INVALID_CONFIG_MESSAGE: &str = "Config file is invalid!
Take a look at the example config file [here](https://github.com/divideprojects/dependabot-auto-merger#config-file) to see how to create a valid config file.";

/// Git merge method used for the auto-merge commit
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    Merge,
    #[default]
    Squash,
    Rebase,
}

impl MergeStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MergeStrategy::Merge => "merge",
            MergeStrategy::Squash => "squash",
            MergeStrategy::Rebase => "rebase",
        }
    }
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the default label dependabot puts on its pull requests.
fn default_dependencies_label() -> String {
    "dependencies".to_string()
}

/// Returns the default merge level.
fn default_merge_level() -> String {
    "minor".to_string()
}

fn default_true() -> bool {
    true
}

/// Returns the default merge commit title.
fn default_commit_title() -> String {
    "Auto-merge dependabot PR".to_string()
}

/// Returns the default merge commit message.
fn default_commit_message() -> String {
    "Auto-merge dependabot PR by @dependabot-auto-merge".to_string()
}

fn default_version() -> i64 {
    SUPPORTED_CONFIG_VERSION
}

/// Auto-merge settings of a repository.
///
/// Every key is optional; missing keys take the documented defaults.
/// `merge_level` stays a string here so that an unsupported value can be
/// rejected when the merge policy is built.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_dependencies_label")]
    pub dependencies_label: String,

    #[serde(default = "default_merge_level")]
    pub merge_level: String,

    #[serde(default)]
    pub merge_strategy: MergeStrategy,

    #[serde(default)]
    pub skip_ci: bool,

    #[serde(default = "default_true")]
    pub delete_branch: bool,

    #[serde(default = "default_commit_title")]
    pub commit_title: String,

    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    #[serde(default)]
    pub skip_check_runs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            dependencies_label: default_dependencies_label(),
            merge_level: default_merge_level(),
            merge_strategy: MergeStrategy::default(),
            skip_ci: false,
            delete_branch: true,
            commit_title: default_commit_title(),
            commit_message: default_commit_message(),
            skip_check_runs: false,
        }
    }
}

impl Settings {
    /// Title of the merge commit, prefixed with `[skip ci]` when `skip_ci` is set.
    pub fn merge_commit_title(&self) -> String {
        if self.skip_ci {
            format!("[skip ci] {}", self.commit_title)
        } else {
            self.commit_title.clone()
        }
    }
}

/// On-disk shape of the config document
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ConfigFile {
    #[serde(default = "default_version")]
    pub version: i64,

    #[serde(rename = "auto-merge-settings", default)]
    pub settings: Settings,
}

/// Settings to act on, plus the reason they are defaults when the
/// repository config could not be used.
#[derive(Debug)]
pub struct ResolvedSettings {
    pub settings: Settings,
    pub problem: Option<AutoMergeError>,
}

impl ResolvedSettings {
    pub fn is_valid(&self) -> bool {
        self.problem.is_none()
    }
}

/// Name of the config file, honouring `CONFIG_FILENAME`.
pub fn config_filename() -> String {
    env::var(CONFIG_FILENAME_ENV)
        .ok()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CONFIG_FILENAME.to_string())
}

/// Path of the config file inside a repository.
pub fn repository_config_path() -> String {
    format!(".github/{}", config_filename())
}

/// Parses a config document and checks its schema version.
///
/// # Errors
/// * `Yaml` - If the document is not valid for the config shape
/// * `UnsupportedConfigVersion` - If `version` is anything but 1
pub fn parse_settings(content: &str) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    let file: ConfigFile = serde_yml::from_str(content)?;
    if file.version != SUPPORTED_CONFIG_VERSION {
        return Err(AutoMergeError::UnsupportedConfigVersion(file.version));
    }
    Ok(file.settings)
}

/// Resolves the settings to use for an event.
///
/// A missing document yields the defaults. An unusable document is reported
/// through `problem` and the defaults are used instead of guessing at its
/// shape.
pub fn resolve_settings(content: Option<&str>) -> ResolvedSettings {
    let Some(content) = content else {
        log::debug!("No config file found, using default settings");
        return ResolvedSettings {
            settings: Settings::default(),
            problem: None,
        };
    };

    match parse_settings(content) {
        Ok(settings) => ResolvedSettings {
            settings,
            problem: None,
        },
        Err(e) => {
            log::error!("{}; falling back to default settings", e);
            ResolvedSettings {
                settings: Settings::default(),
                problem: Some(e),
            }
        }
    }
}

/// Locates a local config file.
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `.github/<config file name>` in current directory
/// 3. `<config file name>` in the user config directory
///
/// # Returns
/// * `Some(path)` - The file to read (an explicit path is returned as given)
/// * `None` - If no file was found
pub fn locate_config(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let filename = config_filename();
    let local_path = Path::new(".github").join(&filename);
    if local_path.exists() {
        return Some(local_path);
    }

    dirs::config_dir()
        .map(|dir| dir.join(&filename))
        .filter(|path| path.exists())
}

/// Reads the local config document, `None` when there is none.
///
/// # Errors
/// `Io` if the located file cannot be read
pub fn read_config(config_path: Option<&str>) -> Result<Option<String>> {
    match locate_config(config_path) {
        Some(path) => {
            log::debug!("Loading config from {}", path.display());
            Ok(Some(fs::read_to_string(path)?))
        }
        None => Ok(None),
    }
}

/// Loads settings from a local file or returns defaults.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(ResolvedSettings)` - Loaded or default settings
/// * `Err` - If a file exists but cannot be read
pub fn load_config(config_path: Option<&str>) -> Result<ResolvedSettings> {
    let content = read_config(config_path)?;
    Ok(resolve_settings(content.as_deref()))
}
