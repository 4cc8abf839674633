// tests/config_test.rs
use dependabot_auto_merger::config::{
    config_filename, load_config, parse_settings, repository_config_path, MergeStrategy, Settings,
    CONFIG_FILENAME_ENV, DEFAULT_CONFIG_FILENAME,
};
use dependabot_auto_merger::AutoMergeError;
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.dependencies_label, "dependencies");
    assert_eq!(settings.merge_level, "minor");
    assert_eq!(settings.merge_strategy, MergeStrategy::Squash);
    assert!(!settings.skip_ci);
    assert!(settings.delete_branch);
    assert!(!settings.skip_check_runs);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let yaml_content = r#"
version: 1
auto-merge-settings:
  merge_level: patch
  merge_strategy: merge
"#;
    temp_file.write_all(yaml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let resolved = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert!(resolved.is_valid());
    assert_eq!(resolved.settings.merge_level, "patch");
    assert_eq!(resolved.settings.merge_strategy, MergeStrategy::Merge);
    assert!(resolved.settings.delete_branch);
}

#[test]
fn test_load_every_field_from_fixture() {
    let resolved = load_config(Some("tests/fixtures/config_major.yml"))
        .expect("Failed to load test config");
    let settings = resolved.settings;

    assert_eq!(settings.dependencies_label, "deps");
    assert_eq!(settings.merge_level, "major");
    assert_eq!(settings.merge_strategy, MergeStrategy::Rebase);
    assert!(settings.skip_ci);
    assert!(!settings.delete_branch);
    assert_eq!(settings.commit_title, "Merge dependency update");
    assert_eq!(settings.commit_message, "Merged automatically");
    assert!(settings.skip_check_runs);
    assert_eq!(settings.merge_commit_title(), "[skip ci] Merge dependency update");
}

#[test]
fn test_unsupported_version_falls_back_to_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"version: 2\nauto-merge-settings:\n  merge_level: major\n")
        .unwrap();
    temp_file.flush().unwrap();

    let resolved = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert!(!resolved.is_valid());
    assert!(matches!(
        resolved.problem,
        Some(AutoMergeError::UnsupportedConfigVersion(2))
    ));
    assert_eq!(resolved.settings, Settings::default());
}

#[test]
fn test_malformed_yaml_falls_back_to_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"auto-merge-settings: [not, a, mapping\n")
        .unwrap();
    temp_file.flush().unwrap();

    let resolved = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert!(matches!(resolved.problem, Some(AutoMergeError::Yaml(_))));
    assert_eq!(resolved.settings, Settings::default());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let err = load_config(Some("tests/fixtures/does-not-exist.yml")).unwrap_err();
    assert!(matches!(err, AutoMergeError::Io(_)));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let settings = parse_settings(
        "version: 1\nauto-merge-settings:\n  delete_branch: false\n  reviewers: [octocat]\n",
    )
    .unwrap();
    assert!(!settings.delete_branch);
}

#[test]
#[serial]
fn test_config_filename_default() {
    std::env::remove_var(CONFIG_FILENAME_ENV);
    assert_eq!(config_filename(), DEFAULT_CONFIG_FILENAME);
    assert_eq!(
        repository_config_path(),
        ".github/dependabot-auto-merger.yml"
    );
}

#[test]
#[serial]
fn test_config_filename_from_env() {
    std::env::set_var(CONFIG_FILENAME_ENV, "auto-merge.yml");
    assert_eq!(config_filename(), "auto-merge.yml");
    assert_eq!(repository_config_path(), ".github/auto-merge.yml");

    std::env::set_var(CONFIG_FILENAME_ENV, "  ");
    assert_eq!(config_filename(), DEFAULT_CONFIG_FILENAME);

    std::env::remove_var(CONFIG_FILENAME_ENV);
}
