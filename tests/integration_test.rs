// tests/integration_test.rs
use std::process::Command;

use dependabot_auto_merger::analyzer::MergeAnalyzer;
use dependabot_auto_merger::domain::{
    classify_bump, is_allowed, parse_title, BumpLevel, MergeLevel, MergePolicy,
};
use dependabot_auto_merger::AutoMergeError;

fn minor_policy() -> MergePolicy {
    MergePolicy::new(MergeLevel::Minor)
}

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dependabot-auto-merger"))
}

#[test]
fn test_patch_upgrade_is_allowed_under_minor() {
    let upgrade = parse_title("Bump lodash from 4.17.10 to 4.17.21").unwrap();
    assert_eq!(upgrade.package_name, "lodash");
    assert_eq!(upgrade.old_version, "4.17.10");
    assert_eq!(upgrade.new_version, "4.17.21");

    let bump = classify_bump(&upgrade.old_version, &upgrade.new_version).unwrap();
    assert_eq!(bump, BumpLevel::Patch);
    assert!(is_allowed(bump, &minor_policy()));
}

#[test]
fn test_major_requirement_is_denied_under_minor() {
    let decision = MergeAnalyzer::new(minor_policy())
        .analyze_title("Update express requirement from ^4.16.0 to ^5.0.0")
        .unwrap();

    assert_eq!(decision.upgrade.package_name, "express");
    assert_eq!(decision.bump, BumpLevel::Major);
    assert!(!decision.allowed);
}

#[test]
fn test_unrelated_title_fails_to_parse() {
    let err = parse_title("Fix bug in handler").unwrap_err();
    match err {
        AutoMergeError::TitleFormat { title } => assert_eq!(title, "Fix bug in handler"),
        other => panic!("expected TitleFormat, got {:?}", other),
    }
}

#[test]
fn test_non_semver_tokens_pass_through_and_fail_classification() {
    let upgrade = parse_title("bump pkg from abc to xyz").unwrap();
    assert_eq!(upgrade.package_name, "pkg");
    assert_eq!(upgrade.old_version, "abc");
    assert_eq!(upgrade.new_version, "xyz");

    let err = classify_bump(&upgrade.old_version, &upgrade.new_version).unwrap_err();
    assert!(matches!(err, AutoMergeError::UnparsableVersion { .. }));
}

#[test]
fn test_classification_properties() {
    assert_eq!(classify_bump("1.2.3", "1.2.3").unwrap(), BumpLevel::None);
    assert_eq!(classify_bump("1.2.3", "1.3.0").unwrap(), BumpLevel::Minor);
    assert_eq!(classify_bump("1.2.3", "2.0.0").unwrap(), BumpLevel::Major);
    assert_eq!(classify_bump("1.2.3", "1.2.4").unwrap(), BumpLevel::Patch);

    assert!(is_allowed(BumpLevel::Patch, &minor_policy()));
    assert!(!is_allowed(BumpLevel::Major, &minor_policy()));
    assert!(!is_allowed(
        BumpLevel::Minor,
        &MergePolicy::new(MergeLevel::Patch)
    ));
}

#[test]
fn test_cli_help() {
    let output = bin().arg("--help").output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("dependabot-auto-merger"));
    assert!(stdout.contains("auto-merged"));
}

#[test]
fn test_cli_requires_input() {
    let output = bin().output().expect("Failed to execute command");
    assert!(!output.status.success());
}

#[test]
fn test_cli_classifies_title() {
    let output = bin()
        .args([
            "--config",
            "tests/fixtures/config_major.yml",
            "--title",
            "Update express requirement from ^4.16.0 to ^5.0.0",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("express"));
    assert!(stdout.contains("major"));
    assert!(stdout.contains("allow"));
}

#[test]
fn test_cli_rejects_unparsable_title() {
    let output = bin()
        .args([
            "--config",
            "tests/fixtures/config_major.yml",
            "--title",
            "Fix bug in handler",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Fix bug in handler"));
}

#[test]
fn test_cli_replays_event() {
    let output = bin()
        .args([
            "--config",
            "tests/fixtures/config_major.yml",
            "--event",
            "tests/fixtures/opened_event.json",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    // fixture config requires the "deps" label, the payload only has "dependencies"
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("deps"), "stderr: {}", stderr);
    assert!(stdout.contains("No API calls"));
}

#[test]
fn test_cli_replays_event_and_lists_merge() {
    let output = bin()
        .args([
            "--config",
            "tests/fixtures/config_rebase.yml",
            "--event",
            "tests/fixtures/opened_event.json",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(
        stdout.contains("Merged lodash 4.17.10 -> 4.17.21 (patch bump)"),
        "stdout: {}",
        stdout
    );
    assert!(stdout.contains("API calls (dry run):"));
    assert!(stdout.contains(
        "1. merge acme/widgets#42 via rebase with title \"[skip ci] Auto-merge dependabot PR\""
    ));
    assert!(!stdout.contains("No API calls"));
}
