// tests/config_test.rs
use std::env;
use std::io::Write;
use std::path::PathBuf;

use serial_test::serial;
use tempfile::NamedTempFile;

use auto_release::config::{load_behavior, resolve_config, BehaviorConfig};

const FIXTURE: &str = "tests/fixtures/config_with_behavior.toml";

#[test]
fn test_load_behavior_from_custom_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[behavior]
issue_notes = false
prerelease = true
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let behavior = load_behavior(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert!(!behavior.issue_notes);
    assert!(behavior.prerelease);
    assert!(!behavior.draft);
}

#[test]
fn test_load_behavior_from_fixture() {
    let behavior = load_behavior(Some(FIXTURE)).expect("Failed to load test config");
    assert!(!behavior.issue_notes);
    assert!(behavior.draft);
}

#[test]
fn test_load_behavior_partial_file_fills_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[behavior]\ndraft = true\n").unwrap();
    temp_file.flush().unwrap();

    let behavior = load_behavior(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert!(behavior.issue_notes);
    assert!(behavior.draft);
}

#[test]
fn test_load_behavior_empty_file_gives_defaults() {
    let temp_file = NamedTempFile::new().unwrap();

    let behavior = load_behavior(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(behavior, BehaviorConfig::default());
}

#[test]
fn test_load_behavior_missing_custom_file_fails() {
    let result = load_behavior(Some("/nonexistent/autorelease.toml"));
    assert!(result.is_err());
}

#[test]
fn test_load_behavior_invalid_toml_fails() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[behavior]\nissue_notes = \"yes\"\n")
        .unwrap();
    temp_file.flush().unwrap();

    let result = load_behavior(Some(temp_file.path().to_str().unwrap()));
    assert!(result.is_err());
}

#[test]
fn test_load_behavior_without_file() {
    // No autorelease.toml in the test working directory; the cascade
    // falls through to the user config directory or the defaults.
    assert!(load_behavior(None).is_ok());
}

#[test]
#[serial]
fn test_resolve_config_from_env() {
    env::set_var("GITHUB_TOKEN", "env-token");
    env::set_var("GITHUB_REPOSITORY", "octocat/hello-world");
    env::remove_var("GITHUB_EVENT_PATH");

    let config = resolve_config(Some(FIXTURE), None, None, None).unwrap();
    assert_eq!(config.token, "env-token");
    assert_eq!(config.repo.owner, "octocat");
    assert_eq!(config.repo.name, "hello-world");
    assert_eq!(config.event_path, None);
    assert!(!config.behavior.issue_notes);

    env::remove_var("GITHUB_TOKEN");
    env::remove_var("GITHUB_REPOSITORY");
}

#[test]
#[serial]
fn test_resolve_config_args_take_precedence() {
    env::set_var("GITHUB_TOKEN", "env-token");
    env::set_var("GITHUB_REPOSITORY", "env/repo");
    env::set_var("GITHUB_EVENT_PATH", "/env/event.json");

    let config = resolve_config(
        Some(FIXTURE),
        Some("octocat/hello-world"),
        Some("arg-token"),
        Some("/tmp/event.json"),
    )
    .unwrap();
    assert_eq!(config.token, "arg-token");
    assert_eq!(config.repo.owner, "octocat");
    assert_eq!(config.event_path, Some(PathBuf::from("/tmp/event.json")));

    env::remove_var("GITHUB_TOKEN");
    env::remove_var("GITHUB_REPOSITORY");
    env::remove_var("GITHUB_EVENT_PATH");
}

#[test]
#[serial]
fn test_resolve_config_event_path_from_env() {
    env::set_var("GITHUB_TOKEN", "env-token");
    env::set_var("GITHUB_REPOSITORY", "octocat/hello-world");
    env::set_var("GITHUB_EVENT_PATH", "/env/event.json");

    let config = resolve_config(Some(FIXTURE), None, None, None).unwrap();
    assert_eq!(config.event_path, Some(PathBuf::from("/env/event.json")));

    env::remove_var("GITHUB_TOKEN");
    env::remove_var("GITHUB_REPOSITORY");
    env::remove_var("GITHUB_EVENT_PATH");
}

#[test]
#[serial]
fn test_resolve_config_missing_token_fails() {
    env::remove_var("GITHUB_TOKEN");
    env::set_var("GITHUB_REPOSITORY", "octocat/hello-world");

    let err = resolve_config(Some(FIXTURE), None, None, None).unwrap_err();
    assert!(
        err.to_string().contains("GITHUB_TOKEN"),
        "error should mention the missing variable, got: {}",
        err
    );

    env::remove_var("GITHUB_REPOSITORY");
}

#[test]
#[serial]
fn test_resolve_config_missing_repo_fails() {
    env::set_var("GITHUB_TOKEN", "env-token");
    env::remove_var("GITHUB_REPOSITORY");

    let err = resolve_config(Some(FIXTURE), None, None, None).unwrap_err();
    assert!(
        err.to_string().contains("GITHUB_REPOSITORY"),
        "error should mention the missing variable, got: {}",
        err
    );

    env::remove_var("GITHUB_TOKEN");
}

#[test]
#[serial]
fn test_resolve_config_invalid_repo_slug_fails() {
    env::set_var("GITHUB_TOKEN", "env-token");
    env::set_var("GITHUB_REPOSITORY", "not-a-slug");

    let err = resolve_config(Some(FIXTURE), None, None, None).unwrap_err();
    assert!(err.to_string().contains("owner/name"));

    env::remove_var("GITHUB_TOKEN");
    env::remove_var("GITHUB_REPOSITORY");
}
