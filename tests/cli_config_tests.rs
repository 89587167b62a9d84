//! End-to-end tests for `reqbook config` commands.

use std::path::Path;
use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the reqbook binary
fn reqbook_bin() -> &'static str {
    env!("CARGO_BIN_EXE_reqbook")
}

/// Creates a Command with an isolated config directory.
fn isolated_config_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(reqbook_bin());
    cmd.env("REQBOOK_CONFIG_DIR", config_dir);
    cmd.args(args);
    cmd
}

fn show_json(config_dir: &Path) -> serde_json::Value {
    let output = isolated_config_command(&["config", "show", "--json"], config_dir)
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let config_dir = temp_dir();
    let output = isolated_config_command(&["config", "show"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Output Directory"));
    assert!(stdout.contains("Untitled Project"));
}

#[test]
fn test_config_show_json_schema() {
    let config_dir = temp_dir();
    let result = show_json(config_dir.path());

    assert!(result["paths"].is_object(), "Should have paths object");
    assert!(result["paths"]["workspace"].is_null(), "Workspace unset by default");
    assert!(result["export"]["output_dir"].is_string());
    assert_eq!(result["export"]["project_name"], "Untitled Project");
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_project_persists() {
    let config_dir = temp_dir();

    let output = isolated_config_command(
        &["config", "set", "--project", "CRM Revamp"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(config_dir.path().join("config.toml").exists());
    assert_eq!(show_json(config_dir.path())["export"]["project_name"], "CRM Revamp");
}

#[test]
fn test_config_set_output_dir_and_workspace_create_directories() {
    let config_dir = temp_dir();
    let scratch = temp_dir();
    let output_dir = scratch.path().join("exports");
    let workspace = scratch.path().join("models");

    let output = isolated_config_command(
        &[
            "config",
            "set",
            "--output-dir",
            output_dir.to_str().unwrap(),
            "--workspace",
            workspace.to_str().unwrap(),
        ],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert!(output_dir.is_dir());
    assert!(workspace.is_dir());

    let result = show_json(config_dir.path());
    assert_eq!(result["export"]["output_dir"], output_dir.to_str().unwrap());
    assert_eq!(result["paths"]["workspace"], workspace.to_str().unwrap());
}

#[test]
fn test_config_set_without_options_fails() {
    let config_dir = temp_dir();
    let output = isolated_config_command(&["config", "set"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("At least one"));
}

#[test]
fn test_config_set_blank_project_fails() {
    let config_dir = temp_dir();
    let output = isolated_config_command(&["config", "set", "--project", "  "], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(!config_dir.path().join("config.toml").exists());
}
