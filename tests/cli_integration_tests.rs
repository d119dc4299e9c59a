use std::process::Command;
use tempfile::TempDir;

#[test]
fn test_cli_help_command() {
    let output = Command::new("cargo")
        .args(["run", "--", "--help"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("arke-zod"));
    assert!(stdout.contains("pull"));
}

#[test]
fn test_cli_pull_unknown_project_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = Command::new("cargo")
        .args(["run", "--quiet", "--", "pull", "missing"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .env("ARKE_ZOD_CONFIG_PATH", temp_dir.path().join("projects.yaml"))
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Project with key \"missing\" not found."));
}
