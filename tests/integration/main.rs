//! Integration tests for the respath CLI
//!
//! These tests run the binary against a real directory tree and check its
//! human and JSON output.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper function to create a respath command
fn respath() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("respath"))
}

/// Helper to create a small project tree
fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src/cli")).unwrap();
    fs::create_dir_all(dir.path().join("docs")).unwrap();
    fs::create_dir_all(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join("src/main.rs"), "fn main() {}\n").unwrap();
    fs::write(dir.path().join("src/cli/app.rs"), "\n").unwrap();
    fs::write(dir.path().join("docs/intro.md"), "# Intro\n").unwrap();
    fs::write(dir.path().join(".git/HEAD"), "ref: refs/heads/main\n").unwrap();
    fs::write(dir.path().join("Cargo.toml"), "[package]\n").unwrap();
    dir
}

// =============================================================================
// find
// =============================================================================

#[test]
fn find_by_glob() {
    let dir = project();
    respath()
        .args(["find"])
        .arg(dir.path())
        .args(["--glob", "src/**/*.rs"])
        .assert()
        .success()
        .stdout("src/cli/app.rs\nsrc/main.rs\n");
}

#[test]
fn find_repeated_globs_are_alternatives() {
    let dir = project();
    respath()
        .arg("find")
        .arg(dir.path())
        .args(["--files", "-g", "*.toml", "-g", "docs/*"])
        .assert()
        .success()
        .stdout("Cargo.toml\ndocs/intro.md\n");
}

#[test]
fn find_directories() {
    let dir = project();
    respath()
        .arg("find")
        .arg(dir.path())
        .arg("--dirs")
        .assert()
        .success()
        .stdout("docs\nsrc\nsrc/cli\n");
}

#[test]
fn find_hidden() {
    let dir = project();
    respath()
        .arg("find")
        .arg(dir.path())
        .args(["--files", "--hidden", "--regex", "\\..*"])
        .assert()
        .success()
        .stdout(".git/HEAD\n");
}

#[test]
fn find_json() {
    let dir = project();
    let output = respath()
        .args(["--json", "find"])
        .arg(dir.path())
        .args(["--ext", "md"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["matches"], serde_json::json!(["docs/intro.md"]));
    assert_eq!(json["matchers"], serde_json::json!(["extensions(md)"]));
}

#[test]
fn find_uses_config_in_root() {
    let dir = project();
    fs::write(
        dir.path().join("respath.toml"),
        "[[matchers]]\nkind = \"pattern\"\npattern = \"src/\"\n",
    )
    .unwrap();

    respath()
        .arg("find")
        .arg(dir.path())
        .arg("--files")
        .assert()
        .success()
        .stdout("src/cli/app.rs\nsrc/main.rs\n");
}

#[test]
fn find_defaults_to_current_dir() {
    let dir = project();
    respath()
        .current_dir(dir.path())
        .args(["find", "--files", "--glob", "src/**"])
        .assert()
        .success()
        .stdout("src/cli/app.rs\nsrc/main.rs\n");
}

#[test]
fn find_in_relative_subdir() {
    let dir = project();
    respath()
        .current_dir(dir.path())
        .args(["find", "src", "--ext", "rs"])
        .assert()
        .success()
        .stdout("cli/app.rs\nmain.rs\n");
}

#[test]
fn key_for_relative_path_round_trips() {
    respath()
        .args(["key", "java:ab%3Ac.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("java:ab%3Ac.txt"));
}

#[test]
fn find_explicit_config_missing() {
    let dir = project();
    respath()
        .arg("find")
        .arg(dir.path())
        .args(["--config", "/nonexistent/respath.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn find_invalid_glob() {
    let dir = project();
    respath()
        .arg("find")
        .arg(dir.path())
        .args(["--glob", "src//x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid pattern 'src//x'"));
}

#[test]
fn find_missing_root() {
    respath()
        .args(["find", "/nonexistent/path/that/does/not/exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("root path does not exist"));
}

// =============================================================================
// key
// =============================================================================

#[test]
fn key_resolves_existing_file() {
    let dir = project();
    let file = dir.path().join("Cargo.toml");
    let output = respath()
        .args(["--json", "key"])
        .arg(format!("java:{}", file.display()))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["exists"], true);
    assert_eq!(json["local_file"], file.display().to_string());
    assert!(json["key"].as_str().unwrap().starts_with("java:file:///"));
}

#[test]
fn key_network_path_is_not_local() {
    respath()
        .args(["key", "java:file://server/share/x.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("//server/share/x.txt"))
        .stdout(predicate::str::contains("(not local)"));
}

#[test]
fn key_with_foreign_qualifier() {
    respath()
        .args(["key", "s3:bucket/x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no resource registry for qualifier 's3'"));
}

// =============================================================================
// test
// =============================================================================

#[test]
fn test_accepted_path() {
    let dir = project();
    respath()
        .arg("test")
        .arg(dir.path())
        .args(["src/main.rs", "--files", "--glob", "**/*.rs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pattern(**/*.rs)"))
        .stdout(predicate::str::contains("path is accepted"));
}

#[test]
fn test_rejected_path_exits_nonzero() {
    let dir = project();
    respath()
        .arg("test")
        .arg(dir.path())
        .args(["src", "--files"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("path is rejected"));
}

// =============================================================================
// Misc
// =============================================================================

#[test]
fn version_json() {
    respath()
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_command_shows_hint() {
    respath()
        .assert()
        .success()
        .stdout(predicate::str::contains("respath --help"));
}
