//! Integration tests for the reorder-editable binary.
//!
//! These tests exercise the actual compiled binary using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// Get a Command for the reorder-editable binary with no ambient environment
/// that could point it at a real manifest.
fn reorder_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("reorder-editable"));
    cmd.env_remove("VIRTUAL_ENV")
        .env_remove("CONDA_PREFIX")
        .env_remove("REORDER_EDITABLE_PTH")
        .env("REORDER_EDITABLE_PYTHON", "reorder-editable-no-such-python")
        .env("NO_COLOR", "1");
    cmd
}

/// Create project dirs `a`, `b`, `c` and a manifest listing `order`.
fn setup(order: &[&str]) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    for name in ["a", "b", "c"] {
        fs::create_dir(dir.path().join(name)).unwrap();
    }
    let mut content = String::from("import sys; sys.__plen = len(sys.path)\n");
    for name in order {
        content.push_str(&format!("{}\n", dir.path().join(name).display()));
    }
    let manifest = dir.path().join("easy-install.pth");
    fs::write(&manifest, content).unwrap();
    (dir, manifest)
}

fn project(dir: &Path, name: &str) -> String {
    dir.join(name).display().to_string()
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_output() {
    reorder_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("easy-install.pth"))
        .stdout(predicate::str::contains("reorder"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_version_output() {
    reorder_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("reorder-editable"));
}

#[test]
fn test_no_command_fails() {
    reorder_cmd().assert().failure();
}

#[test]
fn test_check_requires_directory() {
    reorder_cmd()
        .args(["check", "-e", "/nonexistent/easy-install.pth"])
        .assert()
        .failure();
}

// ============================================================================
// Cat and Locate
// ============================================================================

#[test]
fn test_cat_prints_manifest() {
    let (_dir, manifest) = setup(&["a", "b"]);
    let expected = fs::read_to_string(&manifest).unwrap();

    reorder_cmd()
        .arg("cat")
        .arg("-e")
        .arg(&manifest)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_cat_reads_location_from_env() {
    let (_dir, manifest) = setup(&["a"]);
    let expected = fs::read_to_string(&manifest).unwrap();

    reorder_cmd()
        .arg("cat")
        .env("REORDER_EDITABLE_PTH", &manifest)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_cat_missing_override_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("easy-install.pth");

    reorder_cmd()
        .arg("cat")
        .arg("-e")
        .arg(&missing)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains(missing.display().to_string()));
}

#[test]
fn test_locate_finds_virtualenv_manifest() {
    let dir = tempdir().unwrap();
    let site = if cfg!(windows) {
        dir.path().join("Lib").join("site-packages")
    } else {
        dir.path().join("lib").join("python3.12").join("site-packages")
    };
    fs::create_dir_all(&site).unwrap();
    fs::write(site.join("easy-install.pth"), "/src/a\n").unwrap();

    reorder_cmd()
        .arg("locate")
        .env("VIRTUAL_ENV", dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("site-packages"))
        .stdout(predicate::str::contains("easy-install.pth"));
}

#[test]
fn test_locate_without_environment_fails() {
    reorder_cmd()
        .arg("locate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("easy-install.pth"))
        .stderr(predicate::str::contains("--easy-install-location"));
}

// ============================================================================
// Check
// ============================================================================

#[test]
fn test_check_ordered_succeeds() {
    let (dir, manifest) = setup(&["a", "b", "c"]);

    reorder_cmd()
        .arg("check")
        .arg("-e")
        .arg(&manifest)
        .arg(project(dir.path(), "a"))
        .arg(project(dir.path(), "c"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
#[cfg(unix)]
fn test_check_relative_directories() {
    let (dir, manifest) = setup(&["a", "b"]);
    // The working directory reported to the binary is the resolved path.
    let root = dir.path().canonicalize().unwrap();
    fs::write(
        &manifest,
        format!("{}\n{}\n", project(&root, "a"), project(&root, "b")),
    )
    .unwrap();

    reorder_cmd()
        .current_dir(dir.path())
        .args(["check", "./a", "b/../b"])
        .arg("-e")
        .arg(&manifest)
        .assert()
        .success();
}

#[test]
fn test_check_out_of_order_prints_contents() {
    let (dir, manifest) = setup(&["a", "b", "c"]);
    let contents = fs::read_to_string(&manifest).unwrap();

    reorder_cmd()
        .arg("check")
        .arg("-e")
        .arg(&manifest)
        .arg(project(dir.path(), "c"))
        .arg(project(dir.path(), "a"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("must appear before"))
        .stderr(predicate::str::contains(contents));
}

#[test]
fn test_check_missing_entry_fails() {
    let (dir, manifest) = setup(&["a"]);

    reorder_cmd()
        .arg("check")
        .arg("-e")
        .arg(&manifest)
        .arg(project(dir.path(), "b"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not in the manifest"));
}

#[test]
fn test_check_nonexistent_directory_fails() {
    let (dir, manifest) = setup(&["a"]);

    reorder_cmd()
        .arg("check")
        .arg("-e")
        .arg(&manifest)
        .arg(project(dir.path(), "missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

// ============================================================================
// Reorder
// ============================================================================

#[test]
fn test_reorder_rewrites_manifest() {
    let (dir, manifest) = setup(&["a", "b", "c"]);

    reorder_cmd()
        .arg("reorder")
        .arg("-e")
        .arg(&manifest)
        .arg(project(dir.path(), "c"))
        .arg(project(dir.path(), "a"))
        .assert()
        .success();

    let expected = format!(
        "import sys; sys.__plen = len(sys.path)\n{}\n{}\n{}\n",
        project(dir.path(), "b"),
        project(dir.path(), "c"),
        project(dir.path(), "a"),
    );
    assert_eq!(fs::read_to_string(&manifest).unwrap(), expected);

    // A reordered manifest passes the matching check.
    reorder_cmd()
        .arg("check")
        .arg("-e")
        .arg(&manifest)
        .arg(project(dir.path(), "c"))
        .arg(project(dir.path(), "a"))
        .assert()
        .success();
}

#[test]
fn test_reorder_dry_run_leaves_file() {
    let (dir, manifest) = setup(&["a", "b"]);
    let before = fs::read_to_string(&manifest).unwrap();

    reorder_cmd()
        .arg("reorder")
        .arg("--dry-run")
        .arg("-e")
        .arg(&manifest)
        .arg(project(dir.path(), "a"))
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("+{}", project(dir.path(), "a"))));

    assert_eq!(fs::read_to_string(&manifest).unwrap(), before);
}

#[test]
fn test_reorder_missing_entry_leaves_file() {
    let (dir, manifest) = setup(&["a", "b"]);
    let before = fs::read_to_string(&manifest).unwrap();

    reorder_cmd()
        .arg("reorder")
        .arg("-e")
        .arg(&manifest)
        .arg(project(dir.path(), "c"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("is not in the manifest"))
        .stderr(predicate::str::contains(before.clone()));

    assert_eq!(fs::read_to_string(&manifest).unwrap(), before);
}

#[test]
fn test_reorder_duplicate_directory_fails() {
    let (dir, manifest) = setup(&["a", "b"]);

    reorder_cmd()
        .arg("reorder")
        .arg("-e")
        .arg(&manifest)
        .arg(project(dir.path(), "a"))
        .arg(project(dir.path(), "a"))
        .assert()
        .failure();
}

#[test]
fn test_reorder_keeps_crlf_endings() {
    use assert_fs::prelude::*;

    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a").create_dir_all().unwrap();
    temp.child("b").create_dir_all().unwrap();
    let a = temp.child("a").path().display().to_string();
    let b = temp.child("b").path().display().to_string();

    let manifest = temp.child("easy-install.pth");
    manifest
        .write_str(&format!("import sys\r\n{a}\r\n{b}\r\n"))
        .unwrap();

    reorder_cmd()
        .arg("reorder")
        .arg("-e")
        .arg(manifest.path())
        .arg(&a)
        .assert()
        .success();

    manifest.assert(format!("import sys\r\n{b}\r\n{a}\r\n"));
}
