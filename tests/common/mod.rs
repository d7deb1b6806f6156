//! Shared fixtures for ena-release integration tests
//!
//! These tests build a small workspace in a temporary directory and drive the
//! binary against it.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const IR_MANIFEST: &str = r#"[package]
name = "enalang_ir"
version = "0.1.0"
edition = "2021"
keywords = ["ena","ir"]

[dependencies]
serde = { version = "1.0", features = ["derive"] }
"#;

pub const VM_MANIFEST: &str = r#"[package]
name = "enalang_vm"
version = "0.1.0"  # stamped on release
edition = "2021"

[dependencies]
enalang_ir = { path = "../enalang_ir", version = "0.1.0" }
enalang_macro = "0.1.0"
flume = "0.11"
"#;

/// Helper to create a workspace with two members and both release files
#[allow(unused)]
pub fn create_test_workspace() -> TempDir {
    let temp = TempDir::new().unwrap();

    fs::write(
        temp.path().join("Cargo.toml"),
        r#"[workspace]
members = ["enalang_ir", "enalang_vm"]
resolver = "2"
"#,
    )
    .unwrap();
    fs::write(temp.path().join("version.txt"), "0.2.0\n").unwrap();
    fs::write(
        temp.path().join("publish-order.txt"),
        "enalang_ir\nenalang_vm\n",
    )
    .unwrap();

    write_member(temp.path(), "enalang_ir", IR_MANIFEST);
    write_member(temp.path(), "enalang_vm", VM_MANIFEST);

    temp
}

#[allow(unused)]
pub fn write_member(workspace_root: &Path, name: &str, manifest: &str) {
    let dir = workspace_root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("Cargo.toml"), manifest).unwrap();
}

#[allow(unused)]
pub fn read_member(workspace_root: &Path, name: &str) -> String {
    fs::read_to_string(workspace_root.join(name).join("Cargo.toml")).unwrap()
}

/// Helper to run the release tool inside `workspace_root`
pub fn run_release(workspace_root: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("ena-release");
    cmd.args(args).current_dir(workspace_root);

    cmd.assert()
}

/// Like [`run_release`], but git is pointed at a repository that does not
/// exist, so any real git command fails instead of touching an enclosing repo.
#[allow(unused)]
pub fn run_release_without_git(workspace_root: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("ena-release");
    cmd.args(args)
        .env("GIT_DIR", workspace_root.join("no-such-git-dir"))
        .current_dir(workspace_root);

    cmd.assert()
}
