//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation. This is a standard pattern
//! for Rust integration test fixtures.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub struct GitFixture {
    temp_dir: TempDir,
}

impl GitFixture {
    /// An initialized repository with the given paths staged. Staged is
    /// enough for `git ls-files`; no commit or committer identity needed.
    pub fn with_files(files: &[&str]) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        git(temp_dir.path(), &["init"]);
        for file in files {
            let path = temp_dir.path().join(file);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("Failed to create parent dir");
            }
            fs::write(&path, "contents\n").expect("Failed to write file");
        }
        if !files.is_empty() {
            git(temp_dir.path(), &["add", "."]);
        }
        Self { temp_dir }
    }

    /// A directory that is not a git repository at all.
    pub fn non_repo() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The filereel binary, ready to run inside this fixture.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("filereel").expect("binary should build");
        cmd.current_dir(self.temp_dir.path());
        cmd
    }
}

fn git(dir: &Path, args: &[&str]) {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git should be available");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}
