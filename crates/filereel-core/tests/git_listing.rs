use filereel_core::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// git init a directory and stage a small tree. Staged is enough for
/// `git ls-files`; no commit (and no committer identity) required.
fn init_repo(dir: &Path) {
    let init = Command::new("git").arg("init").current_dir(dir).output().unwrap();
    assert!(init.status.success(), "git init failed: {:?}", init);

    fs::create_dir_all(dir.join("src")).unwrap();
    fs::create_dir_all(dir.join("tests")).unwrap();
    fs::write(dir.join("Cargo.toml"), "[package]\n").unwrap();
    fs::write(dir.join("README.md"), "# test\n").unwrap();
    fs::write(dir.join("src/lib.rs"), "pub fn lib() {}\n").unwrap();
    fs::write(dir.join("src/main.rs"), "fn main() {}\n").unwrap();
    fs::write(dir.join("tests/cli.rs"), "#[test]\nfn t() {}\n").unwrap();

    let add = Command::new("git").args(["add", "."]).current_dir(dir).output().unwrap();
    assert!(add.status.success(), "git add failed: {:?}", add);
}

#[test]
fn tracked_files_lists_staged_paths_in_git_order() {
    let temp_dir = TempDir::new().unwrap();
    init_repo(temp_dir.path());

    let files = git::tracked_files(temp_dir.path(), |_| true).unwrap();

    // git ls-files sorts bytewise
    assert_eq!(
        files,
        vec!["Cargo.toml", "README.md", "src/lib.rs", "src/main.rs", "tests/cli.rs"]
    );
}

#[test]
fn tracked_files_ignores_untracked_paths() {
    let temp_dir = TempDir::new().unwrap();
    init_repo(temp_dir.path());
    fs::write(temp_dir.path().join("scratch.txt"), "not staged\n").unwrap();

    let files = git::tracked_files(temp_dir.path(), |_| true).unwrap();
    assert!(!files.iter().any(|f| f == "scratch.txt"));
}

#[test]
fn tracked_files_applies_the_filter() {
    let temp_dir = TempDir::new().unwrap();
    init_repo(temp_dir.path());

    let rust_only = git::tracked_files(temp_dir.path(), |f| f.ends_with(".rs")).unwrap();
    assert_eq!(rust_only, vec!["src/lib.rs", "src/main.rs", "tests/cli.rs"]);

    let none = git::tracked_files(temp_dir.path(), |_| false).unwrap();
    assert!(none.is_empty());
}

#[test]
fn repository_root_resolves_from_a_subdirectory() {
    let temp_dir = TempDir::new().unwrap();
    init_repo(temp_dir.path());

    let root = git::repository_root(&temp_dir.path().join("src")).unwrap();

    // git resolves symlinks (e.g. /tmp on macOS), so compare canonical forms
    assert_eq!(
        root.canonicalize().unwrap(),
        temp_dir.path().canonicalize().unwrap()
    );
}

#[test]
fn repository_root_outside_a_repo_is_a_git_error() {
    let temp_dir = TempDir::new().unwrap();

    let err = git::repository_root(temp_dir.path()).unwrap_err();
    match err {
        Error::Git(msg) => assert!(msg.contains("not a git repository"), "stderr: {}", msg),
        other => panic!("expected Error::Git, got {:?}", other),
    }
}

#[test]
fn tracked_files_outside_a_repo_is_a_git_error() {
    let temp_dir = TempDir::new().unwrap();

    let err = git::tracked_files(temp_dir.path(), |_| true).unwrap_err();
    assert!(matches!(err, Error::Git(_)));
}
