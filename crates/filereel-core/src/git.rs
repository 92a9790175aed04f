use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// Resolve the repository root for `dir` via `git rev-parse --show-toplevel`.
///
/// Fails with [`Error::Git`] when `dir` is not inside a git repository (or
/// git itself is unavailable), carrying git's own stderr message.
pub fn repository_root(dir: &Path) -> Result<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(dir)
        .output()?;

    if !output.status.success() {
        return Err(Error::Git(stderr_message(&output.stderr)));
    }

    let root = String::from_utf8_lossy(&output.stdout);
    Ok(PathBuf::from(root.trim()))
}

/// List the files git tracks under `root`, keeping those `keep` accepts.
///
/// Paths are relative to `root`, in git's native listing order. Untracked
/// and ignored files never appear; staged files do.
pub fn tracked_files<F>(root: &Path, keep: F) -> Result<Vec<String>>
where
    F: Fn(&str) -> bool,
{
    let output = Command::new("git")
        .args(["ls-files"])
        .current_dir(root)
        .output()?;

    if !output.status.success() {
        return Err(Error::Git(stderr_message(&output.stderr)));
    }

    let listing = String::from_utf8_lossy(&output.stdout);
    Ok(listing
        .lines()
        .filter(|line| !line.is_empty() && keep(line))
        .map(str::to_string)
        .collect())
}

fn stderr_message(stderr: &[u8]) -> String {
    let msg = String::from_utf8_lossy(stderr);
    let msg = msg.trim();
    if msg.is_empty() {
        "git command failed".to_string()
    } else {
        msg.to_string()
    }
}
