mod common;

use common::GitFixture;
use predicates::prelude::*;

#[test]
fn outside_a_repository_fails_with_gits_message() {
    let fixture = GitFixture::non_repo();
    fixture.cmd().assert().failure().stderr(
        predicate::str::contains("Error:").and(predicate::str::contains("not a git repository")),
    );
}

#[test]
fn empty_repository_fails() {
    let fixture = GitFixture::with_files(&[]);
    fixture
        .cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("no tracked files in this repository"));
}

#[test]
fn no_files_matching_extension_fails() {
    let fixture = GitFixture::with_files(&["a.rs", "b.txt", "src/lib.rs"]);
    fixture
        .cmd()
        .args(["--ext", "md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no tracked files ending in `.md`"));
}

#[test]
fn extension_may_carry_a_leading_dot() {
    let fixture = GitFixture::with_files(&["a.rs"]);
    // both spellings normalize to the same suffix, so this gets past the
    // listing check and stops at the terminal requirement instead
    fixture
        .cmd()
        .args(["--ext", ".rs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a terminal"));
}

#[test]
fn requires_a_terminal_to_spin() {
    let fixture = GitFixture::with_files(&["a.rs", "b.rs", "c.rs"]);
    fixture
        .cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("stdout is not a terminal"));
}

#[test]
fn rejects_negative_duration_before_touching_git_or_the_terminal() {
    let fixture = GitFixture::non_repo();
    fixture
        .cmd()
        .arg("--duration=-2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));
}
