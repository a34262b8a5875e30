//! Cache command integration tests

mod common;

use predicates::prelude::*;

#[test]
fn test_cache_stats_empty() {
    let workspace = common::TestWorkspace::new();

    workspace
        .cmd()
        .args(["cache"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries: 0"))
        .stdout(predicate::str::contains("Cache is empty."));
}

#[test]
fn test_cache_list_after_resolve() {
    let workspace = common::TestWorkspace::new();
    let upstream = workspace.create_git_repo("repo", "version: 1\n");

    workspace
        .cmd()
        .args(["resolve", "--git", &upstream.url()])
        .assert()
        .success();

    let entries = workspace.cache_entries();
    assert_eq!(entries.len(), 1);

    workspace
        .cmd()
        .args(["cache", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cache entries (1):"))
        .stdout(predicate::str::contains(entries[0].as_str()));
}

#[test]
fn test_cache_clear_only() {
    let workspace = common::TestWorkspace::new();
    let first = workspace.create_git_repo("first", "version: 1\n");
    let second = workspace.create_git_repo("second", "version: 1\n");
    let url = first.url();

    workspace
        .cmd()
        .args(["resolve", "--git", &url])
        .assert()
        .success();
    workspace
        .cmd()
        .args(["resolve", "--git", &second.url()])
        .assert()
        .success();
    assert_eq!(workspace.cache_entries().len(), 2);

    workspace
        .cmd()
        .args(["cache", "clear", "--only", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed cache entry"));

    assert_eq!(workspace.cache_entries().len(), 1);
}

#[test]
fn test_cache_clear_only_unknown() {
    let workspace = common::TestWorkspace::new();

    workspace
        .cmd()
        .args(["cache", "clear", "--only", "https://host/unknown.git"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in cache"));
}

#[test]
fn test_cache_clear_all() {
    let workspace = common::TestWorkspace::new();
    let upstream = workspace.create_git_repo("repo", "version: 1\n");

    workspace
        .cmd()
        .args(["resolve", "--git", &upstream.url()])
        .assert()
        .success();

    workspace
        .cmd()
        .args(["cache", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cache cleared successfully."));

    assert!(workspace.cache_entries().is_empty());
}

#[test]
fn test_cache_dir_flag_overrides_env() {
    let workspace = common::TestWorkspace::new();
    let other = workspace.temp.path().join("other-cache");

    workspace
        .cmd()
        .args(["cache", "--cache-dir"])
        .arg(&other)
        .assert()
        .success()
        .stdout(predicate::str::contains(other.display().to_string()));
}
