#![allow(missing_docs)]

mod common;

use common::{smgen_cmd, touch};
use predicates::prelude::*;
use std::fs;

#[test]
fn dry_run_writes_nothing_on_a_fresh_root() {
    let root = tempfile::tempdir().unwrap();
    touch(&root.path().join("a.html"));

    smgen_cmd()
        .args(["--root"])
        .arg(root.path())
        .args(["--base-url", "https://example.com", "--dry-run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("would replace"));

    assert!(!root.path().join("sitemap.xml").exists());
    assert!(!root.path().join("sitemap.xml.gz").exists());
}

#[test]
fn dry_run_leaves_a_stale_published_pair_untouched() {
    let root = tempfile::tempdir().unwrap();
    touch(&root.path().join("a.html"));
    fs::write(root.path().join("sitemap.xml"), b"<stale/>\n").unwrap();

    smgen_cmd()
        .args(["--root"])
        .arg(root.path())
        .args(["--base-url", "https://example.com", "--dry-run"])
        .assert()
        .success();

    assert_eq!(fs::read(root.path().join("sitemap.xml")).unwrap(), b"<stale/>\n");
    assert!(!root.path().join("sitemap.xml.gz").exists());
}

#[test]
fn dry_run_still_detects_an_empty_manifest() {
    let root = tempfile::tempdir().unwrap();
    touch(&root.path().join(".hidden-only"));

    smgen_cmd()
        .args(["--root"])
        .arg(root.path())
        .args(["--base-url", "https://example.com", "--dry-run"])
        .assert()
        .code(10);
}

#[test]
fn check_args_validates_and_exits_without_output() {
    let root = tempfile::tempdir().unwrap();
    touch(&root.path().join("a.html"));

    smgen_cmd()
        .args(["--root"])
        .arg(root.path())
        .args(["--base-url", "https://example.com", "--check-args"])
        .assert()
        .success();

    assert!(!root.path().join("sitemap.xml").exists());
}

#[test]
fn check_args_still_rejects_a_missing_root() {
    smgen_cmd()
        .args([
            "--root",
            "/no/such/root",
            "--base-url",
            "https://example.com",
            "--check-args",
        ])
        .assert()
        .code(6);
}
