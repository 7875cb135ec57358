/*!
 * Common test utilities for the docwai test suite
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use anyhow::Result;
use tempfile::TempDir;

use docwai::Config;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample Markdown document with YAML front matter
pub fn create_test_markdown(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = r#"---
title: Getting started
tags:
  - guide
  - intro
---

# Getting started

This guide walks through the first steps.
"#;
    create_test_file(dir, filename, content)
}

/// Configuration suitable for tests: valid credential, default everything else
pub fn create_test_config() -> Config {
    Config {
        api_key: "test-key".to_string(),
        ..Config::default()
    }
}

/// Run a git command in the given directory, asserting success
pub fn run_git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .expect("git should be runnable in tests");
    assert!(status.success(), "git {:?} failed", args);
}

/// Initialize a git repository with a local identity for committing
pub fn init_git_repo(dir: &Path) {
    run_git(dir, &["init", "-q"]);
    run_git(dir, &["config", "user.email", "tests@example.com"]);
    run_git(dir, &["config", "user.name", "Test User"]);
    run_git(dir, &["config", "commit.gpgsign", "false"]);
}

/// Stage and commit everything in the repository
pub fn commit_all(dir: &Path, message: &str) {
    run_git(dir, &["add", "."]);
    run_git(dir, &["commit", "-q", "-m", message]);
}

/// Number of commits reachable from HEAD
pub fn commit_count(dir: &Path) -> usize {
    let output = Command::new("git")
        .args(["rev-list", "--count", "HEAD"])
        .current_dir(dir)
        .output()
        .expect("git should be runnable in tests");
    String::from_utf8_lossy(&output.stdout)
        .trim()
        .parse()
        .expect("rev-list output should be a number")
}
