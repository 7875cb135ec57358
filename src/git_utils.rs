use anyhow::{Result, Context};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use tokio::process::Command;

// @module: Version control operations via the git CLI

/// Git operations scoped to one repository working tree
///
/// Change discovery diffs the current revision against the immediately
/// preceding one; staging, commit and push run after the whole batch is
/// written. Their exit codes are logged but deliberately not treated as
/// failures, matching the reference behavior.
pub struct GitRepository {
    /// Repository working tree root
    root: PathBuf,
}

impl GitRepository {
    /// Create a handle for the repository at the given root
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Repository working tree root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List files changed between the previous and current revision
    ///
    /// Runs one `git diff --name-only` per watched extension, restricted
    /// by a `*.{ext}` pathspec. Results are concatenated in extension
    /// order, blank lines dropped; duplicates across extensions are kept
    /// (later writes simply overwrite).
    pub async fn list_changed_files(&self, extensions: &[String]) -> Result<Vec<PathBuf>> {
        let mut changed = Vec::new();

        for ext in extensions {
            let pathspec = format!("*.{}", ext);
            let output = self
                .run_git(&["diff", "--name-only", "HEAD~1", "HEAD", "--", &pathspec])
                .await?;

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                warn!("git diff for '{}' failed: {}", pathspec, stderr.trim());
                continue;
            }

            let stdout = String::from_utf8_lossy(&output.stdout);
            for line in stdout.lines() {
                let line = line.trim();
                if !line.is_empty() {
                    changed.push(PathBuf::from(line));
                }
            }
        }

        debug!("Found {} changed file(s) in {:?}", changed.len(), self.root);
        Ok(changed)
    }

    /// Stage every change in the working tree
    pub async fn stage_all(&self) -> Result<()> {
        self.run_unchecked(&["add", "."]).await
    }

    /// Commit the staged changes with the given message
    pub async fn commit(&self, message: &str) -> Result<()> {
        self.run_unchecked(&["commit", "-m", message]).await
    }

    /// Push the current branch to its upstream
    pub async fn push(&self) -> Result<()> {
        self.run_unchecked(&["push"]).await
    }

    /// Run a git command, returning its raw output
    async fn run_git(&self, args: &[&str]) -> Result<std::process::Output> {
        Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .await
            .with_context(|| format!("Failed to execute git {}", args.join(" ")))
    }

    /// Run a git command whose exit code is logged but not inspected
    async fn run_unchecked(&self, args: &[&str]) -> Result<()> {
        let output = self.run_git(args).await?;

        if output.status.success() {
            debug!("git {} succeeded", args.join(" "));
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                "git {} exited with {}: {}",
                args.join(" "),
                output.status,
                stderr.trim()
            );
        }

        Ok(())
    }
}
