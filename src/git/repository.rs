//! Git repository access.

use std::path::Path;

use anyhow::{Context, Result};
use git2::{Commit, Oid, Repository};
use tracing::debug;

use crate::error::LintError;

/// A commit's hash and full message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// Full SHA-1 hash.
    pub hash: String,
    /// Raw message, title line first.
    pub message: String,
}

impl CommitMessage {
    fn from_commit(commit: &Commit<'_>) -> Self {
        Self {
            hash: commit.id().to_string(),
            message: String::from_utf8_lossy(commit.message_bytes()).into_owned(),
        }
    }
}

/// Git repository wrapper.
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Opens the repository containing the current directory.
    pub fn open() -> Result<Self> {
        Self::open_at(".")
    }

    /// Opens the repository containing `path`.
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::discover(path)
            .with_context(|| format!("Not in a git repository: {}", path.display()))?;

        Ok(Self { repo })
    }

    /// Returns the messages of the commits selected by `range`.
    ///
    /// Accepts `HEAD`, a single revision, or `A..B` (commits reachable from
    /// `B` but not `A`, oldest first). Merge commits are skipped, so a
    /// single revision naming a merge yields no messages.
    pub fn commit_messages(&self, range: &str) -> Result<Vec<CommitMessage>> {
        let range = range.trim();
        if range.is_empty() {
            return Err(LintError::InvalidRange(range.to_string()).into());
        }

        let Some((start_spec, end_spec)) = range.split_once("..") else {
            let commit = self.resolve(range)?;
            if commit.parent_count() > 1 {
                debug!(hash = %commit.id(), "Skipping merge commit");
                return Ok(Vec::new());
            }
            return Ok(vec![CommitMessage::from_commit(&commit)]);
        };

        if start_spec.is_empty() || end_spec.is_empty() || end_spec.starts_with('.') {
            return Err(LintError::InvalidRange(range.to_string()).into());
        }

        let start = self.resolve(start_spec)?;
        let end = self.resolve(end_spec)?;

        let mut walker = self.repo.revwalk().context("Failed to create revwalk")?;
        walker.push(end.id()).context("Failed to push end commit")?;
        walker.hide(start.id()).context("Failed to hide start commit")?;

        let mut messages = Vec::new();
        for oid in walker {
            let oid: Oid = oid.context("Failed to get commit OID from walker")?;
            let commit = self
                .repo
                .find_commit(oid)
                .context("Failed to find commit")?;

            if commit.parent_count() > 1 {
                debug!(hash = %oid, "Skipping merge commit");
                continue;
            }

            messages.push(CommitMessage::from_commit(&commit));
        }

        // Walker yields newest first
        messages.reverse();
        Ok(messages)
    }

    fn resolve(&self, spec: &str) -> Result<Commit<'_>> {
        self.repo
            .revparse_single(spec)
            .with_context(|| format!("Failed to parse commit: {spec}"))?
            .peel_to_commit()
            .with_context(|| format!("Not a commit: {spec}"))
    }
}
