//! Diff collection: git CLI wrapper and files-mode concatenation.

pub mod files;
pub mod git;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from diff collection.
#[derive(Error, Debug)]
pub enum DiffError {
    #[error("git command failed: {0}")]
    GitError(String),
}

/// Where the text under review comes from. The three modes are mutually
/// exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffSource {
    /// Currently staged changes.
    Staged,

    /// Diff between two branches, target first.
    Branch { source: String, target: String },

    /// Full current contents of the named files (not a diff).
    Files(Vec<PathBuf>),
}

/// Produce the review payload for the given source.
///
/// Git failures propagate; unreadable files in files mode do not (each
/// contributes an empty block instead).
pub async fn collect(source: &DiffSource, repo: &Path) -> Result<String, DiffError> {
    match source {
        DiffSource::Staged => Ok(git::staged_diff(repo).await?.trim().to_string()),
        DiffSource::Branch { source, target } => {
            Ok(git::branch_diff(repo, target, source).await?.trim().to_string())
        }
        DiffSource::Files(paths) => Ok(files::concat_files(paths).await),
    }
}

/// Whitespace-only or empty payloads mean "nothing to review".
pub fn is_blank(diff: &str) -> bool {
    diff.trim().is_empty()
}
