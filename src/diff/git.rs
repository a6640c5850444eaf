//! Git CLI wrapper for diffs and commits.
//!
//! Shells out to `git` via `tokio::process::Command`.

use std::path::Path;

use super::DiffError;

/// Run a git subcommand and return its stdout.
async fn run_git(repo: &Path, args: &[&str]) -> Result<String, DiffError> {
    let output = tokio::process::Command::new("git")
        .args(args)
        .current_dir(repo)
        .output()
        .await
        .map_err(|e| DiffError::GitError(format!("failed to run git: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(DiffError::GitError(format!(
            "git {} failed (exit {}): {stderr}",
            args.first().copied().unwrap_or_default(),
            output.status
        )));
    }

    String::from_utf8(output.stdout)
        .map_err(|e| DiffError::GitError(format!("git output is not valid UTF-8: {e}")))
}

/// Diff of currently staged changes.
pub async fn staged_diff(repo: &Path) -> Result<String, DiffError> {
    run_git(repo, &["diff", "--staged"]).await
}

/// Diff between two refs, target first.
pub async fn branch_diff(repo: &Path, target: &str, source: &str) -> Result<String, DiffError> {
    run_git(repo, &["diff", target, source]).await
}

/// Create a commit with the given message.
pub async fn commit(repo: &Path, message: &str) -> Result<(), DiffError> {
    run_git(repo, &["commit", "-m", message]).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a temp git repo with one committed file and return the dir.
    async fn init_repo() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path();

        for args in [
            vec!["init", "-b", "main"],
            vec!["config", "user.email", "test@test.com"],
            vec!["config", "user.name", "Test"],
        ] {
            tokio::process::Command::new("git")
                .args(&args)
                .current_dir(p)
                .output()
                .await
                .unwrap();
        }

        tokio::fs::write(p.join("file.txt"), "hello\n").await.unwrap();
        for args in [vec!["add", "."], vec!["commit", "-m", "init"]] {
            tokio::process::Command::new("git")
                .args(&args)
                .current_dir(p)
                .output()
                .await
                .unwrap();
        }

        dir
    }

    #[tokio::test]
    async fn staged_diff_in_non_git_dir() {
        let dir = tempfile::tempdir().unwrap();
        let result = staged_diff(dir.path()).await;
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("git"), "got: {err}");
    }

    #[tokio::test]
    async fn staged_diff_sees_staged_changes_only() {
        let dir = init_repo().await;
        let p = dir.path();

        tokio::fs::write(p.join("file.txt"), "hello\nworld\n").await.unwrap();

        // Unstaged edit: staged diff stays empty
        let diff = staged_diff(p).await.unwrap();
        assert!(diff.trim().is_empty(), "unstaged edit should not appear");

        tokio::process::Command::new("git")
            .args(["add", "."])
            .current_dir(p)
            .output()
            .await
            .unwrap();

        let diff = staged_diff(p).await.unwrap();
        assert!(diff.contains("world"), "staged edit should appear");
    }

    #[tokio::test]
    async fn branch_diff_between_branches() {
        let dir = init_repo().await;
        let p = dir.path();

        tokio::process::Command::new("git")
            .args(["checkout", "-b", "feature"])
            .current_dir(p)
            .output()
            .await
            .unwrap();
        tokio::fs::write(p.join("file.txt"), "hello\nfeature change\n")
            .await
            .unwrap();
        for args in [vec!["add", "."], vec!["commit", "-m", "change"]] {
            tokio::process::Command::new("git")
                .args(&args)
                .current_dir(p)
                .output()
                .await
                .unwrap();
        }

        let diff = branch_diff(p, "main", "feature").await.unwrap();
        assert!(diff.contains("feature change"));
    }

    #[tokio::test]
    async fn branch_diff_unknown_ref_errors() {
        let dir = init_repo().await;
        let result = branch_diff(dir.path(), "no-such-branch", "main").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn commit_creates_commit_with_message() {
        let dir = init_repo().await;
        let p = dir.path();

        tokio::fs::write(p.join("file.txt"), "hello\nmore\n").await.unwrap();
        tokio::process::Command::new("git")
            .args(["add", "."])
            .current_dir(p)
            .output()
            .await
            .unwrap();

        commit(p, "Fix bug").await.unwrap();

        let log = tokio::process::Command::new("git")
            .args(["log", "-1", "--pretty=%s"])
            .current_dir(p)
            .output()
            .await
            .unwrap();
        let subject = String::from_utf8_lossy(&log.stdout).trim().to_string();
        assert_eq!(subject, "Fix bug");
    }

    #[tokio::test]
    async fn commit_with_nothing_staged_errors() {
        let dir = init_repo().await;
        let result = commit(dir.path(), "empty").await;
        assert!(result.is_err());
    }
}
