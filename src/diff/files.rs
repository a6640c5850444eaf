//! Files mode: concatenate full file contents for review.

use std::path::PathBuf;

/// Read each file and join the contents into one payload.
///
/// Each readable file becomes a block headed by its base name; blocks are
/// joined with a `---` delimiter line. A read failure is logged and that
/// file contributes an empty block — the remaining files are still
/// included.
pub async fn concat_files(paths: &[PathBuf]) -> String {
    let mut blocks = Vec::with_capacity(paths.len());

    for path in paths {
        match tokio::fs::read_to_string(path).await {
            Ok(content) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                blocks.push(format!("File: {name}\n\n{content}\n"));
            }
            Err(e) => {
                eprintln!("Warning: failed to read file {}: {e}", path.display());
                blocks.push(String::new());
            }
        }
    }

    blocks.join("\n---\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn single_file_block() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("lib.rs");
        std::fs::write(&file, "pub fn f() {}\n").unwrap();

        let payload = concat_files(&[file]).await;
        assert!(payload.starts_with("File: lib.rs\n\n"));
        assert!(payload.contains("pub fn f() {}"));
    }

    #[tokio::test]
    async fn multiple_files_joined_with_delimiter() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.rs");
        let b = dir.path().join("b.rs");
        std::fs::write(&a, "// a\n").unwrap();
        std::fs::write(&b, "// b\n").unwrap();

        let payload = concat_files(&[a, b]).await;
        assert!(payload.contains("File: a.rs"));
        assert!(payload.contains("File: b.rs"));
        assert_eq!(payload.matches("\n---\n\n").count(), 1);
    }

    #[tokio::test]
    async fn unreadable_file_contributes_empty_block() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.rs");
        std::fs::write(&good, "// good\n").unwrap();
        let missing = dir.path().join("missing.rs");

        let payload = concat_files(&[good.clone(), missing, good]).await;
        // Three blocks: two readable, one empty in the middle
        assert_eq!(payload.matches("\n---\n\n").count(), 2);
        assert_eq!(payload.matches("File: good.rs").count(), 2);
        assert!(!payload.contains("missing.rs"));
    }

    #[tokio::test]
    async fn no_files_yields_empty_payload() {
        let payload = concat_files(&[]).await;
        assert!(payload.is_empty());
    }
}
