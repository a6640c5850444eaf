//! App-wide constants.
//!
//! Centralises the tool name, settings file location, environment variable
//! names, and prompt defaults so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "aair";

/// Crate version, reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings filename, resolved against the user's home directory.
pub const SETTINGS_FILENAME: &str = ".aair-settings.json";

/// Fixed-length mask shown in place of a configured API key.
pub const KEY_MASK: &str = "********";

// ── Environment variable names ──────────────────────────────────────

/// Fallback API key variable, read when no key is persisted.
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";

// ── Defaults ────────────────────────────────────────────────────────

/// Chat model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4";

/// System prompt for code review.
pub const DEFAULT_REVIEW_PROMPT: &str = "You are a code-review bot. \
You are receiving the output of a git diff. \
Please respond with feedback using markdown formatting.";

/// System prompt for commit-message generation.
pub const DEFAULT_COMMIT_PROMPT: &str = "You are a commit message generator. \
Based on the git diff provided, generate a clear and concise commit message following these rules:
1. First line is a brief summary (max 50 chars)
2. Leave one blank line after the summary
3. Provide bullet points of key changes
4. Focus on WHAT and WHY, not HOW
5. Use imperative mood (\"Add feature\" not \"Added feature\")";
