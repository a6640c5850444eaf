//! Persisted user settings: load, partial-merge update, save.
//!
//! A single pretty-printed JSON file in the user's home directory holds the
//! API key, model name, and the two system prompts. Any field missing from
//! the file is filled from built-in defaults, so the file is never required
//! to be complete. Read and parse failures degrade to defaults with a
//! warning on stderr; they never abort a command.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants;
use crate::env::Env;

/// Errors during settings persistence.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to write settings file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// User settings, persisted as camelCase JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// API key for the chat endpoint. Falls back to the environment when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,

    /// Chat model identifier.
    pub model: String,

    /// System prompt used for code review.
    pub prompt: String,

    /// System prompt used for commit-message generation.
    pub commit_prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            model: constants::DEFAULT_MODEL.to_string(),
            prompt: constants::DEFAULT_REVIEW_PROMPT.to_string(),
            commit_prompt: constants::DEFAULT_COMMIT_PROMPT.to_string(),
        }
    }
}

impl Settings {
    /// Apply a partial update: set fields overwrite, everything else keeps
    /// its prior value.
    pub fn merged(mut self, update: SettingsUpdate) -> Self {
        if let Some(key) = update.openai_api_key {
            self.openai_api_key = Some(key);
        }
        if let Some(model) = update.model {
            self.model = model;
        }
        if let Some(prompt) = update.prompt {
            self.prompt = prompt;
        }
        if let Some(commit_prompt) = update.commit_prompt {
            self.commit_prompt = commit_prompt;
        }
        self
    }

    /// Copy with the API key replaced by a fixed-length mask.
    ///
    /// An unset key stays unset, so it serializes as absent rather than as
    /// a mask for a key that does not exist.
    pub fn masked(&self) -> Self {
        Self {
            openai_api_key: self
                .openai_api_key
                .as_ref()
                .map(|_| constants::KEY_MASK.to_string()),
            ..self.clone()
        }
    }

    /// Resolve the API key: the persisted key wins, then the environment.
    ///
    /// Blank values are treated as unset.
    pub fn resolve_api_key(&self, env: &Env) -> Option<String> {
        self.openai_api_key
            .clone()
            .or_else(|| env.var(constants::ENV_API_KEY).ok())
            .filter(|key| !key.trim().is_empty())
    }
}

/// Partial settings: the CLI update payload and also the parse target for
/// the persisted file, so a sparse file merges cleanly onto defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsUpdate {
    pub openai_api_key: Option<String>,
    pub model: Option<String>,
    pub prompt: Option<String>,
    pub commit_prompt: Option<String>,
}

impl SettingsUpdate {
    /// Returns `true` when no field is set.
    pub fn is_empty(&self) -> bool {
        self.openai_api_key.is_none()
            && self.model.is_none()
            && self.prompt.is_none()
            && self.commit_prompt.is_none()
    }
}

/// File-backed settings store.
///
/// No locking: concurrent CLI invocations could race on the file, which is
/// acceptable for an interactive single-user tool.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store rooted at `~/.aair-settings.json`.
    ///
    /// `None` when the home directory cannot be determined.
    pub fn from_home() -> Option<Self> {
        dirs::home_dir().map(|home| Self {
            path: home.join(constants::SETTINGS_FILENAME),
        })
    }

    /// Store backed by an explicit path (tests).
    pub fn new_with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// The settings file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read settings, merging the file contents over defaults.
    ///
    /// A missing file yields pure defaults silently; an unreadable or
    /// unparsable file yields defaults with a warning.
    pub fn load(&self) -> Settings {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Settings::default();
            }
            Err(e) => {
                eprintln!(
                    "Warning: failed to read settings file {}: {e}",
                    self.path.display()
                );
                return Settings::default();
            }
        };

        match serde_json::from_str::<SettingsUpdate>(&content) {
            Ok(partial) => Settings::default().merged(partial),
            Err(e) => {
                eprintln!(
                    "Warning: failed to parse settings file {}: {e}",
                    self.path.display()
                );
                Settings::default()
            }
        }
    }

    /// Overwrite the file wholesale with pretty-printed JSON.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, json + "\n").map_err(|source| SettingsError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Load, merge the partial update on top, and persist the result.
    ///
    /// A failed write is logged as a warning, not raised; the merged
    /// in-memory settings are returned either way so the caller can still
    /// display them.
    pub fn update(&self, update: SettingsUpdate) -> Settings {
        let merged = self.load().merged(update);
        if let Err(e) = self.save(&merged) {
            eprintln!("Warning: {e}");
        }
        merged
    }
}
