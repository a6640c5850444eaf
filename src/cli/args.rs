//! Clap argument types.

use clap::Parser;
use std::path::PathBuf;

use aair::settings::SettingsUpdate;

/// AI-assisted code review CLI.
#[derive(Parser, Debug)]
#[command(
    name = "aair",
    version = aair::constants::VERSION,
    about = "AI-assisted code review for git diffs",
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands. Running without a subcommand reviews staged changes.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Review staged changes (default).
    Review,

    /// Review the full contents of specific files.
    Files(FilesArgs),

    /// Review the diff between two branches.
    Branch(BranchArgs),

    /// Generate a commit message from staged changes and confirm it interactively.
    Commit,

    /// Show or update persisted settings.
    Settings(SettingsArgs),
}

/// Arguments for the `files` subcommand.
#[derive(Parser, Debug)]
pub struct FilesArgs {
    /// Files to review.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Arguments for the `branch` subcommand.
#[derive(Parser, Debug)]
pub struct BranchArgs {
    /// Source branch (with the changes under review).
    pub source: String,

    /// Target branch to compare against.
    #[arg(default_value = "main")]
    pub target: String,
}

/// Arguments for the `settings` subcommand.
#[derive(Parser, Debug)]
pub struct SettingsArgs {
    /// Set the OpenAI API key.
    #[arg(short = 'k', long = "key")]
    pub key: Option<String>,

    /// Set the chat model.
    #[arg(short = 'm', long = "model")]
    pub model: Option<String>,

    /// Set the review system prompt.
    #[arg(short = 'p', long = "prompt")]
    pub prompt: Option<String>,

    /// Set the commit-message system prompt.
    #[arg(short = 'c', long = "commit-prompt")]
    pub commit_prompt: Option<String>,

    /// Show current settings.
    #[arg(short = 's', long = "show")]
    pub show: bool,
}

impl SettingsArgs {
    /// Convert the update flags into a partial settings object.
    pub fn to_update(&self) -> SettingsUpdate {
        SettingsUpdate {
            openai_api_key: self.key.clone(),
            model: self.model.clone(),
            prompt: self.prompt.clone(),
            commit_prompt: self.commit_prompt.clone(),
        }
    }
}
