//! aair — AI-assisted code review CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use aair::commit;
use aair::constants;
use aair::diff;
use aair::env::Env;
use aair::output;
use aair::provider;
use aair::settings;

use std::path::Path;
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;

use cli::args::{Cli, Command, SettingsArgs};
use diff::DiffSource;
use provider::openai::OpenAiProvider;
use settings::{Settings, SettingsStore};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Review) {
        Command::Review => run_review(DiffSource::Staged).await,
        Command::Files(args) => run_review(DiffSource::Files(args.files)).await,
        Command::Branch(args) => {
            run_review(DiffSource::Branch {
                source: args.source,
                target: args.target,
            })
            .await
        }
        Command::Commit => run_commit().await,
        Command::Settings(args) => run_settings(&args),
    }
}

/// Open the settings store in the user's home directory.
fn settings_store() -> Result<SettingsStore> {
    SettingsStore::from_home().context("could not determine home directory")
}

/// Resolve the provider from settings, falling back to the environment for
/// the API key.
fn resolve_provider(settings: &Settings, env: &Env) -> Result<OpenAiProvider> {
    match settings.resolve_api_key(env) {
        Some(key) => Ok(OpenAiProvider::new(settings.model.clone(), key)),
        None => bail!(
            "OpenAI API key not found. Set it with `{} settings --key <KEY>` or export {}",
            constants::APP_NAME,
            constants::ENV_API_KEY,
        ),
    }
}

/// Review a diff from the given source with the configured review prompt.
async fn run_review(source: DiffSource) -> Result<()> {
    let settings = settings_store()?.load();
    let provider = resolve_provider(&settings, &Env::real())?;

    let diff = diff::collect(&source, Path::new("."))
        .await
        .context("failed to collect diff")?;

    if diff::is_blank(&diff) {
        eprintln!("No changes to review.");
        return Ok(());
    }

    eprintln!("Reviewing changes...\n");
    let response = provider::complete_for_diff(&provider, &settings.prompt, &diff)
        .await
        .context("review request failed")?
        .unwrap_or_default();

    if response.trim().is_empty() {
        eprintln!("The model returned an empty response.");
        return Ok(());
    }

    print!("{}", output::render_block(&response));
    Ok(())
}

/// Generate a commit message from the staged diff and confirm it interactively.
async fn run_commit() -> Result<()> {
    let settings = settings_store()?.load();
    let provider = resolve_provider(&settings, &Env::real())?;

    let repo = Path::new(".");
    let diff = diff::collect(&DiffSource::Staged, repo)
        .await
        .context("failed to collect staged diff")?;

    if diff::is_blank(&diff) {
        eprintln!("No staged changes to commit.");
        return Ok(());
    }

    eprintln!("Generating commit message...\n");
    let message = provider::complete_for_diff(&provider, &settings.commit_prompt, &diff)
        .await
        .context("commit message request failed")?
        .unwrap_or_default();
    let message = message.trim().to_string();

    if message.is_empty() {
        eprintln!("The model returned an empty message; nothing to commit.");
        return Ok(());
    }

    // The stdin lock lives only for the interactive flow and is released
    // on every exit path.
    let decision = {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        commit::run_flow(&mut input, &mut out, &message)
            .context("failed to read interactive input")?
    };

    match decision {
        commit::Decision::Commit(final_message) => {
            diff::git::commit(repo, &final_message)
                .await
                .context("git commit failed")?;
            println!("Commit created.");
        }
        commit::Decision::Cancel => {
            println!("Commit cancelled; no commit was made.");
        }
    }

    Ok(())
}

/// Show or update persisted settings.
fn run_settings(args: &SettingsArgs) -> Result<()> {
    let store = settings_store()?;

    if args.show {
        let settings = store.load();
        println!("Current settings:");
        println!("{}", render_settings(&settings)?);
        return Ok(());
    }

    let update = args.to_update();
    if update.is_empty() {
        eprintln!("Nothing to update. Use --show to display current settings.");
        return Ok(());
    }

    let settings = store.update(update);
    println!("Settings updated successfully!");
    println!("{}", render_settings(&settings)?);
    Ok(())
}

/// Settings as pretty JSON with the API key masked.
fn render_settings(settings: &Settings) -> Result<String> {
    serde_json::to_string_pretty(&settings.masked()).context("failed to render settings")
}
