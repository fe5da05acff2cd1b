use crate::cli;
use crate::config;
use crate::github::corpus::{self, Corpus};
use crate::output;
use crate::selector;
use crate::storage::{self, SnapshotLocation};
use anyhow::Context;
use serde_json::Value;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

const HTTP_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);
const USER_AGENT: &str = "minutes-data";

/// Runs one command.
///
/// `base_dir` is where the project config is looked up and relative snapshot
/// paths are resolved. The data module goes to `stdout`, the issue count
/// to `stderr`.
pub async fn run(
    args: Vec<String>,
    base_dir: &Path,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> anyhow::Result<()> {
    match cli::parser::parse_args(&args) {
        cli::parser::Command::Export { snapshot, repo } => {
            let mut overrides = HashMap::new();
            if let Some(snapshot) = snapshot {
                overrides.insert(config::ConfigKey::Snapshot, Value::String(snapshot));
            }
            if let Some(repo) = repo {
                overrides.insert(config::ConfigKey::Repository, Value::String(repo));
            }

            let project_config = config::load_project_config(base_dir)?;
            let settings =
                config::resolve_settings(&config::update_config(&project_config, &overrides))?;
            tracing::info!(
                repository = %format!("{}/{}", settings.owner, settings.repo),
                snapshot = %settings.snapshot,
                "exporting proposal issues"
            );

            let location = SnapshotLocation::parse(&settings.snapshot, base_dir);
            let corpus = acquire_corpus(&location)
                .await
                .with_context(|| format!("Failed to load snapshot from {location}"))?;
            let repo = corpus.repo(&settings.owner, &settings.repo)?;

            let issues = selector::select_issues(repo)?;
            output::export(&issues, stdout, stderr)?;
        }
        cli::parser::Command::Help => {
            writeln!(stdout, "{}", cli::parser::USAGE)?;
        }
        cli::parser::Command::Unknown(reason) => {
            return Err(anyhow::anyhow!(
                "Invalid command or arguments: {reason}\n{}",
                cli::parser::USAGE
            ));
        }
    }
    Ok(())
}

async fn acquire_corpus(location: &SnapshotLocation) -> anyhow::Result<Corpus> {
    let content = match location {
        SnapshotLocation::Url(url) => {
            let client = reqwest::Client::builder()
                .timeout(HTTP_TIMEOUT)
                .build()
                .context("Failed to create HTTP client")?;
            fetch_snapshot(&client, url).await?
        }
        SnapshotLocation::File(path) => storage::read_snapshot_file(path)?,
    };
    tracing::debug!(bytes = content.len(), "snapshot acquired");
    corpus::parse_corpus(&content)
}

async fn fetch_snapshot(client: &reqwest::Client, url: &str) -> anyhow::Result<Vec<u8>> {
    let response = client
        .get(url)
        .header("Accept", "application/json")
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(anyhow::anyhow!(
            "Failed to fetch snapshot: HTTP {}",
            response.status()
        ));
    }

    Ok(response.bytes().await?.to_vec())
}
