//! Command-line interface: argument parsing, wiring, and error exit.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use crate::domain::errors::{SyncError, SyncResult};
use crate::infrastructure::config::CredentialsLoader;
use crate::infrastructure::github::{GithubClient, GithubClientConfig};
use crate::infrastructure::sheets::{SheetsClient, SheetsClientConfig};
use crate::services::SyncOrchestrator;

/// Sync open GitHub issues into per-label Google Sheets worksheets.
#[derive(Debug, Parser)]
#[command(name = "sheetsync", version, about)]
pub struct Cli {
    /// Path to the JSON credentials file (gh_token, sheet_key, google_creds).
    pub credentials: PathBuf,

    /// GitHub repository owner.
    #[arg(long, default_value = "eclipse")]
    pub owner: String,

    /// GitHub repository name.
    #[arg(long, default_value = "che")]
    pub repo: String,
}

/// Load credentials, wire the adapters, and run the sync.
pub async fn run(cli: Cli) -> SyncResult<()> {
    let credentials = CredentialsLoader::load(&cli.credentials)?;

    let github = GithubClient::new(GithubClientConfig {
        token: credentials.gh_token.clone(),
        ..Default::default()
    })?;
    let sheets = SheetsClient::new(SheetsClientConfig::new(
        credentials.sheet_key.clone(),
        credentials.google_creds.clone(),
    ))?;

    SyncOrchestrator::new(&github, &sheets)
        .run(&cli.owner, &cli.repo)
        .await
}

/// Log the failure and produce the non-zero exit code.
pub fn handle_error(err: &SyncError) -> ExitCode {
    error!("{err}");
    ExitCode::FAILURE
}
