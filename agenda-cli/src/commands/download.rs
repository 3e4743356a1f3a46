use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::client::{ApiClient, EventApi};
use crate::ui;

pub async fn run(api: ApiClient, remote_path: &str, out: Option<PathBuf>) -> Result<()> {
    let spinner = ui::spinner(format!("Downloading {}", remote_path));
    let bytes = api.download_file(remote_path).await;
    spinner.finish_and_clear();
    let bytes = bytes?;

    let out = out.unwrap_or_else(|| default_target(remote_path));
    tokio::fs::write(&out, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", out.display()))?;

    println!(
        "{}",
        format!("Saved {} ({} bytes)", out.display(), bytes.len()).green()
    );
    Ok(())
}

/// Default to the attachment's own file name in the current directory.
fn default_target(remote_path: &str) -> PathBuf {
    Path::new(remote_path)
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("attachment"))
}
