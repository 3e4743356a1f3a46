use std::path::PathBuf;

use agenda_cli::client::ApiClient;
use agenda_cli::commands;
use agenda_core::GlobalConfig;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Create, edit and delete events on the shared agenda server")]
struct Cli {
    /// Server base URL (overrides the configured one)
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new event
    New {
        /// Event date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Edit an existing event
    Edit { id: String },
    /// Delete an event
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Show one event
    Show { id: String },
    /// Download an attachment by its relative path
    Download {
        path: String,

        /// Output file (defaults to the attachment's file name)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GlobalConfig::load().context("Failed to load config")?;
    let server_url = cli.server.unwrap_or_else(|| config.server_url.clone());
    let api = ApiClient::new(server_url);
    let known = config.collaborators.clone();

    match cli.command {
        Commands::New { date } => {
            let date = date
                .map(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d"))
                .transpose()
                .context("Invalid --date, expected YYYY-MM-DD")?;
            commands::new::run(api, known, date).await
        }
        Commands::Edit { id } => commands::edit::run(api, known, &id).await,
        Commands::Delete { id, yes } => commands::delete::run(api, known, &id, yes).await,
        Commands::Show { id } => commands::show::run(api, &id).await,
        Commands::Download { path, out } => commands::download::run(api, &path, out).await,
    }
}
