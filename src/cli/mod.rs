pub mod client;
pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Parser)]
#[command(name = "notes")]
#[command(about = "Notes CLI - Command-line client for the Notes API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[arg(long, global = true, env = "NOTES_API_URL", default_value = DEFAULT_API_URL, help = "Base URL of the Notes API")]
    pub url: String,

    #[arg(long, global = true, env = "NOTES_TOKEN", hide_env_values = true, help = "Bearer token for protected endpoints")]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Authentication and token management")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },

    #[command(about = "Create, list, update and delete notes")]
    Note {
        #[command(subcommand)]
        cmd: commands::note::NoteCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Auth { cmd } => commands::auth::handle(cmd, output_format).await,
        Commands::Note { cmd } => {
            let token = cli
                .token
                .ok_or_else(|| anyhow::anyhow!("No token set; pass --token or set NOTES_TOKEN"))?;
            let client = client::NotesClient::new(&cli.url, token)?;
            commands::note::handle(cmd, &client, output_format).await
        }
    }
}
