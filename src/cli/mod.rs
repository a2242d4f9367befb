pub mod commands;
pub mod config;
pub mod utils;

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "menu")]
#[command(about = "Menu CLI - Render and maintain project console navigation menus")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Render a menu tree as text, HTML or JSON")]
    Render(commands::render::RenderArgs),

    #[command(about = "Check a menu document for malformed items, duplicate ids and cycles")]
    Validate(commands::validate::ValidateArgs),

    #[command(about = "Append a new top-level item to a menu file")]
    Add(commands::add::AddArgs),

    #[command(about = "Remote menu API selection")]
    Remote {
        #[command(subcommand)]
        cmd: commands::remote::RemoteCommands,
    },

    #[command(about = "Bearer token management")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },
}

/// Where to read a menu from
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    #[arg(help = "Menu file (.json, .yaml or .yml)")]
    pub input: Option<PathBuf>,

    #[arg(long, conflicts_with = "input", help = "Fetch the menu from the remote API")]
    pub remote: bool,

    #[arg(long, help = "Treat the document as a flat list and nest items by parentId")]
    pub flat: bool,
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
        Commands::Render(args) => commands::render::handle(args, output_format).await,
        Commands::Validate(args) => commands::validate::handle(args, output_format).await,
        Commands::Add(args) => commands::add::handle(args, output_format).await,
        Commands::Remote { cmd } => commands::remote::handle(cmd, output_format).await,
        Commands::Auth { cmd } => commands::auth::handle(cmd, output_format).await,
    }
}
