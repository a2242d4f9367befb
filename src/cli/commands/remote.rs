use clap::Subcommand;
use serde_json::json;
use url::Url;

use crate::cli::config::{load_remote_config, save_remote_config, RemoteConfig};
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config::config;

#[derive(Subcommand)]
pub enum RemoteCommands {
    #[command(about = "Use this API base URL for --remote")]
    Set {
        #[arg(help = "API base URL, e.g. https://pm.example.com")]
        url: String,
    },

    #[command(about = "Show the remote menu endpoint in use")]
    Show,

    #[command(about = "Forget the stored remote and fall back to MENU_API_URL")]
    Clear,
}

pub async fn handle(cmd: RemoteCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        RemoteCommands::Set { url } => {
            let parsed = Url::parse(&url).map_err(|e| anyhow::anyhow!("Invalid URL '{}': {}", url, e))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(anyhow::anyhow!("Remote URL must use http or https"));
            }

            let mut remote = load_remote_config()?;
            remote.set(parsed.to_string());
            save_remote_config(&remote)?;

            output_success(
                &output_format,
                &format!("Remote set to {}", parsed),
                Some(json!({ "base_url": parsed.to_string() })),
            )
        }
        RemoteCommands::Show => {
            let remote = load_remote_config()?;
            let settings = &config().source;
            let (base_url, origin) = match (&remote.base_url, &settings.base_url) {
                (Some(url), _) => (Some(url.clone()), "stored"),
                (None, Some(url)) => (Some(url.clone()), "config"),
                (None, None) => (None, "none"),
            };

            match output_format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&json!({
                            "base_url": base_url,
                            "menus_path": settings.menus_path,
                            "origin": origin,
                            "updated_at": remote.updated_at,
                        }))?
                    );
                }
                OutputFormat::Text => match base_url {
                    Some(url) => {
                        println!("Remote: {} ({})", url, origin);
                        println!("Menus path: {}", settings.menus_path);
                    }
                    None => println!("No remote configured"),
                },
            }
            Ok(())
        }
        RemoteCommands::Clear => {
            save_remote_config(&RemoteConfig::default())?;
            output_success(&output_format, "Stored remote cleared", None)
        }
    }
}
