use clap::Subcommand;
use serde_json::json;

use crate::cli::config::{load_auth_config, save_auth_config, AuthConfig};
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Store a bearer token for remote menu requests")]
    Login {
        #[arg(long, help = "Bearer token issued by the project API")]
        token: String,
    },

    #[command(about = "Remove the stored token")]
    Logout,

    #[command(about = "Show whether a token is stored")]
    Status,
}

pub async fn handle(cmd: AuthCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Login { token } => {
            let token = token.trim().to_string();
            if token.is_empty() {
                return Err(anyhow::anyhow!("Token cannot be empty"));
            }

            let mut auth = load_auth_config()?;
            auth.set(token);
            save_auth_config(&auth)?;
            output_success(&output_format, "Token stored", None)
        }
        AuthCommands::Logout => {
            save_auth_config(&AuthConfig::default())?;
            output_success(&output_format, "Token removed", None)
        }
        AuthCommands::Status => {
            let auth = load_auth_config()?;
            match output_format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&json!({
                            "authenticated": auth.token.is_some(),
                            "token": auth.masked_token(),
                            "saved_at": auth.saved_at,
                        }))?
                    );
                }
                OutputFormat::Text => match (auth.masked_token(), auth.saved_at) {
                    (Some(token), Some(saved_at)) => {
                        println!("Token: {} (saved {})", token, saved_at.format("%Y-%m-%d %H:%M:%S UTC"))
                    }
                    (Some(token), None) => println!("Token: {}", token),
                    (None, _) => println!("Not logged in"),
                },
            }
            Ok(())
        }
    }
}
