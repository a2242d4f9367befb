use clap::Parser;
use menu_tree::cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so MENU_API_URL, MENU_API_TOKEN, etc. are picked up
    let _ = dotenvy::dotenv();

    let config = menu_tree::config::config();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("Starting menu CLI in {:?} mode", config.environment);

    let cli = Cli::parse();

    if let Err(e) = menu_tree::cli::run(cli).await {
        match std::env::var("CLI_VERBOSE").as_deref() {
            Ok("true") | Ok("1") => eprintln!("Error: {e:?}"),
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }

    Ok(())
}
