use clap::Args;

use crate::cli::utils::load_menu;
use crate::cli::{OutputFormat, SourceArgs};
use crate::config::config;
use crate::render::render_menu;
use crate::types::RenderFormat;

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[arg(long, value_enum, help = "Output format (defaults to MENU_RENDER_FORMAT)")]
    pub format: Option<RenderFormat>,
}

pub async fn handle(args: RenderArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let (items, _decoded) = load_menu(&args.source).await?;

    // --json without --format means JSON entries
    let format = args.format.unwrap_or(match output_format {
        OutputFormat::Json => RenderFormat::Json,
        OutputFormat::Text => config().render.format,
    });

    let rendered = render_menu(&items, format, &config().render);
    if rendered.ends_with('\n') || rendered.is_empty() {
        print!("{}", rendered);
    } else {
        println!("{}", rendered);
    }
    Ok(())
}
