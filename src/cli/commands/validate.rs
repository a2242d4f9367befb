use clap::Args;
use serde_json::json;

use crate::cli::utils::{count_items, resolve_source};
use crate::cli::{OutputFormat, SourceArgs};
use crate::error::MenuError;
use crate::menu::{MenuCollection, MenuTreeBuilder};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub async fn handle(args: ValidateArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let source = resolve_source(&args.source)?;
    let decoded = source.load().await?;
    let skipped: Vec<String> = decoded.skipped.iter().map(ToString::to_string).collect();

    let structure = if args.source.flat {
        MenuTreeBuilder::from_flat(decoded.items).map(MenuTreeBuilder::build)
    } else {
        MenuCollection::from_items(decoded.items).map(MenuCollection::into_items)
    };

    let (total, structural_error) = match structure {
        Ok(items) => (count_items(&items), None),
        Err(e) if e.is_structural() => (0, Some(e)),
        Err(e) => return Err(e.into()),
    };

    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "source": source.describe(),
                    "valid": structural_error.is_none(),
                    "items": total,
                    "skipped": skipped,
                    "error": structural_error.as_ref().map(ToString::to_string),
                }))?
            );
        }
        OutputFormat::Text => {
            for message in &skipped {
                println!("! skipped: {}", message);
            }
            match &structural_error {
                None => println!("✓ {} menu item(s) valid in {}", total, source.describe()),
                Some(e) => println!("✗ {}", e),
            }
        }
    }

    match structural_error {
        Some(MenuError::CyclicStructure(id)) => Err(anyhow::anyhow!("menu contains a cycle through '{}'", id)),
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
