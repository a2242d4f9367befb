use serde_json::{json, Value};

use crate::cli::config::{load_auth_config, load_remote_config};
use crate::cli::{OutputFormat, SourceArgs};
use crate::config::config;
use crate::menu::{Decoded, MenuItem, MenuTreeBuilder};
use crate::source::{FileSource, HttpSource, MenuSource};

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let (Some(Value::Object(extra)), Some(obj)) = (data, response.as_object_mut()) {
                obj.extend(extra);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Pick the source named by the arguments: a file, or the remote API with
/// the stored remote and token
pub fn resolve_source(args: &SourceArgs) -> anyhow::Result<Box<dyn MenuSource>> {
    if let Some(path) = &args.input {
        return Ok(Box::new(FileSource::new(path.clone())));
    }
    if !args.remote {
        return Err(anyhow::anyhow!("No menu source given; pass a file path or --remote"));
    }

    // A remote chosen with `menu remote set` beats the configured default;
    // MENU_API_TOKEN beats a stored login
    let settings = &config().source;
    let remote = load_remote_config()?;
    let token = settings.token.clone().or(load_auth_config()?.token);

    let source = HttpSource::from_config(settings, remote.base_url.as_deref(), token)?;
    Ok(Box::new(source))
}

/// Load and decode, then assemble by `parentId` when `flat` is set
pub async fn load_menu(args: &SourceArgs) -> anyhow::Result<(Vec<MenuItem>, Decoded)> {
    let source = resolve_source(args)?;
    tracing::info!("Loading menu from {}", source.describe());

    let mut decoded = source.load().await?;
    if !decoded.is_clean() {
        tracing::warn!("Skipped {} malformed menu item(s)", decoded.skipped.len());
    }

    let items = std::mem::take(&mut decoded.items);
    let items = if args.flat {
        MenuTreeBuilder::from_flat(items)?.build()
    } else {
        items
    };
    Ok((items, decoded))
}

/// Number of items in the forest, descendants included
pub fn count_items(items: &[MenuItem]) -> usize {
    items.iter().map(|item| 1 + count_items(&item.children)).sum()
}
