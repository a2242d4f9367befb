use clap::Args;
use serde_json::{json, Value};
use std::path::PathBuf;

use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::menu::{decode_items, item_list_mut, Icon, MenuCollection, MenuEvent, MenuItem};
use crate::source::{FileSource, MenuSource};
use crate::types::DocumentFormat;

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(help = "Menu file to append to (created if missing)")]
    pub file: PathBuf,

    #[arg(long, help = "Display label")]
    pub name: String,

    #[arg(long, help = "Item id (defaults to a new UUID)")]
    pub id: Option<String>,

    #[arg(long, help = "Link target")]
    pub url: Option<String>,

    #[arg(long, help = "Icon class name")]
    pub icon: Option<String>,

    #[arg(long, allow_hyphen_values = true, help = "Sort key among siblings")]
    pub order: Option<i64>,

    #[arg(long, help = "Parent item id (display only)")]
    pub parent_id: Option<String>,

    #[arg(long, help = "Privilege name shown next to the item")]
    pub privilege: Option<String>,
}

impl AddArgs {
    fn into_item(self) -> anyhow::Result<MenuItem> {
        if self.name.trim().is_empty() {
            return Err(anyhow::anyhow!("Menu item name cannot be empty"));
        }
        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        Ok(MenuItem {
            url: self.url.filter(|u| !u.is_empty()),
            icon: self.icon.filter(|i| !i.is_empty()).map(Icon::Symbolic),
            order: self.order,
            parent_id: self.parent_id,
            required_privilege: self.privilege.filter(|p| !p.is_empty()),
            ..MenuItem::new(id, self.name)
        })
    }
}

pub async fn handle(args: AddArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let source = FileSource::new(args.file.clone());
    let format = source.format()?;

    // The file is edited in place; the collection only checks the new item
    // against what is already there
    let (mut document, mut collection) = if source.path().exists() {
        let document = source.read_document().await?;
        let decoded = decode_items(&document)?;
        if !decoded.is_clean() {
            return Err(anyhow::anyhow!(
                "{} contains {} malformed item(s); run `menu validate` and fix them first",
                source.describe(),
                decoded.skipped.len()
            ));
        }
        (document, MenuCollection::from_items(decoded.items)?)
    } else {
        (Value::Array(Vec::new()), MenuCollection::new())
    };

    let item = args.into_item()?;
    let id = item.id.clone();
    let name = item.name.clone();
    let record = serde_json::to_value(&item)?;
    collection.apply(MenuEvent::Created(item))?;
    item_list_mut(&mut document)?.push(record);

    let content = match format {
        DocumentFormat::Json => serde_json::to_string_pretty(&document)? + "\n",
        DocumentFormat::Yaml => serde_yaml::to_string(&document)?,
    };
    tokio::fs::write(source.path(), content).await?;
    tracing::info!("Added menu item '{}' to {}", id, source.describe());

    output_success(
        &output_format,
        &format!("Menu item '{}' added with id {}", name, id),
        Some(json!({ "id": id, "file": source.describe() })),
    )
}
