pub mod icon;
pub mod text;
pub mod html;

use serde::Serialize;

use crate::config::RenderConfig;
use crate::menu::{Icon, MenuItem, MenuOrder, Node};
use crate::types::RenderFormat;

pub use icon::{ClassIconResolver, GlyphIconResolver, IconResolver};
pub use text::TextRenderer;
pub use html::HtmlRenderer;

/// Projected form of one menu item, with its children already in display
/// order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuEntry {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Node>,
    pub label: Label,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privilege: Option<String>,
    /// Parent id as display text; empty when the item has none
    pub parent: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Label {
    Link { text: String, href: String },
    Text { text: String },
}

impl Label {
    pub fn text(&self) -> &str {
        match self {
            Label::Link { text, .. } | Label::Text { text } => text,
        }
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            Label::Link { href, .. } => Some(href),
            Label::Text { .. } => None,
        }
    }
}

/// Project a set of siblings into display entries, sorting every level by
/// effective order. Read-only and recomputed on every call. Items without an
/// id or name are left out together with their children.
pub fn project(items: &[MenuItem], icons: &dyn IconResolver) -> Vec<MenuEntry> {
    MenuOrder::sorted(items)
        .into_iter()
        .filter(|item| {
            if !item.is_well_formed() {
                tracing::warn!("Skipping menu item without id or name (id '{}')", item.id);
            }
            item.is_well_formed()
        })
        .map(|item| project_item(item, icons))
        .collect()
}

fn project_item(item: &MenuItem, icons: &dyn IconResolver) -> MenuEntry {
    let icon = item.icon.as_ref().map(|icon| match icon {
        Icon::Symbolic(name) => icons.resolve(name),
        Icon::Resolved(node) => node.clone(),
    });

    let label = match item.link() {
        Some(href) => Label::Link {
            text: item.name.clone(),
            href: href.to_string(),
        },
        None => Label::Text {
            text: item.name.clone(),
        },
    };

    MenuEntry {
        id: item.id.clone(),
        icon,
        label,
        privilege: item.privilege().map(str::to_string),
        parent: item.parent_id.clone().unwrap_or_default(),
        children: if item.is_leaf() {
            Vec::new()
        } else {
            project(&item.children, icons)
        },
    }
}

pub trait MenuRenderer {
    fn render(&self, entries: &[MenuEntry]) -> String;
}

#[derive(Debug, Clone, Copy)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl MenuRenderer for JsonRenderer {
    fn render(&self, entries: &[MenuEntry]) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(entries)
        } else {
            serde_json::to_string(entries)
        };
        // Entries hold only strings, maps and vectors
        rendered.unwrap_or_else(|e| {
            tracing::error!("Failed to serialize menu entries: {}", e);
            "[]".to_string()
        })
    }
}

/// Project and render `items` with the resolver and renderer `config` selects
pub fn render_menu(items: &[MenuItem], format: RenderFormat, config: &RenderConfig) -> String {
    let resolver = GlyphIconResolver::new(config.glyphs.clone());
    let entries = project(items, &resolver);
    tracing::debug!("Rendering {} top-level menu entries as {:?}", entries.len(), format);

    match format {
        RenderFormat::Text => TextRenderer::new(config.indent).render(&entries),
        RenderFormat::Html => HtmlRenderer::new(&config.html_class_prefix).render(&entries),
        RenderFormat::Json => JsonRenderer { pretty: true }.render(&entries),
    }
}
