use super::{Label, MenuEntry, MenuRenderer};
use crate::menu::Node;

/// Indented outline, one line per entry:
///
/// ```text
/// - {fa-home} [Dashboard](/dashboard) parent=
///   - Reports requires=REPORT_VIEW parent=dashboard
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    indent: usize,
}

impl TextRenderer {
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    fn write_level(&self, out: &mut String, entries: &[MenuEntry], depth: usize) {
        for entry in entries {
            out.push_str(&self.line(entry, depth));
            out.push('\n');
            self.write_level(out, &entry.children, depth + 1);
        }
    }

    fn line(&self, entry: &MenuEntry, depth: usize) -> String {
        let mut parts = Vec::with_capacity(4);
        if let Some(icon) = entry.icon.as_ref().map(icon_text).filter(|s| !s.is_empty()) {
            parts.push(icon);
        }
        parts.push(match &entry.label {
            Label::Link { text, href } => format!("[{}]({})", text, href),
            Label::Text { text } => text.clone(),
        });
        if let Some(privilege) = &entry.privilege {
            parts.push(format!("requires={}", privilege));
        }
        parts.push(format!("parent={}", entry.parent));

        format!("{}- {}", " ".repeat(depth * self.indent), parts.join(" "))
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(2)
    }
}

impl MenuRenderer for TextRenderer {
    fn render(&self, entries: &[MenuEntry]) -> String {
        let mut out = String::new();
        self.write_level(&mut out, entries, 0);
        out
    }
}

/// Glyph text when the node carries any, otherwise `{class}`
fn icon_text(node: &Node) -> String {
    let content = node.text_content();
    if !content.trim().is_empty() {
        return content;
    }
    node.class().map(|c| format!("{{{}}}", c)).unwrap_or_default()
}
