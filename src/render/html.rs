use super::{Label, MenuEntry, MenuRenderer};
use crate::menu::Node;

/// Elements dropped from resolved icons along with their content
const BLOCKED_TAGS: [&str; 6] = ["script", "style", "iframe", "object", "embed", "link"];

/// Attributes whose value is a URL and must pass [`is_safe_url`]
const URL_ATTRS: [&str; 4] = ["href", "src", "xlinkhref", "action"];

/// Nested `<ul>`/`<li>` markup. Class names derive from a prefix so the
/// admin console and the portal can style their menus separately.
///
/// Menu documents may come from a remote API, so text is escaped, links with
/// a scheme other than http, https or mailto are rendered as plain text, and
/// resolved icons lose script-capable elements and `on*` handlers.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    prefix: String,
}

impl HtmlRenderer {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    fn write_list(&self, out: &mut String, entries: &[MenuEntry]) {
        if entries.is_empty() {
            return;
        }
        let p = escape(&self.prefix);
        out.push_str(&format!("<ul class=\"{}\">", p));
        for entry in entries {
            out.push_str(&format!("<li class=\"{}-item\" data-id=\"{}\">", p, escape(&entry.id)));
            if let Some(icon) = &entry.icon {
                write_node(out, icon);
            }
            match &entry.label {
                Label::Link { text, href } if is_safe_url(href) => {
                    out.push_str(&format!("<a class=\"{}-link\" href=\"{}\">{}</a>", p, escape(href), escape(text)));
                }
                Label::Link { text, href } => {
                    tracing::warn!("Dropping link with disallowed scheme on menu item '{}': {}", entry.id, href);
                    out.push_str(&format!("<span class=\"{}-text\">{}</span>", p, escape(text)));
                }
                Label::Text { text } => {
                    out.push_str(&format!("<span class=\"{}-text\">{}</span>", p, escape(text)));
                }
            }
            if let Some(privilege) = &entry.privilege {
                out.push_str(&format!("<span class=\"{}-privilege\">{}</span>", p, escape(privilege)));
            }
            out.push_str(&format!("<span class=\"{}-parent\">Parent: {}</span>", p, escape(&entry.parent)));
            self.write_list(out, &entry.children);
            out.push_str("</li>");
        }
        out.push_str("</ul>");
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new("menu")
    }
}

impl MenuRenderer for HtmlRenderer {
    fn render(&self, entries: &[MenuEntry]) -> String {
        let mut out = String::new();
        self.write_list(&mut out, entries);
        out
    }
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text { text } => out.push_str(&escape(text)),
        Node::Element { tag, attrs, children } => {
            let tag = sanitize_tag(tag);
            if BLOCKED_TAGS.contains(&tag.to_ascii_lowercase().as_str()) {
                tracing::warn!("Dropping <{}> element from menu icon", tag);
                return;
            }
            out.push_str(&format!("<{}", tag));
            for (key, value) in attrs {
                let key = sanitize_tag(key);
                let lower = key.to_ascii_lowercase();
                if lower.starts_with("on") || (URL_ATTRS.contains(&lower.as_str()) && !is_safe_url(value)) {
                    continue;
                }
                out.push_str(&format!(" {}=\"{}\"", key, escape(value)));
            }
            out.push('>');
            for child in children {
                write_node(out, child);
            }
            out.push_str(&format!("</{}>", tag));
        }
    }
}

/// Relative URLs, or absolute ones using http, https or mailto
pub fn is_safe_url(url: &str) -> bool {
    // Browsers ignore whitespace and control characters inside a scheme
    let compact: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    let scheme_end = compact.find(|c| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(i) if compact[i..].starts_with(':') => {
            matches!(&compact[..i], "http" | "https" | "mailto")
        }
        _ => true,
    }
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Tag and attribute names from documents are reduced to `[A-Za-z0-9-]`
fn sanitize_tag(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    if cleaned.is_empty() {
        "span".to_string()
    } else {
        cleaned
    }
}
