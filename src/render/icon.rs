use std::collections::BTreeMap;

use crate::menu::Node;

/// Turns a symbolic icon name into a renderable node
pub trait IconResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Node;
}

/// `fa-home` -> `<i class="fa-home"></i>`
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassIconResolver;

impl IconResolver for ClassIconResolver {
    fn resolve(&self, name: &str) -> Node {
        Node::element("i").attr("class", name)
    }
}

/// Resolves known names to a glyph wrapped in a span; unknown names fall
/// back to the class form.
#[derive(Debug, Clone, Default)]
pub struct GlyphIconResolver {
    glyphs: BTreeMap<String, String>,
}

impl GlyphIconResolver {
    pub fn new(glyphs: BTreeMap<String, String>) -> Self {
        Self { glyphs }
    }
}

impl IconResolver for GlyphIconResolver {
    fn resolve(&self, name: &str) -> Node {
        match self.glyphs.get(name) {
            Some(glyph) => Node::element("span")
                .attr("class", name)
                .child(Node::text(glyph.as_str())),
            None => ClassIconResolver.resolve(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_resolver_falls_back_to_class() {
        let resolver = GlyphIconResolver::new([("fa-home".to_string(), "⌂".to_string())].into());
        let home = resolver.resolve("fa-home");
        assert_eq!(home.class(), Some("fa-home"));
        assert_eq!(home.text_content(), "⌂");
        assert_eq!(resolver.resolve("fa-user"), Node::element("i").attr("class", "fa-user"));
    }
}
