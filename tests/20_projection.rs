mod common;

use menu_tree::menu::{decode_items, Icon, MenuItem, Node};
use menu_tree::render::{
    project, ClassIconResolver, GlyphIconResolver, HtmlRenderer, IconResolver, Label, MenuRenderer, TextRenderer,
};
use menu_tree::MenuError;
use serde_json::json;

struct FixedResolver;

impl IconResolver for FixedResolver {
    fn resolve(&self, name: &str) -> Node {
        Node::text(format!("<{}>", name))
    }
}

#[test]
fn url_selects_link_or_text_exclusively() {
    let items = vec![
        MenuItem::new("1", "Linked").with_url("/x"),
        MenuItem::new("2", "Empty").with_url(""),
        MenuItem::new("3", "None"),
    ];
    let entries = project(&items, &ClassIconResolver);

    assert_eq!(entries[0].label, Label::Link { text: "Linked".into(), href: "/x".into() });
    assert_eq!(entries[1].label, Label::Text { text: "Empty".into() });
    assert_eq!(entries[2].label, Label::Text { text: "None".into() });

    let html = HtmlRenderer::default().render(&entries);
    assert_eq!(html.matches("<a ").count(), 1);
    assert_eq!(html.matches("class=\"menu-text\"").count(), 2);
}

#[test]
fn symbolic_icon_goes_through_resolver_and_resolved_icon_does_not() {
    let prebuilt = Node::element("img").attr("src", "/logo.png");
    let items = vec![
        MenuItem::new("1", "Symbolic").with_icon(Icon::Symbolic("fa-star".into())),
        MenuItem::new("2", "Resolved").with_icon(Icon::Resolved(prebuilt.clone())),
        MenuItem::new("3", "Plain"),
    ];
    let entries = project(&items, &FixedResolver);

    assert_eq!(entries[0].icon, Some(Node::text("<fa-star>")));
    assert_eq!(entries[1].icon, Some(prebuilt));
    assert_eq!(entries[2].icon, None);
}

#[test]
fn icons_of_both_shapes_decode_from_documents() {
    let decoded = decode_items(&json!([
        { "id": "1", "name": "A", "icon": "fa-home" },
        { "id": "2", "name": "B", "icon": { "type": "text", "text": "★" } }
    ]))
    .unwrap();
    assert!(decoded.is_clean());
    assert_eq!(decoded.items[0].icon, Some(Icon::Symbolic("fa-home".into())));
    assert_eq!(decoded.items[1].icon, Some(Icon::Resolved(Node::text("★"))));

    let resolver = GlyphIconResolver::new([("fa-home".to_string(), "⌂".to_string())].into());
    let out = TextRenderer::default().render(&project(&decoded.items, &resolver));
    assert_eq!(out, "- ⌂ A parent=\n- ★ B parent=\n");
}

#[test]
fn privilege_annotation_only_when_present() {
    let items = vec![
        MenuItem::new("1", "Admin").with_privilege("ADMIN"),
        MenuItem::new("2", "Blank").with_privilege(""),
        MenuItem::new("3", "Open"),
    ];
    let entries = project(&items, &ClassIconResolver);
    assert_eq!(entries[0].privilege.as_deref(), Some("ADMIN"));
    assert!(entries[1].privilege.is_none());
    assert!(entries[2].privilege.is_none());

    let text = TextRenderer::default().render(&entries);
    assert_eq!(text, "- Admin requires=ADMIN parent=\n- Blank parent=\n- Open parent=\n");

    let html = HtmlRenderer::default().render(&entries);
    assert_eq!(html.matches("menu-privilege").count(), 1);
}

#[test]
fn nesting_mirrors_children_and_leaves_have_none() {
    let items = vec![MenuItem::new("parent", "Parent").with_children(vec![
        MenuItem::new("c1", "Child1").with_parent("parent"),
        MenuItem::new("c2", "Child2").with_parent("parent").with_children(vec![]),
    ])];
    let entries = project(&items, &ClassIconResolver);

    assert_eq!(entries[0].children.len(), 2);
    assert!(entries[0].children.iter().all(|c| c.children.is_empty()));
    assert!(entries[0].children.iter().all(|c| c.parent == "parent"));

    let html = HtmlRenderer::default().render(&entries);
    assert_eq!(html.matches("<ul").count(), 2);
}

#[test]
fn parent_text_is_not_checked_against_structure() {
    let items = vec![MenuItem::new("p", "Parent").with_children(vec![MenuItem::new("c", "Child").with_parent("elsewhere")])];
    let entries = project(&items, &ClassIconResolver);
    assert_eq!(entries[0].children[0].parent, "elsewhere");
}

#[test]
fn malformed_items_are_skipped_and_siblings_survive() {
    let decoded = decode_items(&common::project_menu()).unwrap();
    assert_eq!(decoded.skipped.len(), 1);
    assert!(matches!(
        &decoded.skipped[0],
        MenuError::MalformedItem { path, .. } if path == "[2].children[2]"
    ));

    let entries = project(&decoded.items, &ClassIconResolver);
    let admin = entries.iter().find(|e| e.id == "admin").unwrap();
    assert_eq!(admin.children.len(), 2);
}

#[test]
fn deep_trees_project_fully() {
    let mut item = MenuItem::new("leaf", "Leaf");
    for depth in (0..200).rev() {
        item = MenuItem::new(format!("n{}", depth), format!("Level {}", depth)).with_children(vec![item]);
    }
    let entries = project(&[item], &ClassIconResolver);

    let mut depth = 0;
    let mut cursor = &entries[0];
    while let Some(next) = cursor.children.first() {
        cursor = next;
        depth += 1;
    }
    assert_eq!(depth, 200);
    assert_eq!(cursor.label.text(), "Leaf");
}

#[test]
fn items_without_id_or_name_are_not_displayed() {
    let items = vec![
        MenuItem::new("1", "Home"),
        MenuItem::new("", ""),
        MenuItem::new("3", "  ").with_children(vec![MenuItem::new("3a", "Hidden with parent")]),
        MenuItem::new("4", "Admin").with_children(vec![MenuItem::new("", "No id"), MenuItem::new("4b", "Users")]),
    ];
    let entries = project(&items, &ClassIconResolver);

    let ids: Vec<_> = entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "4"]);
    assert_eq!(entries[1].children.len(), 1);
    assert_eq!(entries[1].children[0].id, "4b");

    let text = TextRenderer::default().render(&entries);
    assert_eq!(text, "- Home parent=\n- Admin parent=\n  - Users parent=\n");
}
