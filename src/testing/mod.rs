use serde_json::{json, Value};

use crate::menu::{Icon, MenuItem};

/// Admin console menu as the backend serves it: nested, partly ordered,
/// with one malformed entry.
pub fn admin_document() -> Value {
    json!([
        { "id": 4, "name": "Projects", "url": "/projects", "icon": "fa-folder", "order": 2,
          "children": [
            { "id": 41, "name": "Tasks", "url": "/projects/tasks", "parentId": 4, "order": 2 },
            { "id": 42, "name": "Boards", "url": "/projects/boards", "parentId": 4, "order": 1 }
          ]},
        { "id": 1, "name": "Dashboard", "url": "/", "icon": "fa-home" },
        { "id": 2, "name": "Administration", "icon": "fa-cog", "order": 9, "requiredPrivilege": "ADMIN",
          "children": [
            { "id": 21, "name": "Users", "url": "/admin/users", "parentId": 2, "requiredPrivilege": "USER_MANAGE" },
            { "id": 22, "name": "Roles", "url": "/admin/roles", "parentId": 2 },
            { "id": 23, "name": "Privileges", "url": "/admin/privileges", "parentId": 2 },
            { "id": 24, "url": "/admin/broken", "parentId": 2 }
          ]},
        { "id": 3, "name": "Menus", "url": "/menus", "order": 2 }
    ])
}

/// Same shape as [`admin_document`] minus the malformed entry, built in code
pub fn admin_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new("4", "Projects")
            .with_url("/projects")
            .with_icon(Icon::Symbolic("fa-folder".into()))
            .with_order(2)
            .with_children(vec![
                MenuItem::new("41", "Tasks").with_url("/projects/tasks").with_parent("4").with_order(2),
                MenuItem::new("42", "Boards").with_url("/projects/boards").with_parent("4").with_order(1),
            ]),
        MenuItem::new("1", "Dashboard")
            .with_url("/")
            .with_icon(Icon::Symbolic("fa-home".into())),
        MenuItem::new("2", "Administration")
            .with_icon(Icon::Symbolic("fa-cog".into()))
            .with_order(9)
            .with_privilege("ADMIN")
            .with_children(vec![
                MenuItem::new("21", "Users").with_url("/admin/users").with_parent("2").with_privilege("USER_MANAGE"),
                MenuItem::new("22", "Roles").with_url("/admin/roles").with_parent("2"),
                MenuItem::new("23", "Privileges").with_url("/admin/privileges").with_parent("2"),
            ]),
        MenuItem::new("3", "Menus").with_url("/menus").with_order(2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::decode_items;

    #[test]
    fn document_and_menu_agree() {
        let decoded = decode_items(&admin_document()).unwrap();
        assert_eq!(decoded.skipped.len(), 1);
        assert_eq!(decoded.items, admin_menu());
    }
}
