use super::builder::MenuTreeBuilder;
use super::types::MenuItem;
use crate::error::Result;

/// Change delivered to the owner of a menu collection
#[derive(Debug, Clone)]
pub enum MenuEvent {
    /// A new item to append at the root level
    Created(MenuItem),
    /// Swap the whole collection, e.g. after a fresh fetch
    Replaced(Vec<MenuItem>),
}

/// Root-level menu collection held by the owning view. All changes go
/// through [`MenuCollection::apply`].
#[derive(Debug, Default)]
pub struct MenuCollection {
    tree: MenuTreeBuilder,
}

impl MenuCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<MenuItem>) -> Result<Self> {
        let mut collection = Self::new();
        collection.apply(MenuEvent::Replaced(items))?;
        Ok(collection)
    }

    /// Apply an event. A rejected event leaves the collection as it was.
    pub fn apply(&mut self, event: MenuEvent) -> Result<()> {
        match event {
            MenuEvent::Created(item) => {
                let id = item.id.clone();
                self.tree.append(item)?;
                tracing::debug!("Appended menu item '{}' ({} items total)", id, self.tree.len());
            }
            MenuEvent::Replaced(items) => {
                let count = items.len();
                let mut tree = MenuTreeBuilder::new();
                tree.extend(items)?;
                self.tree = tree;
                tracing::debug!("Replaced menu collection with {} root items", count);
            }
        }
        Ok(())
    }

    pub fn items(&self) -> &[MenuItem] {
        self.tree.roots()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tree.contains(id)
    }

    pub fn into_items(self) -> Vec<MenuItem> {
        self.tree.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MenuError;

    #[test]
    fn created_appends_at_root() {
        let mut collection = MenuCollection::from_items(vec![MenuItem::new("1", "Dashboard")]).unwrap();
        collection
            .apply(MenuEvent::Created(MenuItem::new("2", "Tasks").with_order(-1)))
            .unwrap();

        let ids: Vec<_> = collection.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn duplicate_create_is_rejected() {
        let mut collection = MenuCollection::from_items(vec![MenuItem::new("1", "Dashboard")]).unwrap();
        let err = collection
            .apply(MenuEvent::Created(MenuItem::new("1", "Again")))
            .unwrap_err();
        assert!(matches!(err, MenuError::DuplicateId(_)));
        assert_eq!(collection.items().len(), 1);
    }

    #[test]
    fn failed_replace_keeps_previous_items() {
        let mut collection = MenuCollection::from_items(vec![MenuItem::new("1", "Dashboard")]).unwrap();
        let bad = vec![MenuItem::new("x", "X"), MenuItem::new("x", "X")];
        assert!(collection.apply(MenuEvent::Replaced(bad)).is_err());
        assert!(collection.contains("1"));

        collection
            .apply(MenuEvent::Replaced(vec![MenuItem::new("9", "Reports")]))
            .unwrap();
        assert!(!collection.contains("1"));
        assert_eq!(collection.into_items()[0].name, "Reports");
    }
}
