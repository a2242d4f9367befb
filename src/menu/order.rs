use super::types::MenuItem;

pub struct MenuOrder;

impl MenuOrder {
    /// Siblings ascending by effective order. `sort_by_key` is stable, so
    /// items with equal keys keep their input positions.
    pub fn sorted(items: &[MenuItem]) -> Vec<&MenuItem> {
        let mut sorted: Vec<&MenuItem> = items.iter().collect();
        sorted.sort_by_key(|item| item.effective_order());
        sorted
    }

    pub fn is_sorted(items: &[MenuItem]) -> bool {
        items
            .windows(2)
            .all(|pair| pair[0].effective_order() <= pair[1].effective_order())
    }

    /// Owned copy of the tree with siblings sorted at every depth
    pub fn sorted_tree(items: &[MenuItem]) -> Vec<MenuItem> {
        Self::sorted(items)
            .into_iter()
            .map(|item| MenuItem {
                children: Self::sorted_tree(&item.children),
                ..item.clone()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(items: impl IntoIterator<Item = &'a MenuItem>) -> Vec<&'a str> {
        items.into_iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn missing_order_sorts_as_zero() {
        let items = vec![
            MenuItem::new("b", "B").with_order(2),
            MenuItem::new("a", "A").with_order(1),
            MenuItem::new("c", "C"),
        ];
        assert_eq!(names(MenuOrder::sorted(&items)), vec!["C", "A", "B"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let items = vec![
            MenuItem::new("1", "First").with_order(5),
            MenuItem::new("2", "Second"),
            MenuItem::new("3", "Third").with_order(5),
            MenuItem::new("4", "Fourth").with_order(0),
            MenuItem::new("5", "Fifth").with_order(-1),
        ];
        assert_eq!(
            names(MenuOrder::sorted(&items)),
            vec!["Fifth", "Second", "Fourth", "First", "Third"]
        );
    }

    #[test]
    fn sorted_tree_sorts_every_level_without_touching_input() {
        let items = vec![MenuItem::new("p", "Parent").with_children(vec![
            MenuItem::new("x", "X").with_order(9),
            MenuItem::new("y", "Y").with_order(1),
        ])];
        let sorted = MenuOrder::sorted_tree(&items);
        assert_eq!(names(&sorted[0].children), vec!["Y", "X"]);
        assert!(!MenuOrder::is_sorted(&items[0].children));
        assert!(MenuOrder::is_sorted(&sorted[0].children));
    }
}
