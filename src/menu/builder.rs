use std::collections::{HashMap, HashSet};

use super::types::MenuItem;
use crate::error::{MenuError, Result};

/// Append-only construction of a menu forest.
///
/// Every identifier in the forest is tracked, so an item (or any of its
/// descendants) can only be placed once. Appends are all-or-nothing: a
/// rejected item leaves the builder unchanged.
#[derive(Debug, Default)]
pub struct MenuTreeBuilder {
    roots: Vec<MenuItem>,
    seen: HashSet<String>,
}

impl MenuTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, item: MenuItem) -> Result<&mut Self> {
        let path = format!("[{}]", self.roots.len());
        let ids = Self::subtree_ids(&item, &path, &self.seen)?;
        self.seen.extend(ids);
        self.roots.push(item);
        Ok(self)
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = MenuItem>) -> Result<&mut Self> {
        for item in items {
            self.append(item)?;
        }
        Ok(self)
    }

    /// Assemble a flat record list into a forest using `parentId`.
    ///
    /// Records keep their input order under their parent. A record without
    /// a parent, or whose parent is not in the list, becomes a root. A
    /// `parentId` chain that loops back is rejected.
    pub fn from_flat(records: Vec<MenuItem>) -> Result<Self> {
        let mut ids = HashSet::new();
        for (i, record) in records.iter().enumerate() {
            for id in Self::subtree_ids(record, &format!("[{}]", i), &ids)? {
                ids.insert(id);
            }
        }

        let (roots, children_of) = {
            let index: HashMap<&str, usize> = records
                .iter()
                .enumerate()
                .map(|(i, r)| (r.id.as_str(), i))
                .collect();

            let mut acyclic = HashSet::new();
            for i in 0..records.len() {
                Self::check_ancestry(i, &records, &index, &mut acyclic)?;
            }

            let mut roots = Vec::new();
            let mut children_of: HashMap<usize, Vec<usize>> = HashMap::new();
            for (i, record) in records.iter().enumerate() {
                match parent_key(record).map(|p| index.get(p)) {
                    Some(Some(&parent)) => children_of.entry(parent).or_default().push(i),
                    Some(None) => {
                        tracing::warn!(
                            "Menu item '{}' names unknown parent '{}'; placing it at the root",
                            record.id,
                            record.parent_id.as_deref().unwrap_or_default()
                        );
                        roots.push(i);
                    }
                    None => roots.push(i),
                }
            }
            (roots, children_of)
        };

        let mut slots: Vec<Option<MenuItem>> = records.into_iter().map(Some).collect();
        let mut builder = Self { roots: Vec::with_capacity(roots.len()), seen: ids };
        for i in roots {
            if let Some(item) = Self::attach(i, &mut slots, &children_of) {
                builder.roots.push(item);
            }
        }
        tracing::debug!("Assembled {} flat menu records into {} roots", slots.len(), builder.roots.len());
        Ok(builder)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn roots(&self) -> &[MenuItem] {
        &self.roots
    }

    pub fn build(self) -> Vec<MenuItem> {
        self.roots
    }

    /// Ids of `item` and its descendants, failing on a blank id or name, or
    /// on any id already in `taken` or repeated within the subtree itself
    fn subtree_ids(item: &MenuItem, path: &str, taken: &HashSet<String>) -> Result<Vec<String>> {
        let mut local = HashSet::new();
        Self::collect_ids(item, path, taken, &mut local)?;
        Ok(local.into_iter().collect())
    }

    fn collect_ids(item: &MenuItem, path: &str, taken: &HashSet<String>, local: &mut HashSet<String>) -> Result<()> {
        if item.id.trim().is_empty() {
            return Err(MenuError::malformed(path, "missing id"));
        }
        if item.name.trim().is_empty() {
            return Err(MenuError::malformed(path, format!("item '{}' has no name", item.id)));
        }
        if taken.contains(&item.id) || !local.insert(item.id.clone()) {
            return Err(MenuError::DuplicateId(item.id.clone()));
        }
        for (i, child) in item.children.iter().enumerate() {
            Self::collect_ids(child, &format!("{}.children[{}]", path, i), taken, local)?;
        }
        Ok(())
    }

    /// Follow `parentId` links up from `start`. Records already known to
    /// reach a root end the walk early, so each chain is walked once.
    fn check_ancestry(
        start: usize,
        records: &[MenuItem],
        index: &HashMap<&str, usize>,
        acyclic: &mut HashSet<usize>,
    ) -> Result<()> {
        if acyclic.contains(&start) {
            return Ok(());
        }
        let parent_of = |i: usize| parent_key(&records[i]).and_then(|p| index.get(p).copied());

        let mut chain = vec![start];
        let mut on_chain = HashSet::from([start]);
        let mut current = parent_of(start);
        while let Some(i) = current {
            if acyclic.contains(&i) {
                break;
            }
            if !on_chain.insert(i) {
                return Err(MenuError::CyclicStructure(records[start].id.clone()));
            }
            chain.push(i);
            current = parent_of(i);
        }
        acyclic.extend(chain);
        Ok(())
    }

    fn attach(i: usize, slots: &mut [Option<MenuItem>], children_of: &HashMap<usize, Vec<usize>>) -> Option<MenuItem> {
        let mut item = slots[i].take()?;
        if let Some(kids) = children_of.get(&i) {
            for &k in kids {
                if let Some(child) = Self::attach(k, slots, children_of) {
                    item.children.push(child);
                }
            }
        }
        Some(item)
    }
}

fn parent_key(record: &MenuItem) -> Option<&str> {
    record.parent_id.as_deref().map(str::trim).filter(|p| !p.is_empty())
}
