// src/domain/tree.rs
use crate::domain::item::{BookmarksData, Item};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Read-only index over a [`BookmarksData`] payload.
///
/// Items are borrowed from the payload; children are resolved by id on the
/// way down, so the structure never holds parent links.
#[derive(Debug)]
pub struct BookmarkTree<'a> {
    items: HashMap<&'a str, &'a Item>,
    roots: &'a [String],
}

impl<'a> BookmarkTree<'a> {
    #[instrument(level = "debug", skip_all)]
    pub fn new(data: &'a BookmarksData) -> Self {
        let items: HashMap<&str, &Item> = data
            .items
            .iter()
            .map(|item| (item.id.as_str(), item))
            .collect();
        debug!(
            "Indexed {} items, {} roots",
            items.len(),
            data.root_items.len()
        );
        Self {
            items,
            roots: &data.root_items,
        }
    }

    /// Looks up an item; unknown ids yield `None`
    pub fn get(&self, id: &str) -> Option<&'a Item> {
        self.items.get(id).copied()
    }

    pub fn roots(&self) -> &'a [String] {
        self.roots
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
